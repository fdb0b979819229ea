// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The dispatch order store.
//!
//! Every status change is a compare-and-swap: the caller names the status
//! it observed, and the write only lands if the stored order still has it.

use crate::error::CoreError;
use depot_domain::{DispatchOrder, EntityKind, NewDispatchOrder, OrderId, OrderStatus};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

#[derive(Debug, Default)]
struct OrderTable {
    orders: Vec<DispatchOrder>,
    index: HashMap<OrderId, usize>,
}

impl OrderTable {
    fn get(&self, id: &OrderId) -> Option<&DispatchOrder> {
        self.index.get(id).and_then(|&slot| self.orders.get(slot))
    }

    fn get_mut(&mut self, id: &OrderId) -> Option<&mut DispatchOrder> {
        let slot: usize = *self.index.get(id)?;
        self.orders.get_mut(slot)
    }
}

/// Dispatch orders keyed by id, in creation order.
#[derive(Debug, Default)]
pub struct OrderStore {
    table: RwLock<OrderTable>,
}

impl OrderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, OrderTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, OrderTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validates and stores a new `Pending` order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DomainViolation` for invalid input and
    /// `CoreError::DuplicateId` if the id is taken.
    pub fn create(&self, new_order: NewDispatchOrder) -> Result<DispatchOrder, CoreError> {
        let order: DispatchOrder = new_order.validate()?;

        let mut table = self.write();
        if table.index.contains_key(&order.id) {
            return Err(CoreError::DuplicateId {
                kind: EntityKind::Order,
                id: order.id.to_string(),
            });
        }
        let slot: usize = table.orders.len();
        table.index.insert(order.id.clone(), slot);
        table.orders.push(order.clone());

        info!(order_id = %order.id, priority = %order.priority, "Created dispatch order");
        Ok(order)
    }

    /// Returns a snapshot of one order.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the id is unknown.
    pub fn get(&self, id: &OrderId) -> Result<DispatchOrder, CoreError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::order_not_found(id))
    }

    #[must_use]
    pub fn list(&self) -> Vec<DispatchOrder> {
        self.read().orders.clone()
    }

    #[must_use]
    pub fn list_by_status(&self, status: OrderStatus) -> Vec<DispatchOrder> {
        self.read()
            .orders
            .iter()
            .filter(|order| order.status == status)
            .cloned()
            .collect()
    }

    /// Counts orders per status, in lifecycle order.
    #[must_use]
    pub fn status_counts(&self) -> Vec<(OrderStatus, usize)> {
        let table = self.read();
        OrderStatus::ALL
            .iter()
            .map(|&status| {
                let count: usize = table.orders.iter().filter(|o| o.status == status).count();
                (status, count)
            })
            .collect()
    }

    /// Moves an order from `from` to `to` without touching other fields.
    ///
    /// # Errors
    ///
    /// See [`OrderStore::compare_and_set`].
    pub fn transition(
        &self,
        id: &OrderId,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<DispatchOrder, CoreError> {
        self.compare_and_set(id, from, to, |_| {})
    }

    /// Moves an order from `from` to `to`, letting `stamp` fill in the
    /// fields that go with the new status.
    ///
    /// `stamp` edits a copy; the copy replaces the stored order only if the
    /// stored status is still `from` and the result keeps its resource
    /// references consistent with its status.
    ///
    /// # Errors
    ///
    /// * `CoreError::DomainViolation` if `from -> to` is not a lifecycle edge
    /// * `CoreError::NotFound` if the id is unknown
    /// * `CoreError::StaleState` if the stored status is not `from`
    /// * `CoreError::InvariantViolation` if `stamp` left references inconsistent
    pub fn compare_and_set<F>(
        &self,
        id: &OrderId,
        from: OrderStatus,
        to: OrderStatus,
        stamp: F,
    ) -> Result<DispatchOrder, CoreError>
    where
        F: FnOnce(&mut DispatchOrder),
    {
        from.validate_transition(to)?;

        let mut table = self.write();
        let stored: &mut DispatchOrder = table
            .get_mut(id)
            .ok_or_else(|| CoreError::order_not_found(id))?;

        if stored.status != from {
            debug!(order_id = %id, expected = %from, actual = %stored.status, "Stale order transition");
            return Err(CoreError::StaleState {
                kind: EntityKind::Order,
                id: id.to_string(),
                expected: from.to_string(),
                actual: stored.status.to_string(),
            });
        }

        let mut next: DispatchOrder = stored.clone();
        next.status = to;
        stamp(&mut next);
        if !next.references_consistent() {
            return Err(CoreError::InvariantViolation {
                reason: format!("order '{id}' in {to} with inconsistent resource references"),
            });
        }

        *stored = next.clone();
        debug!(order_id = %id, from = %from, to = %to, "Order transitioned");
        Ok(next)
    }
}

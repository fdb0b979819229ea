// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Warehouse stock registry with revision-checked updates.

use crate::error::CoreError;
use depot_domain::{
    EntityKind, NewStockItem, StockItem, StockItemId, StockStatus, StockThresholds, StockUpdate,
};
use serde::Serialize;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use time::Date;
use tracing::info;

/// Aggregate stock counts for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StockSummary {
    pub total_items: usize,
    pub low_stock: usize,
    pub critical_stock: usize,
    pub expiring_soon: usize,
}

#[derive(Debug)]
struct Shelf {
    items: Vec<StockItem>,
    next_id: u32,
}

impl Shelf {
    fn position(&self, id: StockItemId) -> Result<usize, CoreError> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CoreError::NotFound {
                kind: EntityKind::StockItem,
                id: id.to_string(),
            })
    }

    /// Finds an item and checks that it still has `expected_revision`.
    fn checked_position(
        &self,
        id: StockItemId,
        expected_revision: u64,
    ) -> Result<usize, CoreError> {
        let position: usize = self.position(id)?;
        let actual: u64 = self.items[position].revision;
        if actual != expected_revision {
            return Err(CoreError::StaleState {
                kind: EntityKind::StockItem,
                id: id.to_string(),
                expected: format!("revision {expected_revision}"),
                actual: format!("revision {actual}"),
            });
        }
        Ok(position)
    }
}

/// Stock items, in creation order.
#[derive(Debug)]
pub struct StockRegistry {
    shelf: RwLock<Shelf>,
    thresholds: StockThresholds,
    expiry_window_days: u32,
}

impl StockRegistry {
    #[must_use]
    pub const fn new(thresholds: StockThresholds, expiry_window_days: u32) -> Self {
        Self {
            shelf: RwLock::new(Shelf {
                items: Vec::new(),
                next_id: 1,
            }),
            thresholds,
            expiry_window_days,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Shelf> {
        self.shelf.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shelf> {
        self.shelf.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub const fn thresholds(&self) -> StockThresholds {
        self.thresholds
    }

    #[must_use]
    pub const fn expiry_window_days(&self) -> u32 {
        self.expiry_window_days
    }

    /// Validates and stores a new item under the next free id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DuplicateId` if the batch id is already stocked
    /// and `CoreError::DomainViolation` for blank fields or a quantity that
    /// is not positive.
    pub fn create_item(&self, new_item: NewStockItem) -> Result<StockItem, CoreError> {
        let mut shelf = self.write();
        let batch_id: &str = new_item.batch_id.trim();
        if shelf
            .items
            .iter()
            .any(|item| item.batch_id.eq_ignore_ascii_case(batch_id))
        {
            return Err(CoreError::DuplicateId {
                kind: EntityKind::StockItem,
                id: batch_id.to_string(),
            });
        }

        let item: StockItem = new_item.validate(StockItemId(shelf.next_id), &self.thresholds)?;
        shelf.next_id += 1;
        shelf.items.push(item.clone());

        info!(stock_item_id = %item.id, batch_id = %item.batch_id, status = %item.status, "Stock item created");
        Ok(item)
    }

    /// Applies `update` if the item is still at `expected_revision`.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` if the id is unknown
    /// * `CoreError::StaleState` if the revision has moved on
    /// * `CoreError::DomainViolation` for invalid updated values
    pub fn update_item(
        &self,
        id: StockItemId,
        expected_revision: u64,
        update: StockUpdate,
    ) -> Result<StockItem, CoreError> {
        let mut shelf = self.write();
        let position: usize = shelf.checked_position(id, expected_revision)?;
        let updated: StockItem = update.apply_to(&shelf.items[position], &self.thresholds)?;
        shelf.items[position] = updated.clone();

        info!(
            stock_item_id = %id,
            revision = updated.revision,
            status = %updated.status,
            "Stock item updated"
        );
        Ok(updated)
    }

    /// Removes an item if it is still at `expected_revision`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` or `CoreError::StaleState` as for
    /// [`StockRegistry::update_item`].
    pub fn delete_item(
        &self,
        id: StockItemId,
        expected_revision: u64,
    ) -> Result<StockItem, CoreError> {
        let mut shelf = self.write();
        let position: usize = shelf.checked_position(id, expected_revision)?;
        let removed: StockItem = shelf.items.remove(position);
        info!(stock_item_id = %id, batch_id = %removed.batch_id, "Stock item deleted");
        Ok(removed)
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the id is unknown.
    pub fn get(&self, id: StockItemId) -> Result<StockItem, CoreError> {
        let shelf = self.read();
        let position: usize = shelf.position(id)?;
        Ok(shelf.items[position].clone())
    }

    #[must_use]
    pub fn list(&self) -> Vec<StockItem> {
        self.read().items.clone()
    }

    /// Case-insensitive substring match on product name, batch id and
    /// category. A blank term matches everything.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<StockItem> {
        let needle: String = term.trim().to_lowercase();
        self.read()
            .items
            .iter()
            .filter(|item| {
                needle.is_empty()
                    || item.product_name.to_lowercase().contains(&needle)
                    || item.batch_id.to_lowercase().contains(&needle)
                    || item.category.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// Items that are low, critical, or expire inside the warning window.
    #[must_use]
    pub fn attention_items(&self, today: Date) -> Vec<StockItem> {
        self.read()
            .items
            .iter()
            .filter(|item| {
                item.status.needs_attention()
                    || item.expires_within(today, self.expiry_window_days)
            })
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn summary(&self, today: Date) -> StockSummary {
        let shelf = self.read();
        let mut summary: StockSummary = StockSummary {
            total_items: shelf.items.len(),
            ..StockSummary::default()
        };
        for item in &shelf.items {
            match item.status {
                StockStatus::LowStock => summary.low_stock += 1,
                StockStatus::CriticalStock => summary.critical_stock += 1,
                StockStatus::InStock => {}
            }
            if item.expires_within(today, self.expiry_window_days) {
                summary.expiring_soon += 1;
            }
        }
        summary
    }
}

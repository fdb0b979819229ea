// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The delivery tracking ledger.
//!
//! One delivery record per dispatched order. Progress only moves forward;
//! reaching 100% completes the delivery and, through [`OrderCompletion`],
//! the order behind it.

use crate::error::CoreError;
use depot_domain::{
    Alert, AlertId, Delivery, DeliveryId, DeliveryStatus, DispatchOrder, EntityKind,
    GeoPoint, NewAlert, OrderId, OrderStatus, RoutePoint, status_after_alert,
    status_after_resolution, validate_non_empty, validate_progress,
};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use time::OffsetDateTime;
use tracing::{info, warn};

/// Marks the order behind a finished delivery as `Delivered`.
pub trait OrderCompletion {
    /// # Errors
    ///
    /// Returns an error if the order is unknown or not `Dispatched`.
    fn complete_order(
        &self,
        order_id: &OrderId,
        at: OffsetDateTime,
    ) -> Result<DispatchOrder, CoreError>;
}

const FIRST_DELIVERY_NUMBER: u64 = 1000;

#[derive(Debug)]
struct Book {
    deliveries: Vec<Delivery>,
    index: HashMap<DeliveryId, usize>,
    by_order: HashMap<OrderId, DeliveryId>,
    next_delivery: u64,
    next_alert: u64,
}

impl Book {
    fn slot(&self, id: &DeliveryId) -> Result<usize, CoreError> {
        self.index.get(id).copied().ok_or_else(|| CoreError::NotFound {
            kind: EntityKind::Delivery,
            id: id.to_string(),
        })
    }

    fn active_slot(&self, id: &DeliveryId) -> Result<usize, CoreError> {
        let slot: usize = self.slot(id)?;
        if self.deliveries[slot].status == DeliveryStatus::Delivered {
            return Err(CoreError::DeliveryCompleted {
                delivery_id: id.clone(),
            });
        }
        Ok(slot)
    }
}

/// Delivery records, in the order they were opened.
#[derive(Debug)]
pub struct DeliveryLedger {
    book: Mutex<Book>,
}

impl Default for DeliveryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryLedger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            book: Mutex::new(Book {
                deliveries: Vec::new(),
                index: HashMap::new(),
                by_order: HashMap::new(),
                next_delivery: FIRST_DELIVERY_NUMBER,
                next_alert: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Book> {
        self.book.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Opens the delivery record for a dispatched order.
    ///
    /// The record starts `InTransit` at 0% with a one-point route at `origin`.
    ///
    /// # Errors
    ///
    /// * `CoreError::OrderNotDispatched` if the order is not `Dispatched`
    /// * `CoreError::DuplicateId` if the order already has a delivery
    pub(crate) fn open(
        &self,
        order: &DispatchOrder,
        origin: GeoPoint,
        at: OffsetDateTime,
    ) -> Result<Delivery, CoreError> {
        let Some((vehicle, driver)) = order
            .resources()
            .filter(|_| order.status == OrderStatus::Dispatched)
        else {
            return Err(CoreError::OrderNotDispatched {
                order_id: order.id.clone(),
                status: order.status,
            });
        };

        let mut book = self.lock();
        if let Some(existing) = book.by_order.get(&order.id) {
            return Err(CoreError::DuplicateId {
                kind: EntityKind::Delivery,
                id: existing.to_string(),
            });
        }

        let id: DeliveryId = DeliveryId::new(&format!("DEL-{}", book.next_delivery));
        book.next_delivery += 1;

        let delivery: Delivery = Delivery {
            id: id.clone(),
            order_id: order.id.clone(),
            destination: order.destination.clone(),
            address: order.address.clone(),
            vehicle: vehicle.clone(),
            driver: driver.clone(),
            departed_at: at,
            completed_at: None,
            progress: 0,
            current_location: origin,
            route: vec![RoutePoint {
                location: origin,
                recorded_at: at,
            }],
            alerts: Vec::new(),
            status: DeliveryStatus::InTransit,
        };

        let slot: usize = book.deliveries.len();
        book.index.insert(id.clone(), slot);
        book.by_order.insert(order.id.clone(), id.clone());
        book.deliveries.push(delivery.clone());

        info!(delivery_id = %id, order_id = %order.id, "Opened delivery");
        Ok(delivery)
    }

    /// Records a progress report and position.
    ///
    /// Progress may stay equal but never decrease. At 100% the delivery and
    /// its order become `Delivered`; if completing the order fails the
    /// delivery is left unchanged.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` if the delivery is unknown
    /// * `CoreError::DeliveryCompleted` if it is already delivered
    /// * `CoreError::DomainViolation` for progress above 100 or below the stored value
    /// * any error from `completion` when the delivery finishes
    pub fn record_progress(
        &self,
        delivery_id: &DeliveryId,
        progress: u16,
        location: GeoPoint,
        at: OffsetDateTime,
        completion: &dyn OrderCompletion,
    ) -> Result<Delivery, CoreError> {
        let mut book = self.lock();
        let slot: usize = book.active_slot(delivery_id)?;

        let mut next: Delivery = book.deliveries[slot].clone();
        next.progress = validate_progress(next.progress, progress)?;
        next.current_location = location;
        next.route.push(RoutePoint {
            location,
            recorded_at: at,
        });

        if next.progress == 100 {
            completion.complete_order(&next.order_id, at)?;
            next.status = DeliveryStatus::Delivered;
            next.completed_at = Some(at);
            info!(delivery_id = %delivery_id, order_id = %next.order_id, "Delivery completed");
        }

        book.deliveries[slot] = next.clone();
        Ok(next)
    }

    /// Attaches an alert. A `High` alert delays an in-transit delivery.
    ///
    /// Returns the updated delivery and the new alert.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` if the delivery is unknown
    /// * `CoreError::DeliveryCompleted` if it is already delivered
    /// * `CoreError::DomainViolation` if the alert type or message is blank
    pub fn raise_alert(
        &self,
        delivery_id: &DeliveryId,
        alert: NewAlert,
        at: OffsetDateTime,
    ) -> Result<(Delivery, Alert), CoreError> {
        let kind: String = validate_non_empty("alert_type", &alert.kind)?;
        let message: String = validate_non_empty("message", &alert.message)?;

        let mut book = self.lock();
        let slot: usize = book.active_slot(delivery_id)?;

        let raised: Alert = Alert {
            id: AlertId(book.next_alert),
            kind,
            message,
            severity: alert.severity,
            raised_at: at,
        };
        book.next_alert += 1;

        let delivery: &mut Delivery = &mut book.deliveries[slot];
        delivery.alerts.push(raised.clone());
        delivery.status = status_after_alert(delivery.status, raised.severity);

        warn!(
            delivery_id = %delivery_id,
            alert_id = %raised.id,
            severity = %raised.severity,
            status = %delivery.status,
            "Delivery alert raised"
        );
        Ok((delivery.clone(), raised))
    }

    /// Removes an alert. A delayed delivery with no alerts left goes back
    /// in transit.
    ///
    /// Returns the updated delivery and the removed alert.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` if the delivery is unknown
    /// * `CoreError::DeliveryCompleted` if it is already delivered
    /// * `CoreError::AlertNotFound` if the alert is not on this delivery
    pub fn resolve_alert(
        &self,
        delivery_id: &DeliveryId,
        alert_id: AlertId,
    ) -> Result<(Delivery, Alert), CoreError> {
        let mut book = self.lock();
        let slot: usize = book.active_slot(delivery_id)?;

        let delivery: &mut Delivery = &mut book.deliveries[slot];
        let position: usize = delivery
            .alerts
            .iter()
            .position(|a| a.id == alert_id)
            .ok_or_else(|| CoreError::AlertNotFound {
                delivery_id: delivery_id.clone(),
                alert_id,
            })?;
        let resolved: Alert = delivery.alerts.remove(position);
        delivery.status = status_after_resolution(delivery.status, delivery.alerts.len());

        info!(
            delivery_id = %delivery_id,
            alert_id = %alert_id,
            status = %delivery.status,
            "Delivery alert resolved"
        );
        Ok((delivery.clone(), resolved))
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the delivery is unknown.
    pub fn get(&self, id: &DeliveryId) -> Result<Delivery, CoreError> {
        let book = self.lock();
        let slot: usize = book.slot(id)?;
        Ok(book.deliveries[slot].clone())
    }

    /// The delivery opened for an order, if it has been dispatched.
    #[must_use]
    pub fn delivery_for_order(&self, order_id: &OrderId) -> Option<Delivery> {
        let book = self.lock();
        let id: &DeliveryId = book.by_order.get(order_id)?;
        let slot: usize = *book.index.get(id)?;
        book.deliveries.get(slot).cloned()
    }

    #[must_use]
    pub fn list(&self) -> Vec<Delivery> {
        self.lock().deliveries.clone()
    }

    /// Deliveries that are `InTransit` or `Delayed`.
    #[must_use]
    pub fn list_active(&self) -> Vec<Delivery> {
        self.filtered(Delivery::is_active)
    }

    #[must_use]
    pub fn list_completed(&self) -> Vec<Delivery> {
        self.filtered(|d| d.status == DeliveryStatus::Delivered)
    }

    fn filtered(&self, keep: impl Fn(&Delivery) -> bool) -> Vec<Delivery> {
        self.lock()
            .deliveries
            .iter()
            .filter(|d| keep(d))
            .cloned()
            .collect()
    }
}

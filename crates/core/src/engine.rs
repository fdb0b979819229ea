// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The allocation engine.
//!
//! Couples order transitions with fleet reservations so that an order holds
//! a vehicle and driver exactly while it is `Assigned` or `Dispatched`.
//! Each operation either completes or leaves the fleet and the order as it
//! found them.

use crate::clock::Clock;
use crate::error::CoreError;
use crate::fleet::FleetRegistry;
use crate::ledger::{DeliveryLedger, OrderCompletion};
use crate::orders::OrderStore;
use depot_domain::{Delivery, DispatchOrder, DriverId, GeoPoint, OrderId, OrderStatus, VehicleId};
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::{info, warn};

/// The outcome of a successful dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub order: DispatchOrder,
    pub delivery: Delivery,
}

/// Assigns, dispatches, cancels and completes orders.
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    fleet: Arc<FleetRegistry>,
    orders: Arc<OrderStore>,
    ledger: Arc<DeliveryLedger>,
    clock: Arc<dyn Clock>,
    origin: GeoPoint,
}

impl AllocationEngine {
    #[must_use]
    pub const fn new(
        fleet: Arc<FleetRegistry>,
        orders: Arc<OrderStore>,
        ledger: Arc<DeliveryLedger>,
        clock: Arc<dyn Clock>,
        origin: GeoPoint,
    ) -> Self {
        Self {
            fleet,
            orders,
            ledger,
            clock,
            origin,
        }
    }

    /// Reserves a vehicle and driver for a `Pending` order.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` for an unknown order, vehicle or driver
    /// * `CoreError::OrderNotPending` if the order is not `Pending`
    /// * `CoreError::ResourceUnavailable` if either resource is taken
    /// * `CoreError::StaleState` if the order changed while reserving; the
    ///   reservation is released before returning
    pub fn assign(
        &self,
        order_id: &OrderId,
        vehicle_id: &VehicleId,
        driver_id: &DriverId,
    ) -> Result<DispatchOrder, CoreError> {
        let order: DispatchOrder = self.orders.get(order_id)?;
        if order.status != OrderStatus::Pending {
            return Err(CoreError::OrderNotPending {
                order_id: order_id.clone(),
                status: order.status,
            });
        }

        self.fleet.reserve(vehicle_id, driver_id)?;

        let at: OffsetDateTime = self.clock.now();
        let committed = self.orders.compare_and_set(
            order_id,
            OrderStatus::Pending,
            OrderStatus::Assigned,
            |next| {
                next.vehicle = Some(vehicle_id.clone());
                next.driver = Some(driver_id.clone());
                next.assigned_at = Some(at);
            },
        );

        match committed {
            Ok(assigned) => {
                info!(
                    order_id = %order_id,
                    vehicle_id = %vehicle_id,
                    driver_id = %driver_id,
                    "Assigned resources to order"
                );
                Ok(assigned)
            }
            Err(e) => {
                warn!(order_id = %order_id, error = %e, "Assignment lost; releasing reservation");
                self.fleet.release(vehicle_id, driver_id);
                Err(e)
            }
        }
    }

    /// Puts an `Assigned` order on the road and opens its delivery record.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` for an unknown order
    /// * `CoreError::OrderNotAssigned` if the order is not `Assigned`
    /// * `CoreError::StaleState` if the order changed concurrently
    pub fn dispatch(&self, order_id: &OrderId) -> Result<Dispatched, CoreError> {
        let before: DispatchOrder = self.orders.get(order_id)?;
        if before.status != OrderStatus::Assigned {
            return Err(CoreError::OrderNotAssigned {
                order_id: order_id.clone(),
                status: before.status,
            });
        }

        let at: OffsetDateTime = self.clock.now();
        let order: DispatchOrder = self.orders.compare_and_set(
            order_id,
            OrderStatus::Assigned,
            OrderStatus::Dispatched,
            |next| next.dispatched_at = Some(at),
        )?;

        // The order is Dispatched and only this call opens its delivery.
        let delivery: Delivery = self.ledger.open(&order, self.origin, at)?;
        info!(order_id = %order_id, delivery_id = %delivery.id, "Dispatched order");
        Ok(Dispatched { order, delivery })
    }

    /// Cancels a `Pending` or `Assigned` order, freeing any reservation.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` for an unknown order
    /// * `CoreError::OrderNotCancelable` if the order is past `Assigned`
    /// * `CoreError::StaleState` if the order changed concurrently
    pub fn cancel(&self, order_id: &OrderId) -> Result<DispatchOrder, CoreError> {
        let before: DispatchOrder = self.orders.get(order_id)?;
        if !before.status.is_cancelable() {
            return Err(CoreError::OrderNotCancelable {
                order_id: order_id.clone(),
                status: before.status,
            });
        }

        let at: OffsetDateTime = self.clock.now();
        let cancelled: DispatchOrder = self.orders.compare_and_set(
            order_id,
            before.status,
            OrderStatus::Cancelled,
            |next| {
                next.vehicle = None;
                next.driver = None;
                next.cancelled_at = Some(at);
            },
        )?;

        if let Some((vehicle_id, driver_id)) = before.resources() {
            self.fleet.release(vehicle_id, driver_id);
        }

        info!(order_id = %order_id, from = %before.status, "Cancelled order");
        Ok(cancelled)
    }

    /// Completes a `Dispatched` order and returns its resources to the fleet.
    ///
    /// # Errors
    ///
    /// * `CoreError::NotFound` for an unknown order
    /// * `CoreError::OrderNotDispatched` if the order is not `Dispatched`
    /// * `CoreError::StaleState` if the order changed concurrently
    pub(crate) fn mark_delivered(
        &self,
        order_id: &OrderId,
        at: OffsetDateTime,
    ) -> Result<DispatchOrder, CoreError> {
        let before: DispatchOrder = self.orders.get(order_id)?;
        if before.status != OrderStatus::Dispatched {
            return Err(CoreError::OrderNotDispatched {
                order_id: order_id.clone(),
                status: before.status,
            });
        }

        let delivered: DispatchOrder = self.orders.compare_and_set(
            order_id,
            OrderStatus::Dispatched,
            OrderStatus::Delivered,
            |next| next.delivered_at = Some(at),
        )?;

        if let Some((vehicle_id, driver_id)) = delivered.resources() {
            self.fleet.release(vehicle_id, driver_id);
        }

        info!(order_id = %order_id, "Order delivered");
        Ok(delivered)
    }
}

impl OrderCompletion for AllocationEngine {
    fn complete_order(
        &self,
        order_id: &OrderId,
        at: OffsetDateTime,
    ) -> Result<DispatchOrder, CoreError> {
        self.mark_delivered(order_id, at)
    }
}

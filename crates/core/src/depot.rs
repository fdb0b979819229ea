// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::clock::{Clock, SystemClock};
use crate::engine::{AllocationEngine, Dispatched};
use crate::error::CoreError;
use crate::fleet::FleetRegistry;
use crate::ledger::DeliveryLedger;
use crate::orders::OrderStore;
use crate::stock::StockRegistry;
use depot_domain::{
    Alert, AlertId, Delivery, DeliveryId, DispatchOrder, DriverId, DriverStatus, GeoPoint,
    NewAlert, OrderId, OrderStatus, StockThresholds, VehicleId, VehicleStatus,
};
use std::sync::Arc;
use time::{Date, OffsetDateTime};

/// Runtime configuration for a depot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepotConfig {
    /// Where every delivery route starts.
    pub origin: GeoPoint,
    pub stock_thresholds: StockThresholds,
    /// Stock expiring within this many days needs attention.
    pub expiry_window_days: u32,
    /// Whether api commands retry once after losing a compare-and-swap.
    pub retry_on_stale: bool,
}

impl DepotConfig {
    pub const DEFAULT_ORIGIN: GeoPoint = GeoPoint {
        lat: 34.0522,
        lng: -118.2437,
    };
    pub const DEFAULT_EXPIRY_WINDOW_DAYS: u32 = 90;
}

impl Default for DepotConfig {
    fn default() -> Self {
        Self {
            origin: Self::DEFAULT_ORIGIN,
            stock_thresholds: StockThresholds::default(),
            expiry_window_days: Self::DEFAULT_EXPIRY_WINDOW_DAYS,
            retry_on_stale: true,
        }
    }
}

/// The registries, the ledger and the engine wired together.
#[derive(Debug)]
pub struct Depot {
    config: DepotConfig,
    clock: Arc<dyn Clock>,
    fleet: Arc<FleetRegistry>,
    orders: Arc<OrderStore>,
    ledger: Arc<DeliveryLedger>,
    engine: AllocationEngine,
    stock: StockRegistry,
}

impl Depot {
    #[must_use]
    pub fn new(config: DepotConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(config: DepotConfig, clock: Arc<dyn Clock>) -> Self {
        let fleet: Arc<FleetRegistry> = Arc::new(FleetRegistry::new());
        let orders: Arc<OrderStore> = Arc::new(OrderStore::new());
        let ledger: Arc<DeliveryLedger> = Arc::new(DeliveryLedger::new());
        let engine: AllocationEngine = AllocationEngine::new(
            Arc::clone(&fleet),
            Arc::clone(&orders),
            Arc::clone(&ledger),
            Arc::clone(&clock),
            config.origin,
        );
        let stock: StockRegistry =
            StockRegistry::new(config.stock_thresholds, config.expiry_window_days);

        Self {
            config,
            clock,
            fleet,
            orders,
            ledger,
            engine,
            stock,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &DepotConfig {
        &self.config
    }

    #[must_use]
    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    #[must_use]
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    #[must_use]
    pub fn fleet(&self) -> &FleetRegistry {
        &self.fleet
    }

    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.orders
    }

    #[must_use]
    pub fn ledger(&self) -> &DeliveryLedger {
        &self.ledger
    }

    #[must_use]
    pub const fn engine(&self) -> &AllocationEngine {
        &self.engine
    }

    #[must_use]
    pub const fn stock(&self) -> &StockRegistry {
        &self.stock
    }

    /// See [`AllocationEngine::assign`].
    ///
    /// # Errors
    ///
    /// Propagates the engine's errors.
    pub fn assign(
        &self,
        order_id: &OrderId,
        vehicle_id: &VehicleId,
        driver_id: &DriverId,
    ) -> Result<DispatchOrder, CoreError> {
        self.engine.assign(order_id, vehicle_id, driver_id)
    }

    /// See [`AllocationEngine::dispatch`].
    ///
    /// # Errors
    ///
    /// Propagates the engine's errors.
    pub fn dispatch(&self, order_id: &OrderId) -> Result<Dispatched, CoreError> {
        self.engine.dispatch(order_id)
    }

    /// See [`AllocationEngine::cancel`].
    ///
    /// # Errors
    ///
    /// Propagates the engine's errors.
    pub fn cancel(&self, order_id: &OrderId) -> Result<DispatchOrder, CoreError> {
        self.engine.cancel(order_id)
    }

    /// Records progress, completing the order when it reaches 100%.
    ///
    /// # Errors
    ///
    /// See [`DeliveryLedger::record_progress`].
    pub fn record_progress(
        &self,
        delivery_id: &DeliveryId,
        progress: u16,
        location: GeoPoint,
    ) -> Result<Delivery, CoreError> {
        self.ledger
            .record_progress(delivery_id, progress, location, self.now(), &self.engine)
    }

    /// # Errors
    ///
    /// See [`DeliveryLedger::raise_alert`].
    pub fn raise_alert(
        &self,
        delivery_id: &DeliveryId,
        alert: NewAlert,
    ) -> Result<(Delivery, Alert), CoreError> {
        self.ledger.raise_alert(delivery_id, alert, self.now())
    }

    /// # Errors
    ///
    /// See [`DeliveryLedger::resolve_alert`].
    pub fn resolve_alert(
        &self,
        delivery_id: &DeliveryId,
        alert_id: AlertId,
    ) -> Result<(Delivery, Alert), CoreError> {
        self.ledger.resolve_alert(delivery_id, alert_id)
    }

    /// Cross-checks orders, fleet and ledger.
    ///
    /// Returns one line per broken rule; empty when everything agrees.
    #[must_use]
    pub fn consistency_violations(&self) -> Vec<String> {
        let orders: Vec<DispatchOrder> = self.orders.list();
        let mut violations: Vec<String> = Vec::new();

        for order in &orders {
            if !order.references_consistent() {
                violations.push(format!(
                    "order {} is {} but its resource references disagree",
                    order.id, order.status
                ));
            }
            let has_delivery: bool = self.ledger.delivery_for_order(&order.id).is_some();
            let expects_delivery: bool =
                matches!(order.status, OrderStatus::Dispatched | OrderStatus::Delivered);
            if has_delivery != expects_delivery {
                violations.push(format!(
                    "order {} is {} but has_delivery={has_delivery}",
                    order.id, order.status
                ));
            }
        }

        let active: Vec<&DispatchOrder> = orders
            .iter()
            .filter(|o| matches!(o.status, OrderStatus::Assigned | OrderStatus::Dispatched))
            .collect();

        for vehicle in self.fleet.list_vehicles() {
            let holders: usize = active
                .iter()
                .filter(|o| o.vehicle.as_ref() == Some(&vehicle.id))
                .count();
            let reserved: bool = vehicle.status == VehicleStatus::Assigned;
            if holders > 1 || reserved != (holders == 1) {
                violations.push(format!(
                    "vehicle {} is {} and held by {holders} active orders",
                    vehicle.id, vehicle.status
                ));
            }
        }

        for driver in self.fleet.list_drivers() {
            let holders: usize = active
                .iter()
                .filter(|o| o.driver.as_ref() == Some(&driver.id))
                .count();
            let reserved: bool = driver.status == DriverStatus::Assigned;
            if holders > 1 || reserved != (holders == 1) {
                violations.push(format!(
                    "driver {} is {} and held by {holders} active orders",
                    driver.id, driver.status
                ));
            }
        }

        violations
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod delivery;
mod error;
mod fleet;
mod ids;
mod order;
mod order_status;
mod stock;
mod validation;

#[cfg(test)]
mod tests;

pub use delivery::{
    Alert, Delivery, DeliveryStatus, GeoPoint, NewAlert, RoutePoint, Severity, status_after_alert,
    status_after_resolution, validate_progress,
};
pub use error::DomainError;
pub use fleet::{Capacity, Driver, DriverStatus, Vehicle, VehicleKind, VehicleStatus};
pub use ids::{AlertId, DeliveryId, DriverId, EntityKind, OrderId, StockItemId, VehicleId};
pub use order::{DispatchOrder, LineItem, NewDispatchOrder, NewLineItem};
pub use order_status::{OrderStatus, Priority};
pub use stock::{NewStockItem, StockItem, StockStatus, StockThresholds, StockUpdate};
pub use validation::{parse_date, validate_non_empty, validate_quantity};

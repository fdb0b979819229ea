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

//! Dispatch resource allocation and delivery tracking.
//!
//! The [`FleetRegistry`] owns vehicle and driver availability, the
//! [`OrderStore`] owns dispatch order lifecycles, the [`DeliveryLedger`]
//! owns delivery progress and alerts, and the [`AllocationEngine`] is the
//! only code that moves an order and its resources together. A [`Depot`]
//! wires them up with a [`StockRegistry`] and a [`Clock`].

mod clock;
mod depot;
mod engine;
mod error;
mod fleet;
mod ledger;
mod orders;
mod stock;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use depot::{Depot, DepotConfig};
pub use engine::{AllocationEngine, Dispatched};
pub use error::CoreError;
pub use fleet::{FleetError, FleetRegistry};
pub use ledger::{DeliveryLedger, OrderCompletion};
pub use orders::OrderStore;
pub use stock::{StockRegistry, StockSummary};

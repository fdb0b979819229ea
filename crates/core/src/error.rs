// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::fleet::FleetError;
use depot_domain::{AlertId, DeliveryId, DomainError, EntityKind, OrderId, OrderStatus};
use thiserror::Error;

/// Errors raised by the registries, the allocation engine, and the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The referenced entity does not exist.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    /// A vehicle or driver cannot be reserved or moved in its current status.
    #[error("{kind} '{id}' is not available (currently {status})")]
    ResourceUnavailable {
        kind: EntityKind,
        id: String,
        status: String,
    },

    #[error("Dispatch order '{order_id}' is {status}; only Pending orders can be assigned")]
    OrderNotPending {
        order_id: OrderId,
        status: OrderStatus,
    },

    #[error("Dispatch order '{order_id}' is {status}; only Assigned orders can be dispatched")]
    OrderNotAssigned {
        order_id: OrderId,
        status: OrderStatus,
    },

    #[error(
        "Dispatch order '{order_id}' is {status}; only Dispatched orders can be marked delivered"
    )]
    OrderNotDispatched {
        order_id: OrderId,
        status: OrderStatus,
    },

    #[error("Dispatch order '{order_id}' is {status} and can no longer be cancelled")]
    OrderNotCancelable {
        order_id: OrderId,
        status: OrderStatus,
    },

    /// A compare-and-swap lost to a concurrent writer.
    #[error("{kind} '{id}' changed concurrently: expected {expected}, found {actual}")]
    StaleState {
        kind: EntityKind,
        id: String,
        expected: String,
        actual: String,
    },

    #[error("{kind} '{id}' already exists")]
    DuplicateId { kind: EntityKind, id: String },

    #[error("Alert {alert_id} is not open on delivery '{delivery_id}'")]
    AlertNotFound {
        delivery_id: DeliveryId,
        alert_id: AlertId,
    },

    #[error("Delivery '{delivery_id}' is already completed")]
    DeliveryCompleted { delivery_id: DeliveryId },

    /// Internal bookkeeping disagreed with itself. Never caused by input.
    #[error("Invariant violated: {reason}")]
    InvariantViolation { reason: String },

    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
}

impl CoreError {
    /// Returns true for compare-and-swap conflicts that may succeed on retry.
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::StaleState { .. })
    }

    pub(crate) fn order_not_found(order_id: &OrderId) -> Self {
        Self::NotFound {
            kind: EntityKind::Order,
            id: order_id.to_string(),
        }
    }
}

impl From<FleetError> for CoreError {
    fn from(err: FleetError) -> Self {
        match err {
            FleetError::VehicleNotFound(id) => Self::NotFound {
                kind: EntityKind::Vehicle,
                id: id.to_string(),
            },
            FleetError::DriverNotFound(id) => Self::NotFound {
                kind: EntityKind::Driver,
                id: id.to_string(),
            },
            FleetError::DuplicateVehicle(id) => Self::DuplicateId {
                kind: EntityKind::Vehicle,
                id: id.to_string(),
            },
            FleetError::DuplicateDriver(id) => Self::DuplicateId {
                kind: EntityKind::Driver,
                id: id.to_string(),
            },
            FleetError::AlreadyReserved { kind, id, status }
            | FleetError::IllegalStatusChange {
                kind,
                id,
                from: status,
                ..
            } => Self::ResourceUnavailable { kind, id, status },
        }
    }
}

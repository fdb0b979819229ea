// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use depot::CoreError;
use depot_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A vehicle or driver cannot be used right now.
    ResourceUnavailable {
        /// The type of resource that is unavailable.
        resource_type: String,
        /// A human-readable description, asking for another resource.
        message: String,
    },
    /// The entity moved on since the caller looked at it.
    ActionNoLongerValid {
        /// A human-readable description, asking the caller to refresh.
        message: String,
    },
    /// The request conflicts with a finished record.
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::ResourceUnavailable { message, .. }
            | Self::ActionNoLongerValid { message }
            | Self::Conflict { message } => f.write_str(message),
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

const REFRESH_AND_RETRY: &str = "this action is no longer valid, refresh and retry";

fn invalid(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::EmptyField { field } => ApiError::InvalidInput {
            field: (*field).to_string(),
            message: String::from("must not be empty"),
        },
        DomainError::InvalidQuantity { .. } => invalid("quantity", &err),
        DomainError::NoLineItems { .. } => invalid("items", &err),
        DomainError::InvalidProgress { .. } => invalid("progress", &err),
        DomainError::ProgressRegression { .. } => ApiError::DomainRuleViolation {
            rule: String::from("monotonic_progress"),
            message: err.to_string(),
        },
        DomainError::InvalidStatusTransition { from, to } => ApiError::ActionNoLongerValid {
            message: format!("Cannot move an order from {from} to {to}; {REFRESH_AND_RETRY}"),
        },
        DomainError::InvalidThresholds { .. } => invalid("thresholds", &err),
        DomainError::InvalidCoordinates { .. } => invalid("location", &err),
        DomainError::InvalidCapacity(_) => invalid("capacity", &err),
        DomainError::InvalidVehicleKind(_) => invalid("vehicle_type", &err),
        DomainError::InvalidVehicleStatus(_)
        | DomainError::InvalidDriverStatus(_)
        | DomainError::InvalidOrderStatus(_)
        | DomainError::InvalidDeliveryStatus(_)
        | DomainError::InvalidStockStatus(_) => invalid("status", &err),
        DomainError::InvalidPriority(_) => invalid("priority", &err),
        DomainError::InvalidSeverity(_) => invalid("severity", &err),
        DomainError::DateParseError { .. } => invalid("date", &err),
    }
}

/// Translates a core error into an API error.
///
/// Lost compare-and-swap races and illegal order transitions both surface
/// as [`ApiError::ActionNoLongerValid`]; the raw state is never shown.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::NotFound { kind, id } => ApiError::ResourceNotFound {
            resource_type: kind.as_str().to_string(),
            message: format!("{kind} '{id}' does not exist"),
        },
        CoreError::ResourceUnavailable { kind, id, status } => ApiError::ResourceUnavailable {
            resource_type: kind.as_str().to_string(),
            message: format!(
                "{kind} '{id}' is {status}; please select an available resource"
            ),
        },
        CoreError::OrderNotPending { order_id, status }
        | CoreError::OrderNotAssigned { order_id, status }
        | CoreError::OrderNotDispatched { order_id, status }
        | CoreError::OrderNotCancelable { order_id, status } => ApiError::ActionNoLongerValid {
            message: format!("Dispatch order '{order_id}' is {status}; {REFRESH_AND_RETRY}"),
        },
        CoreError::StaleState { kind, id, .. } => ApiError::ActionNoLongerValid {
            message: format!("{kind} '{id}' was changed by someone else; {REFRESH_AND_RETRY}"),
        },
        CoreError::DuplicateId { kind, id } => ApiError::DomainRuleViolation {
            rule: String::from("unique_id"),
            message: format!("{kind} '{id}' already exists"),
        },
        CoreError::AlertNotFound {
            delivery_id,
            alert_id,
        } => ApiError::ResourceNotFound {
            resource_type: String::from("Alert"),
            message: format!("Alert {alert_id} is not open on delivery '{delivery_id}'"),
        },
        CoreError::DeliveryCompleted { delivery_id } => ApiError::Conflict {
            message: format!("Delivery '{delivery_id}' is already completed"),
        },
        CoreError::InvariantViolation { reason } => ApiError::Internal { message: reason },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}

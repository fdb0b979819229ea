// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text field is empty.
    EmptyField {
        /// The name of the empty field.
        field: &'static str,
    },
    /// A quantity is zero or negative.
    InvalidQuantity {
        /// What the quantity belongs to (batch id, stock item).
        context: String,
        /// The rejected quantity.
        quantity: i64,
    },
    /// A dispatch order was submitted without line items.
    NoLineItems {
        /// The order identifier.
        order_id: String,
    },
    /// Delivery progress is outside 0..=100.
    InvalidProgress {
        /// The rejected progress value.
        progress: u16,
    },
    /// Delivery progress would decrease.
    ProgressRegression {
        /// The stored progress.
        current: u8,
        /// The requested progress.
        requested: u8,
    },
    /// An order status transition is not part of the lifecycle.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// Stock thresholds are not ordered `critical < low`.
    InvalidThresholds {
        /// The critical threshold.
        critical: u32,
        /// The low threshold.
        low: u32,
    },
    /// Coordinates are not a valid latitude/longitude pair.
    InvalidCoordinates {
        /// Description of the problem.
        reason: String,
    },
    /// Vehicle capacity could not be parsed.
    InvalidCapacity(String),
    /// Unknown vehicle type.
    InvalidVehicleKind(String),
    /// Unknown vehicle status.
    InvalidVehicleStatus(String),
    /// Unknown driver status.
    InvalidDriverStatus(String),
    /// Unknown order status.
    InvalidOrderStatus(String),
    /// Unknown order priority.
    InvalidPriority(String),
    /// Unknown alert severity.
    InvalidSeverity(String),
    /// Unknown delivery status.
    InvalidDeliveryStatus(String),
    /// Unknown stock status.
    InvalidStockStatus(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "Field '{field}' cannot be empty"),
            Self::InvalidQuantity { context, quantity } => {
                write!(
                    f,
                    "Invalid quantity {quantity} for '{context}': must be greater than 0"
                )
            }
            Self::NoLineItems { order_id } => {
                write!(f, "Dispatch order '{order_id}' must contain at least one item")
            }
            Self::InvalidProgress { progress } => {
                write!(f, "Invalid progress {progress}%: must be between 0 and 100")
            }
            Self::ProgressRegression { current, requested } => {
                write!(
                    f,
                    "Progress cannot decrease from {current}% to {requested}%"
                )
            }
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Cannot transition order from {from} to {to}")
            }
            Self::InvalidThresholds { critical, low } => {
                write!(
                    f,
                    "Critical stock threshold ({critical}) must be below the low stock threshold ({low})"
                )
            }
            Self::InvalidCoordinates { reason } => write!(f, "Invalid coordinates: {reason}"),
            Self::InvalidCapacity(msg) => write!(f, "Invalid capacity: {msg}"),
            Self::InvalidVehicleKind(value) => write!(f, "Invalid vehicle type: '{value}'"),
            Self::InvalidVehicleStatus(value) => write!(f, "Invalid vehicle status: '{value}'"),
            Self::InvalidDriverStatus(value) => write!(f, "Invalid driver status: '{value}'"),
            Self::InvalidOrderStatus(value) => write!(f, "Invalid order status: '{value}'"),
            Self::InvalidPriority(value) => write!(f, "Invalid priority: '{value}'"),
            Self::InvalidSeverity(value) => write!(f, "Invalid alert severity: '{value}'"),
            Self::InvalidDeliveryStatus(value) => {
                write!(f, "Invalid delivery status: '{value}'")
            }
            Self::InvalidStockStatus(value) => write!(f, "Invalid stock status: '{value}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

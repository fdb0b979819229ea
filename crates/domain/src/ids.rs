// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier newtypes for every entity the depot tracks.

use serde::{Deserialize, Serialize};

/// Declares a string-backed identifier.
///
/// Identifiers are trimmed and normalized to uppercase so that `"do-1001"`
/// and `"DO-1001"` name the same order.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a normalized identifier.
            #[must_use]
            pub fn new(value: &str) -> Self {
                Self(value.trim().to_uppercase())
            }

            /// Returns the identifier value.
            #[must_use]
            pub fn value(&self) -> &str {
                &self.0
            }

            /// Returns true if the identifier is empty after normalization.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_id!(
    /// Identifies a vehicle, e.g. `V-001`.
    VehicleId
);
string_id!(
    /// Identifies a driver, e.g. `D-001`.
    DriverId
);
string_id!(
    /// Identifies a dispatch order, e.g. `DO-1001`.
    OrderId
);
string_id!(
    /// Identifies a delivery, e.g. `DEL-1234`.
    DeliveryId
);

/// Identifies an alert within the delivery ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertId(pub u64);

impl std::fmt::Display for AlertId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a stock item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockItemId(pub u32);

impl std::fmt::Display for StockItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of entity an identifier refers to.
///
/// Used by error reporting and audit subjects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Vehicle,
    Driver,
    Order,
    Delivery,
    Alert,
    StockItem,
}

impl EntityKind {
    /// Returns the human-readable name of the entity kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vehicle => "Vehicle",
            Self::Driver => "Driver",
            Self::Order => "Dispatch order",
            Self::Delivery => "Delivery",
            Self::Alert => "Alert",
            Self::StockItem => "Stock item",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

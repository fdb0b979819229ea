// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Delivery tracking records, alerts, and the rules that move a delivery's
//! status as progress and alerts arrive.

use crate::error::DomainError;
use crate::ids::{AlertId, DeliveryId, DriverId, OrderId, VehicleId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a validated coordinate pair.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either value is not finite
    /// or outside the valid range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, DomainError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(DomainError::InvalidCoordinates {
                reason: String::from("coordinates must be finite numbers"),
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::InvalidCoordinates {
                reason: format!("latitude {lat} is outside -90..=90"),
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(DomainError::InvalidCoordinates {
                reason: format!("longitude {lng} is outside -180..=180"),
            });
        }
        Ok(Self { lat, lng })
    }
}

/// One timestamped position on a delivery's route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    pub location: GeoPoint,
    pub recorded_at: OffsetDateTime,
}

/// How serious an alert is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(Self::Low),
            "Medium" => Ok(Self::Medium),
            "High" => Ok(Self::High),
            other => Err(DomainError::InvalidSeverity(other.to_string())),
        }
    }
}

/// An alert as raised by a caller, before the ledger assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAlert {
    /// Free-form type tag, e.g. "Route Deviation".
    pub kind: String,
    pub message: String,
    pub severity: Severity,
}

/// An alert attached to a delivery.
///
/// Alerts are never edited; resolving one removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: AlertId,
    pub kind: String,
    pub message: String,
    pub severity: Severity,
    pub raised_at: OffsetDateTime,
}

/// Tracking status of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeliveryStatus {
    #[default]
    InTransit,
    Delayed,
    Delivered,
}

impl DeliveryStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InTransit => "InTransit",
            Self::Delayed => "Delayed",
            Self::Delivered => "Delivered",
        }
    }

    /// Returns true while the delivery is still on the road.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::InTransit | Self::Delayed)
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "InTransit" | "In Transit" => Ok(Self::InTransit),
            "Delayed" => Ok(Self::Delayed),
            "Delivered" => Ok(Self::Delivered),
            other => Err(DomainError::InvalidDeliveryStatus(other.to_string())),
        }
    }
}

/// The in-transit tracking record of a dispatched order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: DeliveryId,
    pub order_id: OrderId,
    pub destination: String,
    pub address: String,
    pub vehicle: VehicleId,
    pub driver: DriverId,
    pub departed_at: OffsetDateTime,
    pub completed_at: Option<OffsetDateTime>,
    /// Percentage in 0..=100; never decreases.
    pub progress: u8,
    pub current_location: GeoPoint,
    /// Append-only.
    pub route: Vec<RoutePoint>,
    pub alerts: Vec<Alert>,
    pub status: DeliveryStatus,
}

impl Delivery {
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.status.is_active()
    }

    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}

/// Validates a progress update against the stored progress.
///
/// # Arguments
///
/// * `current` - The stored progress
/// * `requested` - The reported progress
///
/// # Returns
///
/// The accepted progress value.
///
/// # Errors
///
/// Returns an error if `requested` exceeds 100 or is below `current`.
pub fn validate_progress(current: u8, requested: u16) -> Result<u8, DomainError> {
    let progress: u8 = match u8::try_from(requested) {
        Ok(value) if value <= 100 => value,
        _ => return Err(DomainError::InvalidProgress { progress: requested }),
    };
    if progress < current {
        return Err(DomainError::ProgressRegression {
            current,
            requested: progress,
        });
    }
    Ok(progress)
}

/// Returns the delivery status after an alert of `severity` is raised.
///
/// A high-severity alert delays an in-transit delivery; anything else leaves
/// the status untouched.
#[must_use]
pub const fn status_after_alert(current: DeliveryStatus, severity: Severity) -> DeliveryStatus {
    match (current, severity) {
        (DeliveryStatus::InTransit, Severity::High) => DeliveryStatus::Delayed,
        _ => current,
    }
}

/// Returns the delivery status after an alert is resolved.
///
/// A delayed delivery goes back in transit once no alerts remain.
#[must_use]
pub const fn status_after_resolution(
    current: DeliveryStatus,
    remaining_alerts: usize,
) -> DeliveryStatus {
    match current {
        DeliveryStatus::Delayed if remaining_alerts == 0 => DeliveryStatus::InTransit,
        _ => current,
    }
}

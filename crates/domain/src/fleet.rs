// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vehicle and driver records and their availability states.
//!
//! Availability is only ever changed by the fleet registry. The records here
//! carry the state; they do not decide when it may change.

use crate::error::DomainError;
use crate::ids::{DriverId, VehicleId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The body type of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Truck,
    Van,
    Pickup,
}

impl VehicleKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Truck => "Truck",
            Self::Van => "Van",
            Self::Pickup => "Pickup",
        }
    }
}

impl FromStr for VehicleKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Truck" => Ok(Self::Truck),
            "Van" => Ok(Self::Van),
            "Pickup" => Ok(Self::Pickup),
            other => Err(DomainError::InvalidVehicleKind(other.to_string())),
        }
    }
}

/// Load capacity of a vehicle, stored in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Capacity {
    kilograms: u32,
}

impl Capacity {
    /// Creates a capacity from a kilogram value.
    #[must_use]
    pub const fn from_kilograms(kilograms: u32) -> Self {
        Self { kilograms }
    }

    /// Returns the capacity in kilograms.
    #[must_use]
    pub const fn kilograms(&self) -> u32 {
        self.kilograms
    }
}

impl std::fmt::Display for Capacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole: u32 = self.kilograms / 1000;
        let rest: u32 = self.kilograms % 1000;
        if rest == 0 {
            write!(f, "{whole} tons")
        } else if rest % 100 == 0 {
            write!(f, "{whole}.{} tons", rest / 100)
        } else {
            write!(f, "{} kg", self.kilograms)
        }
    }
}

/// Parses a decimal such as `1.5` into thousandths (`1500`).
fn parse_thousandths(value: &str) -> Option<u32> {
    let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
    if whole.is_empty() || fraction.len() > 3 {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let whole: u32 = whole.parse().ok()?;
    let padded: String = format!("{fraction:0<3}");
    let fraction: u32 = padded.parse().ok()?;
    whole.checked_mul(1000)?.checked_add(fraction)
}

impl FromStr for Capacity {
    type Err = DomainError;

    /// Accepts `"5 tons"`, `"1.5 tons"`, `"2t"` or `"800 kg"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        let split_at: usize = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split_at);
        let unit: String = unit.trim().to_lowercase();

        let kilograms: Option<u32> = match unit.as_str() {
            "t" | "ton" | "tons" | "tonne" | "tonnes" => parse_thousandths(number),
            "kg" | "kgs" => number.parse::<u32>().ok(),
            _ => {
                return Err(DomainError::InvalidCapacity(format!(
                    "unknown unit in '{trimmed}'"
                )));
            }
        };

        match kilograms {
            Some(kilograms) if kilograms > 0 => Ok(Self { kilograms }),
            _ => Err(DomainError::InvalidCapacity(format!(
                "'{trimmed}' is not a positive weight"
            ))),
        }
    }
}

/// Availability of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VehicleStatus {
    #[default]
    Available,
    Assigned,
    InMaintenance,
}

impl VehicleStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Assigned => "Assigned",
            Self::InMaintenance => "InMaintenance",
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Available" => Ok(Self::Available),
            "Assigned" => Ok(Self::Assigned),
            "InMaintenance" | "In Maintenance" => Ok(Self::InMaintenance),
            other => Err(DomainError::InvalidVehicleStatus(other.to_string())),
        }
    }
}

/// Availability of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DriverStatus {
    #[default]
    Available,
    Assigned,
    OnLeave,
}

impl DriverStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Assigned => "Assigned",
            Self::OnLeave => "OnLeave",
        }
    }
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Available" => Ok(Self::Available),
            "Assigned" => Ok(Self::Assigned),
            "OnLeave" | "On Leave" => Ok(Self::OnLeave),
            other => Err(DomainError::InvalidDriverStatus(other.to_string())),
        }
    }
}

/// A vehicle in the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub kind: VehicleKind,
    pub capacity: Capacity,
    pub license_plate: String,
    pub status: VehicleStatus,
}

impl Vehicle {
    /// Creates an available vehicle.
    #[must_use]
    pub const fn new(
        id: VehicleId,
        kind: VehicleKind,
        capacity: Capacity,
        license_plate: String,
    ) -> Self {
        Self {
            id,
            kind,
            capacity,
            license_plate,
            status: VehicleStatus::Available,
        }
    }

    /// Returns this vehicle with the given starting status.
    #[must_use]
    pub const fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, VehicleStatus::Available)
    }
}

/// A driver in the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub phone: String,
    pub license_number: String,
    pub status: DriverStatus,
}

impl Driver {
    /// Creates an available driver.
    #[must_use]
    pub const fn new(id: DriverId, name: String, phone: String, license_number: String) -> Self {
        Self {
            id,
            name,
            phone,
            license_number,
            status: DriverStatus::Available,
        }
    }

    /// Returns this driver with the given starting status.
    #[must_use]
    pub const fn with_status(mut self, status: DriverStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, DriverStatus::Available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_parses_tons_and_kilograms() {
        assert_eq!(
            Capacity::from_str("5 tons"),
            Ok(Capacity::from_kilograms(5000))
        );
        assert_eq!(
            Capacity::from_str("1.5 tons"),
            Ok(Capacity::from_kilograms(1500))
        );
        assert_eq!(Capacity::from_str("2t"), Ok(Capacity::from_kilograms(2000)));
        assert_eq!(
            Capacity::from_str("800 kg"),
            Ok(Capacity::from_kilograms(800))
        );
    }

    #[test]
    fn test_capacity_rejects_garbage() {
        assert!(Capacity::from_str("lots").is_err());
        assert!(Capacity::from_str("0 tons").is_err());
        assert!(Capacity::from_str("1.2345 tons").is_err());
        assert!(Capacity::from_str("5 gallons").is_err());
        assert!(Capacity::from_str(". tons").is_err());
    }

    #[test]
    fn test_capacity_display() {
        assert_eq!(Capacity::from_kilograms(5000).to_string(), "5 tons");
        assert_eq!(Capacity::from_kilograms(1500).to_string(), "1.5 tons");
        assert_eq!(Capacity::from_kilograms(750).to_string(), "750 kg");
    }

    #[test]
    fn test_status_parsing_accepts_spaced_labels() {
        assert_eq!(
            VehicleStatus::from_str("In Maintenance"),
            Ok(VehicleStatus::InMaintenance)
        );
        assert_eq!(DriverStatus::from_str("On Leave"), Ok(DriverStatus::OnLeave));
        assert!(VehicleStatus::from_str("Broken").is_err());
        assert!(DriverStatus::from_str("Asleep").is_err());
    }

    #[test]
    fn test_new_resources_start_available() {
        let vehicle: Vehicle = Vehicle::new(
            VehicleId::new("v-001"),
            VehicleKind::Truck,
            Capacity::from_kilograms(5000),
            String::from("ABC-1234"),
        );
        assert!(vehicle.is_available());
        assert_eq!(vehicle.id.value(), "V-001");

        let driver: Driver = Driver::new(
            DriverId::new("D-003"),
            String::from("David Chen"),
            String::from("555-9012"),
            String::from("DL-345678"),
        )
        .with_status(DriverStatus::OnLeave);
        assert!(!driver.is_available());
    }
}

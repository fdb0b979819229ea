// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fleet registry: vehicles, drivers, and atomic pair reservation.

use depot_domain::{Driver, DriverId, DriverStatus, EntityKind, Vehicle, VehicleId, VehicleStatus};
use std::fmt::Display;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised by the fleet registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FleetError {
    #[error("Vehicle '{0}' not found")]
    VehicleNotFound(VehicleId),
    #[error("Driver '{0}' not found")]
    DriverNotFound(DriverId),
    #[error("Vehicle '{0}' is already registered")]
    DuplicateVehicle(VehicleId),
    #[error("Driver '{0}' is already registered")]
    DuplicateDriver(DriverId),
    /// The resource is not `Available`, so it cannot be reserved.
    #[error("{kind} '{id}' cannot be reserved while {status}")]
    AlreadyReserved {
        kind: EntityKind,
        id: String,
        status: String,
    },
    /// A maintenance or leave change was requested from the wrong status.
    #[error("{kind} '{id}' cannot move from {from} to {to}")]
    IllegalStatusChange {
        kind: EntityKind,
        id: String,
        from: String,
        to: String,
    },
}

#[derive(Debug, Default)]
struct Roster {
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
}

impl Roster {
    fn vehicle_mut(&mut self, id: &VehicleId) -> Result<&mut Vehicle, FleetError> {
        self.vehicles
            .iter_mut()
            .find(|vehicle| &vehicle.id == id)
            .ok_or_else(|| FleetError::VehicleNotFound(id.clone()))
    }

    fn driver_mut(&mut self, id: &DriverId) -> Result<&mut Driver, FleetError> {
        self.drivers
            .iter_mut()
            .find(|driver| &driver.id == id)
            .ok_or_else(|| FleetError::DriverNotFound(id.clone()))
    }
}

/// Moves `status` from `from` to `to`. Already being at `to` is a no-op.
fn shift_status<S>(
    kind: EntityKind,
    id: &str,
    status: &mut S,
    from: S,
    to: S,
) -> Result<(), FleetError>
where
    S: Copy + PartialEq + Display,
{
    if *status == to {
        return Ok(());
    }
    if *status != from {
        return Err(FleetError::IllegalStatusChange {
            kind,
            id: id.to_string(),
            from: status.to_string(),
            to: to.to_string(),
        });
    }
    *status = to;
    Ok(())
}

/// Vehicles and drivers with their availability.
///
/// All reads and writes go through a single lock, so a reservation either
/// flips both resources or neither, and no two callers can hold the same
/// resource.
#[derive(Debug, Default)]
pub struct FleetRegistry {
    roster: Mutex<Roster>,
}

impl FleetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Roster> {
        self.roster.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a vehicle to the fleet.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::DuplicateVehicle` if the id is taken.
    pub fn register_vehicle(&self, vehicle: Vehicle) -> Result<Vehicle, FleetError> {
        let mut roster = self.lock();
        if roster.vehicles.iter().any(|v| v.id == vehicle.id) {
            return Err(FleetError::DuplicateVehicle(vehicle.id));
        }
        debug!(vehicle_id = %vehicle.id, status = %vehicle.status, "Registered vehicle");
        roster.vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    /// Adds a driver to the fleet.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::DuplicateDriver` if the id is taken.
    pub fn register_driver(&self, driver: Driver) -> Result<Driver, FleetError> {
        let mut roster = self.lock();
        if roster.drivers.iter().any(|d| d.id == driver.id) {
            return Err(FleetError::DuplicateDriver(driver.id));
        }
        debug!(driver_id = %driver.id, status = %driver.status, "Registered driver");
        roster.drivers.push(driver.clone());
        Ok(driver)
    }

    #[must_use]
    pub fn vehicle(&self, id: &VehicleId) -> Option<Vehicle> {
        self.lock().vehicles.iter().find(|v| &v.id == id).cloned()
    }

    #[must_use]
    pub fn driver(&self, id: &DriverId) -> Option<Driver> {
        self.lock().drivers.iter().find(|d| &d.id == id).cloned()
    }

    #[must_use]
    pub fn list_vehicles(&self) -> Vec<Vehicle> {
        self.lock().vehicles.clone()
    }

    #[must_use]
    pub fn list_drivers(&self) -> Vec<Driver> {
        self.lock().drivers.clone()
    }

    /// Vehicles whose status is `Available`, in registration order.
    #[must_use]
    pub fn list_available_vehicles(&self) -> Vec<Vehicle> {
        self.lock()
            .vehicles
            .iter()
            .filter(|v| v.is_available())
            .cloned()
            .collect()
    }

    /// Drivers whose status is `Available`, in registration order.
    #[must_use]
    pub fn list_available_drivers(&self) -> Vec<Driver> {
        self.lock()
            .drivers
            .iter()
            .filter(|d| d.is_available())
            .cloned()
            .collect()
    }

    /// Reserves a vehicle and a driver together.
    ///
    /// Both must exist and be `Available`. On success both are `Assigned`;
    /// on any failure neither is touched.
    ///
    /// # Errors
    ///
    /// Returns `FleetError::VehicleNotFound`/`DriverNotFound` for unknown ids
    /// and `FleetError::AlreadyReserved` if either resource is not available.
    pub fn reserve(&self, vehicle_id: &VehicleId, driver_id: &DriverId) -> Result<(), FleetError> {
        let mut roster = self.lock();

        let vehicle_status: VehicleStatus = roster.vehicle_mut(vehicle_id)?.status;
        let driver_status: DriverStatus = roster.driver_mut(driver_id)?.status;

        if vehicle_status != VehicleStatus::Available {
            return Err(FleetError::AlreadyReserved {
                kind: EntityKind::Vehicle,
                id: vehicle_id.to_string(),
                status: vehicle_status.to_string(),
            });
        }
        if driver_status != DriverStatus::Available {
            return Err(FleetError::AlreadyReserved {
                kind: EntityKind::Driver,
                id: driver_id.to_string(),
                status: driver_status.to_string(),
            });
        }

        roster.vehicle_mut(vehicle_id)?.status = VehicleStatus::Assigned;
        roster.driver_mut(driver_id)?.status = DriverStatus::Assigned;

        info!(vehicle_id = %vehicle_id, driver_id = %driver_id, "Reserved vehicle and driver");
        Ok(())
    }

    /// Returns a reserved pair to `Available`.
    ///
    /// Idempotent: releasing resources that are already available is a
    /// no-op. Resources in maintenance or on leave are left alone.
    pub fn release(&self, vehicle_id: &VehicleId, driver_id: &DriverId) {
        let mut roster = self.lock();

        match roster.vehicle_mut(vehicle_id) {
            Ok(vehicle) if vehicle.status == VehicleStatus::Assigned => {
                vehicle.status = VehicleStatus::Available;
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Release skipped unknown vehicle"),
        }
        match roster.driver_mut(driver_id) {
            Ok(driver) if driver.status == DriverStatus::Assigned => {
                driver.status = DriverStatus::Available;
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Release skipped unknown driver"),
        }

        info!(vehicle_id = %vehicle_id, driver_id = %driver_id, "Released vehicle and driver");
    }

    /// Takes an available vehicle out of service.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle is unknown or currently assigned.
    pub fn set_vehicle_in_maintenance(&self, id: &VehicleId) -> Result<Vehicle, FleetError> {
        self.shift_vehicle(id, VehicleStatus::Available, VehicleStatus::InMaintenance)
    }

    /// Puts a vehicle in maintenance back into service.
    ///
    /// # Errors
    ///
    /// Returns an error if the vehicle is unknown or currently assigned.
    pub fn return_vehicle_to_service(&self, id: &VehicleId) -> Result<Vehicle, FleetError> {
        self.shift_vehicle(id, VehicleStatus::InMaintenance, VehicleStatus::Available)
    }

    /// Marks an available driver as on leave.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is unknown or currently assigned.
    pub fn set_driver_on_leave(&self, id: &DriverId) -> Result<Driver, FleetError> {
        self.shift_driver(id, DriverStatus::Available, DriverStatus::OnLeave)
    }

    /// Brings a driver back from leave.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver is unknown or currently assigned.
    pub fn return_driver_from_leave(&self, id: &DriverId) -> Result<Driver, FleetError> {
        self.shift_driver(id, DriverStatus::OnLeave, DriverStatus::Available)
    }

    fn shift_vehicle(
        &self,
        id: &VehicleId,
        from: VehicleStatus,
        to: VehicleStatus,
    ) -> Result<Vehicle, FleetError> {
        let mut roster = self.lock();
        let vehicle: &mut Vehicle = roster.vehicle_mut(id)?;
        shift_status(EntityKind::Vehicle, id.value(), &mut vehicle.status, from, to)?;
        info!(vehicle_id = %id, status = %vehicle.status, "Vehicle status changed");
        Ok(vehicle.clone())
    }

    fn shift_driver(
        &self,
        id: &DriverId,
        from: DriverStatus,
        to: DriverStatus,
    ) -> Result<Driver, FleetError> {
        let mut roster = self.lock();
        let driver: &mut Driver = roster.driver_mut(id)?;
        shift_status(EntityKind::Driver, id.value(), &mut driver.status, from, to)?;
        info!(driver_id = %id, status = %driver.status, "Driver status changed");
        Ok(driver.clone())
    }
}

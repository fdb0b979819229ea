// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, FleetError, FleetRegistry};
use depot_domain::{DriverId, DriverStatus, EntityKind, VehicleId, VehicleStatus};

use super::helpers::{create_test_driver, create_test_vehicle};

fn create_test_fleet() -> FleetRegistry {
    let fleet: FleetRegistry = FleetRegistry::new();
    fleet
        .register_vehicle(create_test_vehicle("V-001", 5000))
        .unwrap();
    fleet
        .register_vehicle(create_test_vehicle("V-002", 2000))
        .unwrap();
    fleet
        .register_vehicle(create_test_vehicle("V-004", 1500).with_status(VehicleStatus::InMaintenance))
        .unwrap();
    fleet
        .register_driver(create_test_driver("D-001", "John Smith"))
        .unwrap();
    fleet
        .register_driver(create_test_driver("D-002", "Maria Garcia"))
        .unwrap();
    fleet
        .register_driver(create_test_driver("D-003", "David Chen").with_status(DriverStatus::OnLeave))
        .unwrap();
    fleet
}

fn v(id: &str) -> VehicleId {
    VehicleId::new(id)
}

fn d(id: &str) -> DriverId {
    DriverId::new(id)
}

#[test]
fn test_available_lists_exclude_maintenance_and_leave() {
    let fleet: FleetRegistry = create_test_fleet();

    let vehicles: Vec<String> = fleet
        .list_available_vehicles()
        .into_iter()
        .map(|vehicle| vehicle.id.to_string())
        .collect();
    let drivers: Vec<String> = fleet
        .list_available_drivers()
        .into_iter()
        .map(|driver| driver.id.to_string())
        .collect();

    assert_eq!(vehicles, vec!["V-001", "V-002"]);
    assert_eq!(drivers, vec!["D-001", "D-002"]);
    assert_eq!(fleet.list_vehicles().len(), 3);
    assert_eq!(fleet.list_drivers().len(), 3);
}

#[test]
fn test_register_rejects_duplicate_ids() {
    let fleet: FleetRegistry = create_test_fleet();

    assert_eq!(
        fleet.register_vehicle(create_test_vehicle("v-001", 100)),
        Err(FleetError::DuplicateVehicle(v("V-001")))
    );
    assert_eq!(
        fleet.register_driver(create_test_driver("D-002", "Someone Else")),
        Err(FleetError::DuplicateDriver(d("D-002")))
    );
}

#[test]
fn test_reserve_flips_both_to_assigned() {
    let fleet: FleetRegistry = create_test_fleet();

    fleet.reserve(&v("V-001"), &d("D-001")).unwrap();

    assert_eq!(fleet.vehicle(&v("V-001")).unwrap().status, VehicleStatus::Assigned);
    assert_eq!(fleet.driver(&d("D-001")).unwrap().status, DriverStatus::Assigned);
    assert_eq!(fleet.list_available_vehicles().len(), 1);
}

#[test]
fn test_reserve_is_all_or_nothing() {
    let fleet: FleetRegistry = create_test_fleet();

    // Driver on leave: the available vehicle must not be touched.
    let result = fleet.reserve(&v("V-001"), &d("D-003"));
    assert_eq!(
        result,
        Err(FleetError::AlreadyReserved {
            kind: EntityKind::Driver,
            id: String::from("D-003"),
            status: String::from("OnLeave"),
        })
    );
    assert_eq!(fleet.vehicle(&v("V-001")).unwrap().status, VehicleStatus::Available);

    // Vehicle in maintenance: the available driver must not be touched.
    assert!(matches!(
        fleet.reserve(&v("V-004"), &d("D-001")),
        Err(FleetError::AlreadyReserved {
            kind: EntityKind::Vehicle,
            ..
        })
    ));
    assert_eq!(fleet.driver(&d("D-001")).unwrap().status, DriverStatus::Available);
}

#[test]
fn test_reserve_unknown_resources() {
    let fleet: FleetRegistry = create_test_fleet();

    assert_eq!(
        fleet.reserve(&v("V-999"), &d("D-001")),
        Err(FleetError::VehicleNotFound(v("V-999")))
    );
    assert_eq!(
        fleet.reserve(&v("V-001"), &d("D-999")),
        Err(FleetError::DriverNotFound(d("D-999")))
    );
    assert_eq!(fleet.vehicle(&v("V-001")).unwrap().status, VehicleStatus::Available);
}

#[test]
fn test_reserve_twice_fails_second_time() {
    let fleet: FleetRegistry = create_test_fleet();

    fleet.reserve(&v("V-001"), &d("D-001")).unwrap();
    let err: CoreError = fleet.reserve(&v("V-001"), &d("D-002")).unwrap_err().into();

    assert_eq!(
        err,
        CoreError::ResourceUnavailable {
            kind: EntityKind::Vehicle,
            id: String::from("V-001"),
            status: String::from("Assigned"),
        }
    );
    assert_eq!(fleet.driver(&d("D-002")).unwrap().status, DriverStatus::Available);
}

#[test]
fn test_release_is_idempotent() {
    let fleet: FleetRegistry = create_test_fleet();

    fleet.reserve(&v("V-001"), &d("D-001")).unwrap();
    fleet.release(&v("V-001"), &d("D-001"));
    fleet.release(&v("V-001"), &d("D-001"));

    assert_eq!(fleet.vehicle(&v("V-001")).unwrap().status, VehicleStatus::Available);
    assert_eq!(fleet.driver(&d("D-001")).unwrap().status, DriverStatus::Available);
}

#[test]
fn test_release_leaves_maintenance_and_leave_alone() {
    let fleet: FleetRegistry = create_test_fleet();

    fleet.release(&v("V-004"), &d("D-003"));

    assert_eq!(
        fleet.vehicle(&v("V-004")).unwrap().status,
        VehicleStatus::InMaintenance
    );
    assert_eq!(fleet.driver(&d("D-003")).unwrap().status, DriverStatus::OnLeave);
}

#[test]
fn test_maintenance_round_trip() {
    let fleet: FleetRegistry = create_test_fleet();

    let vehicle = fleet.set_vehicle_in_maintenance(&v("V-002")).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::InMaintenance);
    assert!(fleet.reserve(&v("V-002"), &d("D-001")).is_err());

    let vehicle = fleet.return_vehicle_to_service(&v("V-002")).unwrap();
    assert_eq!(vehicle.status, VehicleStatus::Available);

    // Already available: no-op.
    assert!(fleet.return_vehicle_to_service(&v("V-002")).is_ok());
}

#[test]
fn test_assigned_resources_cannot_go_on_leave_or_maintenance() {
    let fleet: FleetRegistry = create_test_fleet();
    fleet.reserve(&v("V-001"), &d("D-001")).unwrap();

    assert_eq!(
        fleet.set_vehicle_in_maintenance(&v("V-001")),
        Err(FleetError::IllegalStatusChange {
            kind: EntityKind::Vehicle,
            id: String::from("V-001"),
            from: String::from("Assigned"),
            to: String::from("InMaintenance"),
        })
    );
    assert!(matches!(
        fleet.set_driver_on_leave(&d("D-001")),
        Err(FleetError::IllegalStatusChange { .. })
    ));
    assert!(matches!(
        fleet.return_driver_from_leave(&d("D-001")),
        Err(FleetError::IllegalStatusChange { .. })
    ));
}

#[test]
fn test_driver_leave_round_trip() {
    let fleet: FleetRegistry = create_test_fleet();

    let driver = fleet.return_driver_from_leave(&d("D-003")).unwrap();
    assert_eq!(driver.status, DriverStatus::Available);
    fleet.reserve(&v("V-001"), &d("D-003")).unwrap();

    fleet.set_driver_on_leave(&d("D-002")).unwrap();
    assert_eq!(fleet.list_available_drivers().len(), 1);
}

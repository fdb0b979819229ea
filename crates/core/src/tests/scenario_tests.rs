// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! End-to-end dispatch scenarios against the demo fleet and orders.

use crate::CoreError;
use depot_domain::{
    DeliveryStatus, Driver, DriverId, NewAlert, OrderId, OrderStatus, Severity, Vehicle,
    VehicleId, VehicleStatus,
};
use time::Duration;

use super::helpers::{create_test_depot, point};

#[test]
fn test_assign_do_1001_to_v_001_and_d_001() {
    let (depot, _clock) = create_test_depot();

    depot
        .assign(
            &OrderId::new("DO-1001"),
            &VehicleId::new("V-001"),
            &DriverId::new("D-001"),
        )
        .unwrap();

    let order = depot.orders().get(&OrderId::new("DO-1001")).unwrap();
    assert_eq!(order.status.as_str(), "Assigned");
    assert_eq!(
        depot.fleet().vehicle(&VehicleId::new("V-001")).unwrap().status.as_str(),
        "Assigned"
    );
    assert_eq!(
        depot.fleet().driver(&DriverId::new("D-001")).unwrap().status.as_str(),
        "Assigned"
    );
}

#[test]
fn test_dispatch_do_1001_after_assignment() {
    let (depot, _clock) = create_test_depot();
    let order_id: OrderId = OrderId::new("DO-1001");
    depot
        .assign(&order_id, &VehicleId::new("V-001"), &DriverId::new("D-001"))
        .unwrap();

    depot.dispatch(&order_id).unwrap();

    let order = depot.orders().get(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Dispatched);
    let delivery = depot.ledger().delivery_for_order(&order_id).unwrap();
    assert_eq!(delivery.progress, 0);
    assert_eq!(delivery.status.as_str(), "InTransit");
}

#[test]
fn test_resolving_only_high_alert_returns_to_in_transit() {
    let (depot, _clock) = create_test_depot();
    let order_id: OrderId = OrderId::new("DO-1003");
    depot
        .assign(&order_id, &VehicleId::new("V-003"), &DriverId::new("D-004"))
        .unwrap();
    let delivery_id = depot.dispatch(&order_id).unwrap().delivery.id;
    let (delayed, alert) = depot
        .raise_alert(
            &delivery_id,
            NewAlert {
                kind: String::from("Traffic Delay"),
                message: String::from("Heavy traffic on Highway 101"),
                severity: Severity::High,
            },
        )
        .unwrap();
    assert_eq!(delayed.status, DeliveryStatus::Delayed);

    let (delivery, _) = depot.resolve_alert(&delivery_id, alert.id).unwrap();

    assert!(delivery.alerts.is_empty());
    assert_eq!(delivery.status, DeliveryStatus::InTransit);
}

#[test]
fn test_assigning_an_assigned_order_changes_nothing() {
    let (depot, _clock) = create_test_depot();
    let order_id: OrderId = OrderId::new("DO-1001");
    depot
        .assign(&order_id, &VehicleId::new("V-001"), &DriverId::new("D-001"))
        .unwrap();
    let vehicles_before: Vec<Vehicle> = depot.fleet().list_vehicles();
    let drivers_before: Vec<Driver> = depot.fleet().list_drivers();

    let result = depot.assign(&order_id, &VehicleId::new("V-005"), &DriverId::new("D-005"));

    assert!(matches!(result, Err(CoreError::OrderNotPending { .. })));
    assert_eq!(depot.fleet().list_vehicles(), vehicles_before);
    assert_eq!(depot.fleet().list_drivers(), drivers_before);
}

#[test]
fn test_full_lifecycle_keeps_invariants_at_every_step() {
    let (depot, clock) = create_test_depot();
    let order_id: OrderId = OrderId::new("DO-1002");
    let vehicle: VehicleId = VehicleId::new("V-002");
    let driver: DriverId = DriverId::new("D-002");

    depot.assign(&order_id, &vehicle, &driver).unwrap();
    assert!(depot.consistency_violations().is_empty());

    clock.advance(Duration::minutes(15));
    let delivery_id = depot.dispatch(&order_id).unwrap().delivery.id;
    assert!(depot.consistency_violations().is_empty());

    for (progress, lat) in [(25, 34.06), (60, 34.07), (90, 34.08)] {
        clock.advance(Duration::minutes(20));
        depot
            .record_progress(&delivery_id, progress, point(lat, -118.25))
            .unwrap();
        assert!(depot.consistency_violations().is_empty());
    }

    clock.advance(Duration::minutes(10));
    depot
        .record_progress(&delivery_id, 100, point(34.09, -118.26))
        .unwrap();

    let order = depot.orders().get(&order_id).unwrap();
    assert_eq!(order.status, OrderStatus::Delivered);
    assert!(order.references_consistent());
    assert_eq!(
        depot.fleet().vehicle(&vehicle).unwrap().status,
        VehicleStatus::Available
    );
    assert_eq!(depot.ledger().get(&delivery_id).unwrap().route.len(), 5);
    assert!(depot.consistency_violations().is_empty());

    // The freed pair can take the next order.
    depot
        .assign(&OrderId::new("DO-1004"), &vehicle, &driver)
        .unwrap();
    assert!(depot.consistency_violations().is_empty());
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Concurrent assignment tests on real threads.
//!
//! Each scenario is repeated many times so that both interleavings of the
//! reservation and the order compare-and-swap get exercised.

use crate::{CoreError, Depot};
use depot_domain::{
    DispatchOrder, DriverId, DriverStatus, OrderId, OrderStatus, VehicleId, VehicleStatus,
};
use std::sync::Barrier;
use std::thread;

use super::helpers::create_test_depot;

const ITERATIONS: usize = 200;

fn race<A, B, RA, RB>(first: A, second: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    let barrier: Barrier = Barrier::new(2);
    thread::scope(|scope| {
        let a = scope.spawn(|| {
            barrier.wait();
            first()
        });
        let b = scope.spawn(|| {
            barrier.wait();
            second()
        });
        (a.join().unwrap(), b.join().unwrap())
    })
}

fn is_lost_race(err: &CoreError) -> bool {
    matches!(
        err,
        CoreError::StaleState { .. }
            | CoreError::ResourceUnavailable { .. }
            | CoreError::OrderNotPending { .. }
    )
}

fn assigned_vehicles(depot: &Depot) -> usize {
    depot
        .fleet()
        .list_vehicles()
        .iter()
        .filter(|v| v.status == VehicleStatus::Assigned)
        .count()
}

fn assigned_drivers(depot: &Depot) -> usize {
    depot
        .fleet()
        .list_drivers()
        .iter()
        .filter(|d| d.status == DriverStatus::Assigned)
        .count()
}

#[test]
fn test_two_assigns_on_one_order_book_exactly_one_pair() {
    for _ in 0..ITERATIONS {
        let (depot, _clock) = create_test_depot();
        let order: OrderId = OrderId::new("DO-1001");

        let (a, b) = race(
            || depot.assign(&order, &VehicleId::new("V-001"), &DriverId::new("D-001")),
            || depot.assign(&order, &VehicleId::new("V-002"), &DriverId::new("D-002")),
        );

        let outcomes: [&Result<DispatchOrder, CoreError>; 2] = [&a, &b];
        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        for outcome in outcomes {
            if let Err(e) = outcome {
                assert!(is_lost_race(e), "unexpected error: {e}");
            }
        }

        let stored = depot.orders().get(&order).unwrap();
        assert_eq!(stored.status, OrderStatus::Assigned);
        assert_eq!(assigned_vehicles(&depot), 1);
        assert_eq!(assigned_drivers(&depot), 1);
        let (vehicle, driver) = stored.resources().unwrap();
        assert_eq!(
            depot.fleet().vehicle(vehicle).unwrap().status,
            VehicleStatus::Assigned
        );
        assert_eq!(
            depot.fleet().driver(driver).unwrap().status,
            DriverStatus::Assigned
        );
        assert!(depot.consistency_violations().is_empty());
    }
}

#[test]
fn test_two_orders_racing_for_one_vehicle() {
    for _ in 0..ITERATIONS {
        let (depot, _clock) = create_test_depot();
        let vehicle: VehicleId = VehicleId::new("V-003");

        let (a, b) = race(
            || depot.assign(&OrderId::new("DO-1001"), &vehicle, &DriverId::new("D-001")),
            || depot.assign(&OrderId::new("DO-1002"), &vehicle, &DriverId::new("D-002")),
        );

        assert_eq!(usize::from(a.is_ok()) + usize::from(b.is_ok()), 1);
        assert!(matches!(
            a.as_ref().err().or_else(|| b.as_ref().err()),
            Some(CoreError::ResourceUnavailable { .. })
        ));
        assert_eq!(assigned_vehicles(&depot), 1);
        assert_eq!(assigned_drivers(&depot), 1);
        assert_eq!(depot.orders().list_by_status(OrderStatus::Assigned).len(), 1);
        assert!(depot.consistency_violations().is_empty());
    }
}

#[test]
fn test_cancel_racing_assign_never_strands_resources() {
    for _ in 0..ITERATIONS {
        let (depot, _clock) = create_test_depot();
        let order: OrderId = OrderId::new("DO-1003");

        let (assigned, cancelled) = race(
            || depot.assign(&order, &VehicleId::new("V-005"), &DriverId::new("D-005")),
            || depot.cancel(&order),
        );

        assert!(cancelled.is_ok() || assigned.is_ok());
        let stored = depot.orders().get(&order).unwrap();
        match stored.status {
            // Cancel won outright, or cancelled after the assignment landed.
            OrderStatus::Cancelled => assert_eq!(assigned_vehicles(&depot), 0),
            // Cancel lost the compare-and-swap to the assignment.
            OrderStatus::Assigned => {
                assert!(cancelled.is_err());
                assert_eq!(assigned_vehicles(&depot), 1);
            }
            other => panic!("unexpected final status {other}"),
        }
        assert!(depot.consistency_violations().is_empty());
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Arc;

use depot::{Depot, DepotConfig, ManualClock};
use depot_audit::{Actor, Cause};
use depot_domain::{Capacity, Driver, DriverId, Vehicle, VehicleId, VehicleKind, VehicleStatus};
use time::macros::datetime;

use crate::{
    AssignResourcesRequest, CreateOrderRequest, CreateStockItemRequest, LineItemRequest,
    OrderActionRequest, assign_resources, create_order, dispatch_order,
};

pub fn create_test_dispatcher() -> Actor {
    Actor::new(String::from("dispatcher-1"), String::from("operator"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

/// A depot at 2025-06-15 08:00 UTC with V-001..V-003 available, V-004 in
/// maintenance, and drivers D-001..D-003.
pub fn create_test_depot() -> (Depot, Arc<ManualClock>) {
    let clock: Arc<ManualClock> = Arc::new(ManualClock::new(datetime!(2025-06-15 08:00 UTC)));
    let depot: Depot = Depot::with_clock(DepotConfig::default(), clock.clone());

    for id in ["V-001", "V-002", "V-003"] {
        depot
            .fleet()
            .register_vehicle(Vehicle::new(
                VehicleId::new(id),
                VehicleKind::Truck,
                Capacity::from_kilograms(5000),
                format!("TN-{id}"),
            ))
            .unwrap();
    }
    depot
        .fleet()
        .register_vehicle(
            Vehicle::new(
                VehicleId::new("V-004"),
                VehicleKind::Van,
                Capacity::from_kilograms(1500),
                String::from("TN-V-004"),
            )
            .with_status(VehicleStatus::InMaintenance),
        )
        .unwrap();

    for (id, name) in [("D-001", "Rajesh Kumar"), ("D-002", "Amit Singh"), ("D-003", "Priya Sharma")] {
        depot
            .fleet()
            .register_driver(Driver::new(
                DriverId::new(id),
                String::from(name),
                String::from("+91 98765 43210"),
                format!("DL-{id}"),
            ))
            .unwrap();
    }

    (depot, clock)
}

pub fn create_order_request(order_id: &str) -> CreateOrderRequest {
    CreateOrderRequest {
        order_id: String::from(order_id),
        destination: String::from("PDS Store #42"),
        address: String::from("123 Main St, City A"),
        items: vec![
            LineItemRequest {
                batch_id: String::from("B-7829"),
                product_name: String::from("Rice (25kg)"),
                quantity: 20,
            },
            LineItemRequest {
                batch_id: String::from("B-7830"),
                product_name: String::from("Wheat Flour (10kg)"),
                quantity: 15,
            },
        ],
        scheduled_date: String::from("2025-06-15"),
        priority: String::from("High"),
    }
}

pub fn assign_request(order_id: &str, vehicle_id: &str, driver_id: &str) -> AssignResourcesRequest {
    AssignResourcesRequest {
        order_id: String::from(order_id),
        vehicle_id: String::from(vehicle_id),
        driver_id: String::from(driver_id),
    }
}

pub fn order_action(order_id: &str) -> OrderActionRequest {
    OrderActionRequest {
        order_id: String::from(order_id),
    }
}

pub fn create_stock_request(batch_id: &str, quantity: i64, expiry_date: &str) -> CreateStockItemRequest {
    CreateStockItemRequest {
        batch_id: String::from(batch_id),
        product_name: String::from("Rice (25kg)"),
        category: String::from("Grains"),
        quantity,
        expiry_date: String::from(expiry_date),
        location: String::from("Zone A, Rack 12"),
    }
}

/// Creates, assigns and dispatches an order. Returns the delivery id.
pub fn dispatch_test_order(depot: &Depot, order_id: &str, vehicle_id: &str, driver_id: &str) -> String {
    create_order(
        depot,
        &create_order_request(order_id),
        create_test_dispatcher(),
        create_test_cause(),
    )
    .unwrap();
    assign_resources(
        depot,
        &assign_request(order_id, vehicle_id, driver_id),
        create_test_dispatcher(),
        create_test_cause(),
    )
    .unwrap();
    dispatch_order(
        depot,
        &order_action(order_id),
        create_test_dispatcher(),
        create_test_cause(),
    )
    .unwrap()
    .response
    .delivery
    .delivery_id
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Clock, Depot, DepotConfig, ManualClock};
use depot_domain::{
    Capacity, DeliveryId, Driver, DriverId, DriverStatus, GeoPoint, NewDispatchOrder, NewLineItem,
    NewStockItem, OrderId, Priority, Vehicle, VehicleId, VehicleKind, VehicleStatus,
};
use std::sync::{Arc, Mutex};
use time::{Date, OffsetDateTime};
use time::macros::{date, datetime};

pub fn create_test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(datetime!(2025-06-15 08:00 UTC)))
}

pub fn point(lat: f64, lng: f64) -> GeoPoint {
    GeoPoint::new(lat, lng).expect("valid coordinates")
}

pub fn create_test_vehicle(id: &str, kilograms: u32) -> Vehicle {
    Vehicle::new(
        VehicleId::new(id),
        VehicleKind::Truck,
        Capacity::from_kilograms(kilograms),
        format!("PLT-{id}"),
    )
}

pub fn create_test_driver(id: &str, name: &str) -> Driver {
    Driver::new(
        DriverId::new(id),
        String::from(name),
        String::from("555-0000"),
        format!("DL-{id}"),
    )
}

pub fn line(batch_id: &str, product_name: &str, quantity: i64) -> NewLineItem {
    NewLineItem {
        batch_id: String::from(batch_id),
        product_name: String::from(product_name),
        quantity,
    }
}

pub fn create_new_order(id: &str) -> NewDispatchOrder {
    NewDispatchOrder {
        id: OrderId::new(id),
        destination: String::from("PDS Store #42"),
        address: String::from("123 Main St, City A"),
        items: vec![
            line("B-7829", "Rice (25kg)", 20),
            line("B-7830", "Wheat Flour (10kg)", 15),
        ],
        scheduled_date: date!(2025 - 06 - 15),
        priority: Priority::High,
    }
}

pub fn create_new_stock_item(batch_id: &str, quantity: i64, expiry_date: Date) -> NewStockItem {
    NewStockItem {
        batch_id: String::from(batch_id),
        product_name: String::from("Rice (25kg)"),
        category: String::from("Grains"),
        quantity,
        expiry_date,
        location: String::from("Zone A, Rack 12"),
    }
}

/// A depot on a manual clock with five vehicles (V-004 in maintenance),
/// five drivers (D-003 on leave) and five pending orders DO-1001..DO-1005.
pub fn create_test_depot() -> (Depot, Arc<ManualClock>) {
    let clock: Arc<ManualClock> = create_test_clock();
    let depot: Depot = create_test_depot_with_clock(clock.clone());
    (depot, clock)
}

/// The fleet and orders of [`create_test_depot`] on any clock.
pub fn create_test_depot_with_clock(clock: Arc<dyn Clock>) -> Depot {
    let depot: Depot = Depot::with_clock(DepotConfig::default(), clock);

    for (id, kilograms) in [
        ("V-001", 5000),
        ("V-002", 2000),
        ("V-003", 8000),
        ("V-005", 10000),
    ] {
        depot
            .fleet()
            .register_vehicle(create_test_vehicle(id, kilograms))
            .unwrap();
    }
    depot
        .fleet()
        .register_vehicle(create_test_vehicle("V-004", 1500).with_status(VehicleStatus::InMaintenance))
        .unwrap();

    for (id, name) in [
        ("D-001", "John Smith"),
        ("D-002", "Maria Garcia"),
        ("D-004", "Sarah Johnson"),
        ("D-005", "Robert Taylor"),
    ] {
        depot
            .fleet()
            .register_driver(create_test_driver(id, name))
            .unwrap();
    }
    depot
        .fleet()
        .register_driver(create_test_driver("D-003", "David Chen").with_status(DriverStatus::OnLeave))
        .unwrap();

    for id in ["DO-1001", "DO-1002", "DO-1003", "DO-1004", "DO-1005"] {
        depot.orders().create(create_new_order(id)).unwrap();
    }

    depot
}

/// Assigns and dispatches an order, returning its delivery id.
pub fn dispatch_test_order(depot: &Depot, order: &str, vehicle: &str, driver: &str) -> DeliveryId {
    let order_id: OrderId = OrderId::new(order);
    depot
        .assign(&order_id, &VehicleId::new(vehicle), &DriverId::new(driver))
        .unwrap();
    depot.dispatch(&order_id).unwrap().delivery.id
}

type Interruption = Box<dyn FnOnce() + Send>;

/// A stopped clock that runs a one-shot callback the next time it is read.
///
/// The engine reads the clock between reserving resources and committing
/// the order, so the callback lands exactly in that window.
pub struct InterruptingClock {
    at: OffsetDateTime,
    pending: Mutex<Option<Interruption>>,
}

impl InterruptingClock {
    pub const fn stopped_at(at: OffsetDateTime) -> Self {
        Self {
            at,
            pending: Mutex::new(None),
        }
    }

    pub fn on_next_read(&self, interruption: impl FnOnce() + Send + 'static) {
        *self.pending.lock().unwrap() = Some(Box::new(interruption));
    }
}

impl std::fmt::Debug for InterruptingClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterruptingClock")
            .field("at", &self.at)
            .finish_non_exhaustive()
    }
}

impl Clock for InterruptingClock {
    fn now(&self) -> OffsetDateTime {
        let interruption: Option<Interruption> = self.pending.lock().unwrap().take();
        if let Some(interruption) = interruption {
            interruption();
        }
        self.at
    }
}

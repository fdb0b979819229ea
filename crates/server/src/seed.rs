// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data: a small fleet, ten stock batches, five orders and three
//! deliveries already on the road.

use depot::{CoreError, Depot};
use depot_domain::{
    Capacity, DeliveryId, Driver, DriverId, DriverStatus, GeoPoint, NewAlert, NewDispatchOrder,
    NewLineItem, NewStockItem, OrderId, Priority, Severity, Vehicle, VehicleId, VehicleKind,
    VehicleStatus,
};
use time::Date;
use time::macros::date;
use tracing::info;

type Line<'a> = (&'a str, &'a str, i64);

struct DemoOrder<'a> {
    id: &'a str,
    destination: &'a str,
    address: &'a str,
    items: [Line<'a>; 2],
    scheduled_date: Date,
    priority: Priority,
}

struct DemoTrip<'a> {
    order_id: &'a str,
    vehicle_id: &'a str,
    driver_id: &'a str,
    /// Progress reports, in order, as (progress, lat, lng).
    reports: &'a [(u16, f64, f64)],
    alert: Option<(&'a str, &'a str, Severity)>,
}

const VEHICLES: [(&str, VehicleKind, u32, &str, VehicleStatus); 5] = [
    ("V-001", VehicleKind::Truck, 5000, "ABC-1234", VehicleStatus::Available),
    ("V-002", VehicleKind::Van, 2000, "DEF-5678", VehicleStatus::Available),
    ("V-003", VehicleKind::Truck, 8000, "GHI-9012", VehicleStatus::Available),
    ("V-004", VehicleKind::Van, 1500, "JKL-3456", VehicleStatus::InMaintenance),
    ("V-005", VehicleKind::Truck, 10_000, "MNO-7890", VehicleStatus::Available),
];

const DRIVERS: [(&str, &str, &str, &str, DriverStatus); 5] = [
    ("D-001", "John Smith", "555-1234", "DL-123456", DriverStatus::Available),
    ("D-002", "Maria Garcia", "555-5678", "DL-234567", DriverStatus::Available),
    ("D-003", "David Chen", "555-9012", "DL-345678", DriverStatus::OnLeave),
    ("D-004", "Sarah Johnson", "555-3456", "DL-456789", DriverStatus::Available),
    ("D-005", "Robert Taylor", "555-7890", "DL-567890", DriverStatus::Available),
];

const STOCK: [(&str, &str, &str, i64, Date, &str); 10] = [
    ("B-7829", "Rice (25kg)", "Grains", 145, date!(2025 - 12 - 15), "Zone A, Rack 12"),
    ("B-7830", "Wheat Flour (10kg)", "Grains", 230, date!(2025 - 10 - 20), "Zone A, Rack 14"),
    ("B-7831", "Sugar (5kg)", "Sweeteners", 180, date!(2026 - 01 - 10), "Zone A, Rack 15"),
    ("B-7832", "Cooking Oil (5L)", "Oils", 120, date!(2025 - 08 - 05), "Zone B, Rack 3"),
    ("B-7833", "Milk Powder (1kg)", "Dairy", 90, date!(2025 - 06 - 30), "Zone B, Rack 5"),
    ("B-7834", "Lentils (5kg)", "Pulses", 200, date!(2026 - 02 - 15), "Zone A, Rack 18"),
    ("B-7835", "Salt (1kg)", "Condiments", 300, date!(2027 - 01 - 01), "Zone A, Rack 20"),
    ("B-7836", "Tea (500g)", "Beverages", 150, date!(2025 - 09 - 12), "Zone B, Rack 8"),
    ("B-7837", "Canned Beans (400g)", "Canned Goods", 25, date!(2025 - 05 - 20), "Zone C, Rack 2"),
    ("B-7838", "Pasta (500g)", "Grains", 175, date!(2025 - 11 - 30), "Zone A, Rack 16"),
];

const ORDERS: [DemoOrder<'static>; 5] = [
    DemoOrder {
        id: "DO-1001",
        destination: "PDS Store #42",
        address: "123 Main St, City A",
        items: [("B-7829", "Rice (25kg)", 20), ("B-7830", "Wheat Flour (10kg)", 15)],
        scheduled_date: date!(2025 - 06 - 15),
        priority: Priority::High,
    },
    DemoOrder {
        id: "DO-1002",
        destination: "PDS Store #17",
        address: "456 Oak Ave, City B",
        items: [("B-7831", "Sugar (5kg)", 30), ("B-7834", "Lentils (5kg)", 25)],
        scheduled_date: date!(2025 - 06 - 16),
        priority: Priority::Medium,
    },
    DemoOrder {
        id: "DO-1003",
        destination: "PDS Store #08",
        address: "789 Pine Rd, City C",
        items: [("B-7832", "Cooking Oil (5L)", 40), ("B-7835", "Salt (1kg)", 50)],
        scheduled_date: date!(2025 - 06 - 15),
        priority: Priority::High,
    },
    DemoOrder {
        id: "DO-1004",
        destination: "PDS Store #23",
        address: "101 Elm St, City D",
        items: [("B-7836", "Tea (500g)", 60), ("B-7838", "Pasta (500g)", 45)],
        scheduled_date: date!(2025 - 06 - 17),
        priority: Priority::Low,
    },
    DemoOrder {
        id: "DO-1005",
        destination: "PDS Store #11",
        address: "202 Cedar Ln, City E",
        items: [
            ("B-7833", "Milk Powder (1kg)", 35),
            ("B-7837", "Canned Beans (400g)", 70),
        ],
        scheduled_date: date!(2025 - 06 - 16),
        priority: Priority::Medium,
    },
];

const TRIPS: [DemoTrip<'static>; 3] = [
    DemoTrip {
        order_id: "DO-1001",
        vehicle_id: "V-001",
        driver_id: "D-001",
        reports: &[
            (15, 34.0548, -118.2642),
            (35, 34.0595, -118.2786),
            (50, 34.0639, -118.2912),
            (65, 34.0689, -118.3037),
        ],
        alert: None,
    },
    DemoTrip {
        order_id: "DO-1002",
        vehicle_id: "V-002",
        driver_id: "D-002",
        reports: &[(20, 34.1512, -118.1567), (40, 34.1563, -118.1689)],
        alert: Some((
            "Route Deviation",
            "Vehicle deviated from planned route",
            Severity::Medium,
        )),
    },
    DemoTrip {
        order_id: "DO-1003",
        vehicle_id: "V-003",
        driver_id: "D-004",
        reports: &[
            (25, 34.0276, -118.2967),
            (50, 34.0328, -118.3083),
            (75, 34.0380, -118.3199),
        ],
        alert: Some(("Traffic Delay", "Heavy traffic on main route", Severity::High)),
    },
];

fn line((batch_id, product_name, quantity): Line<'_>) -> NewLineItem {
    NewLineItem {
        batch_id: batch_id.to_string(),
        product_name: product_name.to_string(),
        quantity,
    }
}

/// Loads the demo fleet, stock, orders and deliveries into an empty depot.
///
/// # Errors
///
/// Returns the first error raised while loading, e.g. if the depot already
/// holds one of the demo records.
pub fn load_demo_data(depot: &Depot) -> Result<(), CoreError> {
    for (id, kind, kilograms, plate, status) in VEHICLES {
        depot.fleet().register_vehicle(
            Vehicle::new(
                VehicleId::new(id),
                kind,
                Capacity::from_kilograms(kilograms),
                plate.to_string(),
            )
            .with_status(status),
        )?;
    }
    for (id, name, phone, license, status) in DRIVERS {
        depot.fleet().register_driver(
            Driver::new(
                DriverId::new(id),
                name.to_string(),
                phone.to_string(),
                license.to_string(),
            )
            .with_status(status),
        )?;
    }

    for (batch_id, product_name, category, quantity, expiry_date, location) in STOCK {
        depot.stock().create_item(NewStockItem {
            batch_id: batch_id.to_string(),
            product_name: product_name.to_string(),
            category: category.to_string(),
            quantity,
            expiry_date,
            location: location.to_string(),
        })?;
    }

    for order in ORDERS {
        depot.orders().create(NewDispatchOrder {
            id: OrderId::new(order.id),
            destination: order.destination.to_string(),
            address: order.address.to_string(),
            items: order.items.into_iter().map(line).collect(),
            scheduled_date: order.scheduled_date,
            priority: order.priority,
        })?;
    }

    for trip in TRIPS {
        let order_id: OrderId = OrderId::new(trip.order_id);
        depot.assign(
            &order_id,
            &VehicleId::new(trip.vehicle_id),
            &DriverId::new(trip.driver_id),
        )?;
        let delivery_id: DeliveryId = depot.dispatch(&order_id)?.delivery.id;

        for &(progress, lat, lng) in trip.reports {
            depot.record_progress(&delivery_id, progress, GeoPoint::new(lat, lng)?)?;
        }
        if let Some((kind, message, severity)) = trip.alert {
            depot.raise_alert(
                &delivery_id,
                NewAlert {
                    kind: kind.to_string(),
                    message: message.to_string(),
                    severity,
                },
            )?;
        }
    }

    info!(
        vehicles = VEHICLES.len(),
        drivers = DRIVERS.len(),
        stock_items = STOCK.len(),
        orders = ORDERS.len(),
        deliveries = TRIPS.len(),
        "Loaded demo data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot::DepotConfig;
    use depot_domain::{DeliveryStatus, OrderStatus};

    #[test]
    fn test_demo_data_is_consistent() {
        let depot: Depot = Depot::new(DepotConfig::default());

        load_demo_data(&depot).unwrap();

        assert!(depot.consistency_violations().is_empty());
        assert_eq!(depot.orders().list_by_status(OrderStatus::Dispatched).len(), 3);
        assert_eq!(depot.orders().list_by_status(OrderStatus::Pending).len(), 2);
        assert_eq!(depot.fleet().list_available_vehicles().len(), 1);
        assert_eq!(depot.fleet().list_available_drivers().len(), 1);
        assert_eq!(depot.stock().list().len(), 10);
    }

    #[test]
    fn test_demo_deliveries_match_their_reports() {
        let depot: Depot = Depot::new(DepotConfig::default());
        load_demo_data(&depot).unwrap();

        let deliveries = depot.ledger().list_active();

        assert_eq!(deliveries.len(), 3);
        assert_eq!(deliveries[0].progress, 65);
        assert_eq!(deliveries[0].route.len(), 5);
        assert_eq!(deliveries[1].status, DeliveryStatus::InTransit);
        assert_eq!(deliveries[1].alerts.len(), 1);
        assert_eq!(deliveries[2].status, DeliveryStatus::Delayed);
    }

    #[test]
    fn test_demo_data_cannot_load_twice() {
        let depot: Depot = Depot::new(DepotConfig::default());
        load_demo_data(&depot).unwrap();

        assert!(load_demo_data(&depot).is_err());
    }
}

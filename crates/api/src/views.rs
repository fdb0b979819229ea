// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions from domain records to response views and audit snapshots.

use crate::request_response::{
    AlertInfo, DeliveryInfo, DriverInfo, LineItemInfo, OrderInfo, RoutePointInfo, StockItemInfo,
    VehicleInfo,
};
use depot_audit::StateSnapshot;
use depot_domain::{
    Alert, Delivery, DispatchOrder, Driver, GeoPoint, StockItem, Vehicle,
};
use time::{Date, OffsetDateTime};

/// Formats a timestamp as ISO-8601.
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap_or_else(|_| at.to_string())
}

fn point_info(location: GeoPoint, recorded_at: OffsetDateTime) -> RoutePointInfo {
    RoutePointInfo {
        lat: location.lat,
        lng: location.lng,
        recorded_at: format_timestamp(recorded_at),
    }
}

#[must_use]
pub fn vehicle_info(vehicle: &Vehicle) -> VehicleInfo {
    VehicleInfo {
        vehicle_id: vehicle.id.to_string(),
        vehicle_type: vehicle.kind.as_str().to_string(),
        capacity: vehicle.capacity.to_string(),
        capacity_kg: vehicle.capacity.kilograms(),
        license_plate: vehicle.license_plate.clone(),
        status: vehicle.status.to_string(),
    }
}

#[must_use]
pub fn driver_info(driver: &Driver) -> DriverInfo {
    DriverInfo {
        driver_id: driver.id.to_string(),
        name: driver.name.clone(),
        phone: driver.phone.clone(),
        license_number: driver.license_number.clone(),
        status: driver.status.to_string(),
    }
}

#[must_use]
pub fn order_info(order: &DispatchOrder) -> OrderInfo {
    OrderInfo {
        order_id: order.id.to_string(),
        destination: order.destination.clone(),
        address: order.address.clone(),
        items: order
            .items
            .iter()
            .map(|item| LineItemInfo {
                batch_id: item.batch_id.clone(),
                product_name: item.product_name.clone(),
                quantity: item.quantity,
            })
            .collect(),
        total_units: order.total_units(),
        scheduled_date: order.scheduled_date.to_string(),
        priority: order.priority.to_string(),
        status: order.status.to_string(),
        vehicle_id: order.vehicle.as_ref().map(ToString::to_string),
        driver_id: order.driver.as_ref().map(ToString::to_string),
        assigned_at: order.assigned_at.map(format_timestamp),
        dispatched_at: order.dispatched_at.map(format_timestamp),
        delivered_at: order.delivered_at.map(format_timestamp),
        cancelled_at: order.cancelled_at.map(format_timestamp),
    }
}

#[must_use]
pub fn alert_info(alert: &Alert) -> AlertInfo {
    AlertInfo {
        alert_id: alert.id.0,
        alert_type: alert.kind.clone(),
        message: alert.message.clone(),
        severity: alert.severity.to_string(),
        raised_at: format_timestamp(alert.raised_at),
    }
}

#[must_use]
pub fn delivery_info(delivery: &Delivery) -> DeliveryInfo {
    let last_seen: OffsetDateTime = delivery
        .route
        .last()
        .map_or(delivery.departed_at, |point| point.recorded_at);

    DeliveryInfo {
        delivery_id: delivery.id.to_string(),
        order_id: delivery.order_id.to_string(),
        destination: delivery.destination.clone(),
        address: delivery.address.clone(),
        vehicle_id: delivery.vehicle.to_string(),
        driver_id: delivery.driver.to_string(),
        departed_at: format_timestamp(delivery.departed_at),
        completed_at: delivery.completed_at.map(format_timestamp),
        progress: delivery.progress,
        current_location: point_info(delivery.current_location, last_seen),
        route: delivery
            .route
            .iter()
            .map(|point| point_info(point.location, point.recorded_at))
            .collect(),
        alerts: delivery.alerts.iter().map(alert_info).collect(),
        status: delivery.status.to_string(),
    }
}

#[must_use]
pub fn stock_item_info(item: &StockItem, today: Date, expiry_window_days: u32) -> StockItemInfo {
    StockItemInfo {
        item_id: item.id.0,
        batch_id: item.batch_id.clone(),
        product_name: item.product_name.clone(),
        category: item.category.clone(),
        quantity: item.quantity,
        expiry_date: item.expiry_date.to_string(),
        location: item.location.clone(),
        status: item.status.to_string(),
        revision: item.revision,
        expiring_soon: item.expires_within(today, expiry_window_days),
    }
}

// Audit snapshots

pub(crate) fn order_snapshot(order: &DispatchOrder) -> StateSnapshot {
    StateSnapshot::new(format!(
        "status={} vehicle={} driver={}",
        order.status,
        order.vehicle.as_ref().map_or("-", |v| v.value()),
        order.driver.as_ref().map_or("-", |d| d.value()),
    ))
}

pub(crate) fn delivery_snapshot(delivery: &Delivery) -> StateSnapshot {
    StateSnapshot::new(format!(
        "status={} progress={} alerts={}",
        delivery.status,
        delivery.progress,
        delivery.alerts.len()
    ))
}

pub(crate) fn stock_snapshot(item: &StockItem) -> StateSnapshot {
    StateSnapshot::new(format!(
        "quantity={} status={} revision={}",
        item.quantity, item.status, item.revision
    ))
}

pub(crate) fn vehicle_snapshot(vehicle: &Vehicle) -> StateSnapshot {
    StateSnapshot::new(format!("status={}", vehicle.status))
}

pub(crate) fn driver_snapshot(driver: &Driver) -> StateSnapshot {
    StateSnapshot::new(format!("status={}", driver.status))
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates travel as `YYYY-MM-DD` strings and timestamps as ISO-8601 strings.

use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

/// One line of a new dispatch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemRequest {
    pub batch_id: String,
    pub product_name: String,
    pub quantity: i64,
}

/// API request to create a dispatch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub order_id: String,
    pub destination: String,
    pub address: String,
    pub items: Vec<LineItemRequest>,
    /// `YYYY-MM-DD`.
    pub scheduled_date: String,
    /// `High`, `Medium` or `Low`.
    pub priority: String,
}

/// API request to reserve a vehicle and driver for a pending order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignResourcesRequest {
    pub order_id: String,
    pub vehicle_id: String,
    pub driver_id: String,
}

/// API request naming a single order (dispatch, cancel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderActionRequest {
    pub order_id: String,
}

/// API request to record a delivery's progress and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordProgressRequest {
    pub delivery_id: String,
    pub progress: u16,
    pub lat: f64,
    pub lng: f64,
}

/// API request to raise an alert on a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaiseAlertRequest {
    pub delivery_id: String,
    /// Free-form alert type, e.g. "Traffic Delay".
    pub alert_type: String,
    pub message: String,
    /// `Low`, `Medium` or `High`.
    pub severity: String,
}

/// API request to resolve one alert on a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveAlertRequest {
    pub delivery_id: String,
    pub alert_id: u64,
}

/// API request to add a stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStockItemRequest {
    pub batch_id: String,
    pub product_name: String,
    pub category: String,
    pub quantity: i64,
    /// `YYYY-MM-DD`.
    pub expiry_date: String,
    pub location: String,
}

/// API request to change a stock item. Omitted fields stay as they are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStockItemRequest {
    pub item_id: u32,
    /// The revision the caller last saw.
    pub expected_revision: u64,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// API request to remove a stock item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteStockItemRequest {
    pub item_id: u32,
    pub expected_revision: u64,
}

/// API request naming a vehicle (maintenance, return to service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleActionRequest {
    pub vehicle_id: String,
}

/// API request naming a driver (leave, return from leave).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverActionRequest {
    pub driver_id: String,
}

/// Which deliveries to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryFilter {
    #[default]
    All,
    Active,
    Completed,
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub vehicle_id: String,
    pub vehicle_type: String,
    /// Display form, e.g. "5 tons".
    pub capacity: String,
    pub capacity_kg: u32,
    pub license_plate: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListVehiclesResponse {
    pub vehicles: Vec<VehicleInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverInfo {
    pub driver_id: String,
    pub name: String,
    pub phone: String,
    pub license_number: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListDriversResponse {
    pub drivers: Vec<DriverInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInfo {
    pub batch_id: String,
    pub product_name: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub order_id: String,
    pub destination: String,
    pub address: String,
    pub items: Vec<LineItemInfo>,
    pub total_units: u64,
    pub scheduled_date: String,
    pub priority: String,
    pub status: String,
    pub vehicle_id: Option<String>,
    pub driver_id: Option<String>,
    pub assigned_at: Option<String>,
    pub dispatched_at: Option<String>,
    pub delivered_at: Option<String>,
    pub cancelled_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOrdersResponse {
    pub orders: Vec<OrderInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePointInfo {
    pub lat: f64,
    pub lng: f64,
    pub recorded_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertInfo {
    pub alert_id: u64,
    pub alert_type: String,
    pub message: String,
    pub severity: String,
    pub raised_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryInfo {
    pub delivery_id: String,
    pub order_id: String,
    pub destination: String,
    pub address: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub departed_at: String,
    pub completed_at: Option<String>,
    pub progress: u8,
    pub current_location: RoutePointInfo,
    pub route: Vec<RoutePointInfo>,
    pub alerts: Vec<AlertInfo>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListDeliveriesResponse {
    pub deliveries: Vec<DeliveryInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItemInfo {
    pub item_id: u32,
    pub batch_id: String,
    pub product_name: String,
    pub category: String,
    pub quantity: u32,
    pub expiry_date: String,
    pub location: String,
    pub status: String,
    pub revision: u64,
    /// Expires inside the configured warning window.
    pub expiring_soon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStockResponse {
    pub items: Vec<StockItemInfo>,
}

/// API response for a successful dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchOrderResponse {
    pub order: OrderInfo,
    pub delivery: DeliveryInfo,
}

/// API response for alert commands: the delivery after the change and the
/// alert that was raised or resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertResponse {
    pub delivery: DeliveryInfo,
    pub alert: AlertInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub pending: usize,
    pub assigned: usize,
    pub dispatched: usize,
    pub delivered: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockOverview {
    pub total_items: usize,
    pub low_stock: usize,
    pub critical_stock: usize,
    pub expiring_soon: usize,
}

/// Operations overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub orders: StatusCount,
    pub active_deliveries: usize,
    pub completed_deliveries: usize,
    pub deliveries_with_alerts: usize,
    pub available_vehicles: usize,
    pub available_drivers: usize,
    pub stock: StockOverview,
}

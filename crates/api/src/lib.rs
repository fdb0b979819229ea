// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! The API boundary of the depot dispatch service.
//!
//! Handlers take plain request structs, translate them into domain values,
//! run them against a [`depot::Depot`] and translate the outcome back into
//! response structs and [`ApiError`]s. Commands also describe themselves as
//! an [`AuditEvent`].

mod error;
mod handlers;
mod request_response;
mod views;

#[cfg(test)]
mod tests;

use depot_audit::AuditEvent;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    assign_resources, cancel_order, create_order, create_stock_item, dashboard,
    delete_stock_item, dispatch_order, get_delivery, get_order, get_stock_item, list_available_drivers,
    list_available_vehicles, list_deliveries, list_drivers, list_orders, list_stock,
    list_vehicles, raise_alert, record_progress, resolve_alert, return_driver_from_leave,
    return_vehicle_to_service, set_driver_on_leave, set_vehicle_in_maintenance, stock_attention,
    update_stock_item,
};
pub use request_response::{
    AlertInfo, AlertResponse, AssignResourcesRequest, CreateOrderRequest, CreateStockItemRequest,
    DashboardResponse, DeleteStockItemRequest, DeliveryFilter, DeliveryInfo, DispatchOrderResponse,
    DriverActionRequest, DriverInfo, LineItemInfo, LineItemRequest, ListDeliveriesResponse,
    ListDriversResponse, ListOrdersResponse, ListStockResponse, ListVehiclesResponse,
    OrderActionRequest, OrderInfo, RaiseAlertRequest, RecordProgressRequest, ResolveAlertRequest,
    RoutePointInfo, StatusCount, StockItemInfo, StockOverview, UpdateStockItemRequest,
    VehicleActionRequest, VehicleInfo,
};
pub use views::{
    alert_info, delivery_info, driver_info, format_timestamp, order_info, stock_item_info,
    vehicle_info,
};

/// The outcome of a successful command.
#[derive(Debug, Clone)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Every command returns an [`ApiResult`] carrying the audit event that
//! describes it. Callers decide where the event is stored.

use std::str::FromStr;

use depot::{CoreError, Depot, Dispatched};
use depot_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot, Subject};
use depot_domain::{
    AlertId, DeliveryId, DispatchOrder, DriverId, EntityKind, GeoPoint, NewAlert,
    NewDispatchOrder, NewLineItem, NewStockItem, OrderId, OrderStatus, Priority, Severity,
    StockItem, StockItemId, StockUpdate, VehicleId, parse_date,
};
use tracing::warn;

use crate::ApiResult;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AlertResponse, AssignResourcesRequest, CreateOrderRequest, CreateStockItemRequest,
    DashboardResponse, DeleteStockItemRequest, DeliveryFilter, DeliveryInfo, DispatchOrderResponse,
    DriverActionRequest, DriverInfo, ListDeliveriesResponse, ListDriversResponse,
    ListOrdersResponse, ListStockResponse, ListVehiclesResponse, OrderActionRequest, OrderInfo,
    RaiseAlertRequest, RecordProgressRequest, ResolveAlertRequest, StatusCount, StockItemInfo,
    StockOverview, UpdateStockItemRequest, VehicleActionRequest, VehicleInfo,
};
use crate::views::{
    alert_info, delivery_info, delivery_snapshot, driver_info, driver_snapshot, order_info,
    order_snapshot, stock_item_info, stock_snapshot, vehicle_info, vehicle_snapshot,
};

/// Runs `attempt`, running it a second time if the first lost a
/// compare-and-swap and the depot allows a retry.
///
/// The second attempt re-reads current state, so it usually fails with a
/// precise error instead of `StaleState`.
pub(crate) fn with_stale_retry<T, F>(depot: &Depot, mut attempt: F) -> Result<T, CoreError>
where
    F: FnMut() -> Result<T, CoreError>,
{
    match attempt() {
        Err(err) if err.is_stale() && depot.config().retry_on_stale => {
            warn!(error = %err, "Lost a concurrent update, retrying once");
            attempt()
        }
        outcome => outcome,
    }
}

fn audit_event(
    depot: &Depot,
    actor: Actor,
    cause: Cause,
    action: Action,
    subject: Subject,
    before: StateSnapshot,
    after: StateSnapshot,
) -> AuditEvent {
    AuditEvent::new(actor, cause, action, subject, before, after, depot.now())
}

fn current_order(depot: &Depot, order_id: &OrderId) -> Result<DispatchOrder, ApiError> {
    depot.orders().get(order_id).map_err(translate_core_error)
}

fn stock_view(depot: &Depot, item: &StockItem) -> StockItemInfo {
    stock_item_info(item, depot.today(), depot.stock().expiry_window_days())
}

// ============================================================================
// Fleet queries
// ============================================================================

/// Lists every vehicle, whatever its status.
#[must_use]
pub fn list_vehicles(depot: &Depot) -> ListVehiclesResponse {
    ListVehiclesResponse {
        vehicles: depot.fleet().list_vehicles().iter().map(vehicle_info).collect(),
    }
}

/// Lists vehicles that can be assigned right now.
#[must_use]
pub fn list_available_vehicles(depot: &Depot) -> ListVehiclesResponse {
    ListVehiclesResponse {
        vehicles: depot
            .fleet()
            .list_available_vehicles()
            .iter()
            .map(vehicle_info)
            .collect(),
    }
}

#[must_use]
pub fn list_drivers(depot: &Depot) -> ListDriversResponse {
    ListDriversResponse {
        drivers: depot.fleet().list_drivers().iter().map(driver_info).collect(),
    }
}

#[must_use]
pub fn list_available_drivers(depot: &Depot) -> ListDriversResponse {
    ListDriversResponse {
        drivers: depot
            .fleet()
            .list_available_drivers()
            .iter()
            .map(driver_info)
            .collect(),
    }
}

// ============================================================================
// Order queries
// ============================================================================

/// Lists dispatch orders, optionally restricted to one status.
///
/// # Arguments
///
/// * `depot` - The depot to read from
/// * `status` - An order status name such as `Pending`, or `None` for all
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if `status` is not a known order status.
pub fn list_orders(depot: &Depot, status: Option<&str>) -> Result<ListOrdersResponse, ApiError> {
    let orders: Vec<DispatchOrder> = match status {
        Some(name) => {
            let status: OrderStatus = OrderStatus::from_str(name).map_err(translate_domain_error)?;
            depot.orders().list_by_status(status)
        }
        None => depot.orders().list(),
    };

    Ok(ListOrdersResponse {
        orders: orders.iter().map(order_info).collect(),
    })
}

/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the order does not exist.
pub fn get_order(depot: &Depot, order_id: &str) -> Result<OrderInfo, ApiError> {
    current_order(depot, &OrderId::new(order_id)).map(|order| order_info(&order))
}

// ============================================================================
// Delivery queries
// ============================================================================

#[must_use]
pub fn list_deliveries(depot: &Depot, filter: DeliveryFilter) -> ListDeliveriesResponse {
    let deliveries = match filter {
        DeliveryFilter::All => depot.ledger().list(),
        DeliveryFilter::Active => depot.ledger().list_active(),
        DeliveryFilter::Completed => depot.ledger().list_completed(),
    };
    ListDeliveriesResponse {
        deliveries: deliveries.iter().map(delivery_info).collect(),
    }
}

/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the delivery does not exist.
pub fn get_delivery(depot: &Depot, delivery_id: &str) -> Result<DeliveryInfo, ApiError> {
    depot
        .ledger()
        .get(&DeliveryId::new(delivery_id))
        .map(|delivery| delivery_info(&delivery))
        .map_err(translate_core_error)
}

// ============================================================================
// Stock queries
// ============================================================================

/// Lists stock items, filtered by a search term when one is given.
#[must_use]
pub fn list_stock(depot: &Depot, query: Option<&str>) -> ListStockResponse {
    let items: Vec<StockItem> = query.map_or_else(
        || depot.stock().list(),
        |term| depot.stock().search(term),
    );
    ListStockResponse {
        items: items.iter().map(|item| stock_view(depot, item)).collect(),
    }
}

/// Stock that is low, critical or close to expiry.
#[must_use]
pub fn stock_attention(depot: &Depot) -> ListStockResponse {
    ListStockResponse {
        items: depot
            .stock()
            .attention_items(depot.today())
            .iter()
            .map(|item| stock_view(depot, item))
            .collect(),
    }
}

/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the item does not exist.
pub fn get_stock_item(depot: &Depot, item_id: u32) -> Result<StockItemInfo, ApiError> {
    depot
        .stock()
        .get(StockItemId(item_id))
        .map(|item| stock_view(depot, &item))
        .map_err(translate_core_error)
}

// ============================================================================
// Dashboard
// ============================================================================

/// Aggregates order, delivery, fleet and stock counts.
#[must_use]
pub fn dashboard(depot: &Depot) -> DashboardResponse {
    let mut orders: StatusCount = StatusCount {
        pending: 0,
        assigned: 0,
        dispatched: 0,
        delivered: 0,
        cancelled: 0,
    };
    for (status, count) in depot.orders().status_counts() {
        match status {
            OrderStatus::Pending => orders.pending = count,
            OrderStatus::Assigned => orders.assigned = count,
            OrderStatus::Dispatched => orders.dispatched = count,
            OrderStatus::Delivered => orders.delivered = count,
            OrderStatus::Cancelled => orders.cancelled = count,
        }
    }

    let active = depot.ledger().list_active();
    let stock = depot.stock().summary(depot.today());

    DashboardResponse {
        orders,
        active_deliveries: active.len(),
        completed_deliveries: depot.ledger().list_completed().len(),
        deliveries_with_alerts: active.iter().filter(|d| d.has_alerts()).count(),
        available_vehicles: depot.fleet().list_available_vehicles().len(),
        available_drivers: depot.fleet().list_available_drivers().len(),
        stock: StockOverview {
            total_items: stock.total_items,
            low_stock: stock.low_stock,
            critical_stock: stock.critical_stock,
            expiring_soon: stock.expiring_soon,
        },
    }
}

// ============================================================================
// Order commands
// ============================================================================

/// Creates a new pending dispatch order.
///
/// # Arguments
///
/// * `depot` - The depot to change
/// * `request` - The order to create
/// * `actor` - Who is creating the order
/// * `cause` - Why the order is being created
///
/// # Errors
///
/// Returns an error if:
/// - The scheduled date or priority cannot be parsed
/// - A field is blank or the order has no positive line items
/// - An order with the same id already exists
pub fn create_order(
    depot: &Depot,
    request: &CreateOrderRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<OrderInfo>, ApiError> {
    let scheduled_date = parse_date(&request.scheduled_date).map_err(translate_domain_error)?;
    let priority: Priority = Priority::from_str(&request.priority).map_err(translate_domain_error)?;

    let new_order: NewDispatchOrder = NewDispatchOrder {
        id: OrderId::new(&request.order_id),
        destination: request.destination.clone(),
        address: request.address.clone(),
        items: request
            .items
            .iter()
            .map(|item| NewLineItem {
                batch_id: item.batch_id.clone(),
                product_name: item.product_name.clone(),
                quantity: item.quantity,
            })
            .collect(),
        scheduled_date,
        priority,
    };

    let order: DispatchOrder = depot
        .orders()
        .create(new_order)
        .map_err(translate_core_error)?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(
            String::from("CreateOrder"),
            Some(format!(
                "{} line items for {}",
                order.items.len(),
                order.destination
            )),
        ),
        Subject::new(EntityKind::Order, order.id.value()),
        StateSnapshot::absent(),
        order_snapshot(&order),
    );

    Ok(ApiResult {
        response: order_info(&order),
        audit_event,
    })
}

/// Reserves a vehicle and driver for a pending order.
///
/// Either both resources end up reserved for the order or neither does.
/// A lost race is retried once when the depot allows it.
///
/// # Arguments
///
/// * `depot` - The depot to change
/// * `request` - The order, vehicle and driver to pair
/// * `actor` - Who is assigning
/// * `cause` - Why
///
/// # Errors
///
/// Returns an error if:
/// - The order, vehicle or driver does not exist
/// - The order is no longer pending
/// - The vehicle or driver is not available
pub fn assign_resources(
    depot: &Depot,
    request: &AssignResourcesRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<OrderInfo>, ApiError> {
    let order_id: OrderId = OrderId::new(&request.order_id);
    let vehicle_id: VehicleId = VehicleId::new(&request.vehicle_id);
    let driver_id: DriverId = DriverId::new(&request.driver_id);

    let before: DispatchOrder = current_order(depot, &order_id)?;
    let order: DispatchOrder =
        with_stale_retry(depot, || depot.assign(&order_id, &vehicle_id, &driver_id))
            .map_err(translate_core_error)?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(
            String::from("AssignResources"),
            Some(format!("vehicle {vehicle_id}, driver {driver_id}")),
        ),
        Subject::new(EntityKind::Order, order.id.value()),
        order_snapshot(&before),
        order_snapshot(&order),
    );

    Ok(ApiResult {
        response: order_info(&order),
        audit_event,
    })
}

/// Dispatches an assigned order and opens its delivery.
///
/// # Errors
///
/// Returns an error if:
/// - The order does not exist
/// - The order is not assigned
pub fn dispatch_order(
    depot: &Depot,
    request: &OrderActionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<DispatchOrderResponse>, ApiError> {
    let order_id: OrderId = OrderId::new(&request.order_id);

    let before: DispatchOrder = current_order(depot, &order_id)?;
    let dispatched: Dispatched =
        with_stale_retry(depot, || depot.dispatch(&order_id)).map_err(translate_core_error)?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(
            String::from("DispatchOrder"),
            Some(format!("delivery {}", dispatched.delivery.id)),
        ),
        Subject::new(EntityKind::Order, order_id.value()),
        order_snapshot(&before),
        order_snapshot(&dispatched.order),
    );

    Ok(ApiResult {
        response: DispatchOrderResponse {
            order: order_info(&dispatched.order),
            delivery: delivery_info(&dispatched.delivery),
        },
        audit_event,
    })
}

/// Cancels a pending or assigned order, releasing any reserved resources.
///
/// # Errors
///
/// Returns an error if:
/// - The order does not exist
/// - The order has already been dispatched, delivered or cancelled
pub fn cancel_order(
    depot: &Depot,
    request: &OrderActionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<OrderInfo>, ApiError> {
    let order_id: OrderId = OrderId::new(&request.order_id);

    let before: DispatchOrder = current_order(depot, &order_id)?;
    let order: DispatchOrder =
        with_stale_retry(depot, || depot.cancel(&order_id)).map_err(translate_core_error)?;

    let details: Option<String> = before
        .resources()
        .map(|(vehicle, driver)| format!("released vehicle {vehicle}, driver {driver}"));

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(String::from("CancelOrder"), details),
        Subject::new(EntityKind::Order, order_id.value()),
        order_snapshot(&before),
        order_snapshot(&order),
    );

    Ok(ApiResult {
        response: order_info(&order),
        audit_event,
    })
}

// ============================================================================
// Delivery commands
// ============================================================================

/// Records a new position and progress value for a delivery.
///
/// Reaching 100% completes the delivery, marks the order delivered and
/// frees its vehicle and driver.
///
/// # Errors
///
/// Returns an error if:
/// - The coordinates are out of range
/// - The delivery does not exist or is already completed
/// - The progress is above 100 or lower than the current value
pub fn record_progress(
    depot: &Depot,
    request: &RecordProgressRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<DeliveryInfo>, ApiError> {
    let delivery_id: DeliveryId = DeliveryId::new(&request.delivery_id);
    let location: GeoPoint =
        GeoPoint::new(request.lat, request.lng).map_err(translate_domain_error)?;

    let before = depot.ledger().get(&delivery_id).map_err(translate_core_error)?;
    let delivery = depot
        .record_progress(&delivery_id, request.progress, location)
        .map_err(translate_core_error)?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(
            String::from("RecordProgress"),
            Some(format!("{}% at {:.4}, {:.4}", delivery.progress, location.lat, location.lng)),
        ),
        Subject::new(EntityKind::Delivery, delivery_id.value()),
        delivery_snapshot(&before),
        delivery_snapshot(&delivery),
    );

    Ok(ApiResult {
        response: delivery_info(&delivery),
        audit_event,
    })
}

/// Raises an alert on an active delivery. A `High` alert delays it.
///
/// # Errors
///
/// Returns an error if:
/// - The severity is unknown or the type or message is blank
/// - The delivery does not exist or is already completed
pub fn raise_alert(
    depot: &Depot,
    request: &RaiseAlertRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<AlertResponse>, ApiError> {
    let delivery_id: DeliveryId = DeliveryId::new(&request.delivery_id);
    let severity: Severity = Severity::from_str(&request.severity).map_err(translate_domain_error)?;
    let new_alert: NewAlert = NewAlert {
        kind: request.alert_type.clone(),
        message: request.message.clone(),
        severity,
    };

    let before = depot.ledger().get(&delivery_id).map_err(translate_core_error)?;
    let (delivery, alert) = depot
        .raise_alert(&delivery_id, new_alert)
        .map_err(translate_core_error)?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(
            String::from("RaiseAlert"),
            Some(format!("alert {} ({}, {})", alert.id, alert.kind, alert.severity)),
        ),
        Subject::new(EntityKind::Delivery, delivery_id.value()),
        delivery_snapshot(&before),
        delivery_snapshot(&delivery),
    );

    Ok(ApiResult {
        response: AlertResponse {
            delivery: delivery_info(&delivery),
            alert: alert_info(&alert),
        },
        audit_event,
    })
}

/// Resolves one open alert on a delivery.
///
/// # Errors
///
/// Returns an error if the delivery does not exist or the alert is not
/// open on it.
pub fn resolve_alert(
    depot: &Depot,
    request: &ResolveAlertRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<AlertResponse>, ApiError> {
    let delivery_id: DeliveryId = DeliveryId::new(&request.delivery_id);

    let before = depot.ledger().get(&delivery_id).map_err(translate_core_error)?;
    let (delivery, alert) = depot
        .resolve_alert(&delivery_id, AlertId(request.alert_id))
        .map_err(translate_core_error)?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(
            String::from("ResolveAlert"),
            Some(format!("alert {}", alert.id)),
        ),
        Subject::new(EntityKind::Delivery, delivery_id.value()),
        delivery_snapshot(&before),
        delivery_snapshot(&delivery),
    );

    Ok(ApiResult {
        response: AlertResponse {
            delivery: delivery_info(&delivery),
            alert: alert_info(&alert),
        },
        audit_event,
    })
}

// ============================================================================
// Stock commands
// ============================================================================

/// Adds a stock item.
///
/// # Errors
///
/// Returns an error if:
/// - The expiry date cannot be parsed
/// - A field is blank or the quantity is not positive
/// - The batch id is already stocked
pub fn create_stock_item(
    depot: &Depot,
    request: &CreateStockItemRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<StockItemInfo>, ApiError> {
    let expiry_date = parse_date(&request.expiry_date).map_err(translate_domain_error)?;
    let new_item: NewStockItem = NewStockItem {
        batch_id: request.batch_id.clone(),
        product_name: request.product_name.clone(),
        category: request.category.clone(),
        quantity: request.quantity,
        expiry_date,
        location: request.location.clone(),
    };

    let item: StockItem = depot
        .stock()
        .create_item(new_item)
        .map_err(translate_core_error)?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(
            String::from("CreateStockItem"),
            Some(format!("batch {}", item.batch_id)),
        ),
        Subject::new(EntityKind::StockItem, item.id.to_string()),
        StateSnapshot::absent(),
        stock_snapshot(&item),
    );

    Ok(ApiResult {
        response: stock_view(depot, &item),
        audit_event,
    })
}

/// Changes a stock item the caller last saw at `expected_revision`.
///
/// No retry happens here: a stale revision means the caller's view is out
/// of date and only the caller can decide what to send instead.
///
/// # Errors
///
/// Returns an error if:
/// - The item does not exist
/// - The item has changed since `expected_revision`
/// - An updated value is invalid
pub fn update_stock_item(
    depot: &Depot,
    request: &UpdateStockItemRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<StockItemInfo>, ApiError> {
    let id: StockItemId = StockItemId(request.item_id);
    let expiry_date = request
        .expiry_date
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(translate_domain_error)?;
    let update: StockUpdate = StockUpdate {
        product_name: request.product_name.clone(),
        category: request.category.clone(),
        quantity: request.quantity,
        expiry_date,
        location: request.location.clone(),
    };

    let before: StockItem = depot.stock().get(id).map_err(translate_core_error)?;
    let item: StockItem = depot
        .stock()
        .update_item(id, request.expected_revision, update)
        .map_err(translate_core_error)?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(String::from("UpdateStockItem"), None),
        Subject::new(EntityKind::StockItem, id.to_string()),
        stock_snapshot(&before),
        stock_snapshot(&item),
    );

    Ok(ApiResult {
        response: stock_view(depot, &item),
        audit_event,
    })
}

/// Removes a stock item the caller last saw at `expected_revision`.
///
/// # Errors
///
/// Returns an error if the item does not exist or has changed since
/// `expected_revision`.
pub fn delete_stock_item(
    depot: &Depot,
    request: &DeleteStockItemRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<StockItemInfo>, ApiError> {
    let id: StockItemId = StockItemId(request.item_id);
    let removed: StockItem = depot
        .stock()
        .delete_item(id, request.expected_revision)
        .map_err(translate_core_error)?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(
            String::from("DeleteStockItem"),
            Some(format!("batch {}", removed.batch_id)),
        ),
        Subject::new(EntityKind::StockItem, id.to_string()),
        stock_snapshot(&removed),
        StateSnapshot::absent(),
    );

    Ok(ApiResult {
        response: stock_view(depot, &removed),
        audit_event,
    })
}

// ============================================================================
// Fleet commands
// ============================================================================

fn vehicle_command<F>(
    depot: &Depot,
    request: &VehicleActionRequest,
    actor: Actor,
    cause: Cause,
    action: &str,
    change: F,
) -> Result<ApiResult<VehicleInfo>, ApiError>
where
    F: FnOnce(&VehicleId) -> Result<depot_domain::Vehicle, depot::FleetError>,
{
    let vehicle_id: VehicleId = VehicleId::new(&request.vehicle_id);
    let before = depot.fleet().vehicle(&vehicle_id).ok_or_else(|| {
        translate_core_error(CoreError::NotFound {
            kind: EntityKind::Vehicle,
            id: vehicle_id.to_string(),
        })
    })?;
    let vehicle = change(&vehicle_id).map_err(|err| translate_core_error(err.into()))?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(action.to_string(), None),
        Subject::new(EntityKind::Vehicle, vehicle_id.value()),
        vehicle_snapshot(&before),
        vehicle_snapshot(&vehicle),
    );

    Ok(ApiResult {
        response: vehicle_info(&vehicle),
        audit_event,
    })
}

fn driver_command<F>(
    depot: &Depot,
    request: &DriverActionRequest,
    actor: Actor,
    cause: Cause,
    action: &str,
    change: F,
) -> Result<ApiResult<DriverInfo>, ApiError>
where
    F: FnOnce(&DriverId) -> Result<depot_domain::Driver, depot::FleetError>,
{
    let driver_id: DriverId = DriverId::new(&request.driver_id);
    let before = depot.fleet().driver(&driver_id).ok_or_else(|| {
        translate_core_error(CoreError::NotFound {
            kind: EntityKind::Driver,
            id: driver_id.to_string(),
        })
    })?;
    let driver = change(&driver_id).map_err(|err| translate_core_error(err.into()))?;

    let audit_event: AuditEvent = audit_event(
        depot,
        actor,
        cause,
        Action::new(action.to_string(), None),
        Subject::new(EntityKind::Driver, driver_id.value()),
        driver_snapshot(&before),
        driver_snapshot(&driver),
    );

    Ok(ApiResult {
        response: driver_info(&driver),
        audit_event,
    })
}

/// Takes an available vehicle out of service.
///
/// # Errors
///
/// Returns an error if the vehicle does not exist or is assigned to an order.
pub fn set_vehicle_in_maintenance(
    depot: &Depot,
    request: &VehicleActionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<VehicleInfo>, ApiError> {
    vehicle_command(depot, request, actor, cause, "SetVehicleInMaintenance", |id| {
        depot.fleet().set_vehicle_in_maintenance(id)
    })
}

/// Puts a vehicle back into service after maintenance.
///
/// # Errors
///
/// Returns an error if the vehicle does not exist or is assigned to an order.
pub fn return_vehicle_to_service(
    depot: &Depot,
    request: &VehicleActionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<VehicleInfo>, ApiError> {
    vehicle_command(depot, request, actor, cause, "ReturnVehicleToService", |id| {
        depot.fleet().return_vehicle_to_service(id)
    })
}

/// # Errors
///
/// Returns an error if the driver does not exist or is assigned to an order.
pub fn set_driver_on_leave(
    depot: &Depot,
    request: &DriverActionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<DriverInfo>, ApiError> {
    driver_command(depot, request, actor, cause, "SetDriverOnLeave", |id| {
        depot.fleet().set_driver_on_leave(id)
    })
}

/// # Errors
///
/// Returns an error if the driver does not exist or is assigned to an order.
pub fn return_driver_from_leave(
    depot: &Depot,
    request: &DriverActionRequest,
    actor: Actor,
    cause: Cause,
) -> Result<ApiResult<DriverInfo>, ApiError> {
    driver_command(depot, request, actor, cause, "ReturnDriverFromLeave", |id| {
        depot.fleet().return_driver_from_leave(id)
    })
}

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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod live;
mod seed;

use axum::{
    Json, Router,
    extract::{
        FromRef, FromRequest, Path, Query, Request, State as AxumState, rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use depot::{Depot, DepotConfig};
use depot_api::{
    AlertResponse, ApiError, ApiResult, AssignResourcesRequest, CreateOrderRequest,
    CreateStockItemRequest, DashboardResponse, DeleteStockItemRequest, DeliveryFilter,
    DeliveryInfo, DispatchOrderResponse, DriverActionRequest, DriverInfo, ListDeliveriesResponse,
    ListDriversResponse, ListOrdersResponse, ListStockResponse, ListVehiclesResponse,
    OrderActionRequest, OrderInfo, RaiseAlertRequest, RecordProgressRequest, ResolveAlertRequest,
    StockItemInfo, UpdateStockItemRequest, VehicleActionRequest, VehicleInfo,
};
use depot_audit::{Actor, AuditEvent, AuditLog, Cause};
use depot_domain::{DomainError, GeoPoint, StockThresholds};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::live::{LiveEvent, LiveEventBroadcaster, live_events_handler};

/// Depot Server - HTTP server for warehouse dispatch and delivery tracking
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Load the demo fleet, stock, orders and deliveries on startup
    #[arg(long)]
    seed_demo_data: bool,

    /// Latitude of the dispatch origin
    #[arg(long, default_value_t = DepotConfig::DEFAULT_ORIGIN.lat, allow_negative_numbers = true)]
    origin_lat: f64,

    /// Longitude of the dispatch origin
    #[arg(long, default_value_t = DepotConfig::DEFAULT_ORIGIN.lng, allow_negative_numbers = true)]
    origin_lng: f64,

    /// Stock at or below this quantity is critical
    #[arg(long, default_value_t = StockThresholds::DEFAULT_CRITICAL)]
    critical_stock: u32,

    /// Stock at or below this quantity is low
    #[arg(long, default_value_t = StockThresholds::DEFAULT_LOW)]
    low_stock: u32,

    /// Stock expiring within this many days needs attention
    #[arg(long, default_value_t = DepotConfig::DEFAULT_EXPIRY_WINDOW_DAYS)]
    expiry_window_days: u32,

    /// Fail order commands that lose a concurrent update instead of retrying once
    #[arg(long)]
    no_stale_retry: bool,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "info")]
    log_filter: String,
}

impl Args {
    /// Builds the depot configuration from the command line.
    fn depot_config(&self) -> Result<DepotConfig, DomainError> {
        Ok(DepotConfig {
            origin: GeoPoint::new(self.origin_lat, self.origin_lng)?,
            stock_thresholds: StockThresholds::new(self.critical_stock, self.low_stock)?,
            expiry_window_days: self.expiry_window_days,
            retry_on_stale: !self.no_stale_retry,
        })
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    depot: Arc<Depot>,
    /// Audit events of every successful command, in append order.
    audit: Arc<Mutex<AuditLog>>,
    broadcaster: Arc<LiveEventBroadcaster>,
}

impl AppState {
    fn new(depot: Depot) -> Self {
        Self {
            depot: Arc::new(depot),
            audit: Arc::new(Mutex::new(AuditLog::new())),
            broadcaster: Arc::new(LiveEventBroadcaster::new()),
        }
    }
}

impl FromRef<AppState> for Arc<LiveEventBroadcaster> {
    fn from_ref(app_state: &AppState) -> Self {
        Arc::clone(&app_state.broadcaster)
    }
}

/// A command request body: audit attribution plus the command's own fields.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CommandBody<T> {
    /// The actor ID performing this action.
    actor_id: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    #[serde(flatten)]
    request: T,
}

impl<T> CommandBody<T> {
    fn into_parts(self) -> (Actor, Cause, T) {
        (
            Actor::new(self.actor_id, String::from("operator")),
            Cause::new(self.cause_id, self.cause_description),
            self.request,
        )
    }
}

/// API response for write operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CommandResponse<T> {
    success: bool,
    /// The audit event recorded for this command.
    event_id: u64,
    result: T,
}

impl<T> CommandResponse<T> {
    const fn new(event_id: u64, result: T) -> Self {
        Self {
            success: true,
            event_id,
            result,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OrdersQuery {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeliveriesQuery {
    #[serde(default)]
    state: DeliveryFilter,
}

#[derive(Debug, Deserialize)]
struct StockQuery {
    q: Option<String>,
}

/// Serializable representation of an `AuditEvent` for JSON responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AuditEventResponse {
    event_id: Option<u64>,
    actor_id: String,
    actor_type: String,
    cause_id: String,
    cause_description: String,
    action_name: String,
    action_details: Option<String>,
    /// The kind of entity acted on, e.g. "Dispatch order".
    subject_kind: String,
    subject_id: String,
    before_snapshot: String,
    after_snapshot: String,
    recorded_at: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    error: bool,
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::ResourceUnavailable { .. }
            | ApiError::ActionNoLongerValid { .. }
            | ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// JSON body extractor for commands.
///
/// A body that fails to parse is answered with the usual error body rather
/// than axum's plain-text rejection.
struct CommandJson<T>(T);

impl<T> FromRequest<AppState> for CommandJson<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                warn!(
                    status = %rejection.status(),
                    error = %rejection.body_text(),
                    "Rejected command body"
                );
                HttpError {
                    status: rejection.status(),
                    message: rejection.body_text(),
                }
            })?;
        Ok(Self(value))
    }
}

/// Converts an `AuditEvent` to an `AuditEventResponse`.
fn audit_event_to_response(event: &AuditEvent) -> AuditEventResponse {
    AuditEventResponse {
        event_id: event.event_id,
        actor_id: event.actor.id.clone(),
        actor_type: event.actor.actor_type.clone(),
        cause_id: event.cause.id.clone(),
        cause_description: event.cause.description.clone(),
        action_name: event.action.name.clone(),
        action_details: event.action.details.clone(),
        subject_kind: event.subject.kind.as_str().to_string(),
        subject_id: event.subject.id.clone(),
        before_snapshot: event.before.data.clone(),
        after_snapshot: event.after.data.clone(),
        recorded_at: depot_api::format_timestamp(event.recorded_at),
    }
}

type Command<Req, Res> = fn(&Depot, &Req, Actor, Cause) -> Result<ApiResult<Res>, ApiError>;

/// Runs a command and records its audit event.
///
/// Returns the audit event id and the command's response.
async fn execute<Req, Res>(
    app_state: &AppState,
    body: CommandBody<Req>,
    command: Command<Req, Res>,
) -> Result<(u64, Res), HttpError> {
    let (actor, cause, request) = body.into_parts();
    let result: ApiResult<Res> = command(&app_state.depot, &request, actor, cause)?;

    let mut audit = app_state.audit.lock().await;
    let event_id: u64 = audit.append(result.audit_event);
    drop(audit);

    Ok((event_id, result.response))
}

// ============================================================================
// Query handlers
// ============================================================================

async fn handle_list_vehicles(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListVehiclesResponse> {
    Json(depot_api::list_vehicles(&app_state.depot))
}

async fn handle_list_available_vehicles(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListVehiclesResponse> {
    Json(depot_api::list_available_vehicles(&app_state.depot))
}

async fn handle_list_drivers(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListDriversResponse> {
    Json(depot_api::list_drivers(&app_state.depot))
}

async fn handle_list_available_drivers(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListDriversResponse> {
    Json(depot_api::list_available_drivers(&app_state.depot))
}

/// Handler for GET `/orders` endpoint.
///
/// Lists all orders, or only those with `?status=`.
async fn handle_list_orders(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<OrdersQuery>,
) -> Result<Json<ListOrdersResponse>, HttpError> {
    let response: ListOrdersResponse =
        depot_api::list_orders(&app_state.depot, params.status.as_deref())?;
    Ok(Json(response))
}

async fn handle_get_order(
    AxumState(app_state): AxumState<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<OrderInfo>, HttpError> {
    Ok(Json(depot_api::get_order(&app_state.depot, &order_id)?))
}

/// Handler for GET `/deliveries` endpoint.
///
/// `?state=active` or `?state=completed` narrows the list.
async fn handle_list_deliveries(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<DeliveriesQuery>,
) -> Json<ListDeliveriesResponse> {
    Json(depot_api::list_deliveries(&app_state.depot, params.state))
}

async fn handle_get_delivery(
    AxumState(app_state): AxumState<AppState>,
    Path(delivery_id): Path<String>,
) -> Result<Json<DeliveryInfo>, HttpError> {
    Ok(Json(depot_api::get_delivery(&app_state.depot, &delivery_id)?))
}

async fn handle_list_stock(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<StockQuery>,
) -> Json<ListStockResponse> {
    Json(depot_api::list_stock(&app_state.depot, params.q.as_deref()))
}

async fn handle_get_stock_item(
    AxumState(app_state): AxumState<AppState>,
    Path(item_id): Path<u32>,
) -> Result<Json<StockItemInfo>, HttpError> {
    Ok(Json(depot_api::get_stock_item(&app_state.depot, item_id)?))
}

async fn handle_stock_attention(
    AxumState(app_state): AxumState<AppState>,
) -> Json<ListStockResponse> {
    Json(depot_api::stock_attention(&app_state.depot))
}

async fn handle_dashboard(AxumState(app_state): AxumState<AppState>) -> Json<DashboardResponse> {
    Json(depot_api::dashboard(&app_state.depot))
}

/// Handler for GET `/audit` endpoint.
///
/// Returns every recorded audit event in append order.
async fn handle_get_audit_log(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<AuditEventResponse>> {
    let audit = app_state.audit.lock().await;
    let response: Vec<AuditEventResponse> =
        audit.events().iter().map(audit_event_to_response).collect();
    drop(audit);
    Json(response)
}

// ============================================================================
// Order command handlers
// ============================================================================

/// Handler for POST `/orders` endpoint.
async fn handle_create_order(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<CreateOrderRequest>>,
) -> Result<Json<CommandResponse<OrderInfo>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        order_id = %body.request.order_id,
        "Handling create_order request"
    );

    let (event_id, order) = execute(&app_state, body, depot_api::create_order).await?;
    app_state.broadcaster.broadcast(LiveEvent::OrderCreated {
        order_id: order.order_id.clone(),
    });

    Ok(Json(CommandResponse::new(event_id, order)))
}

/// Handler for POST `/orders/assign` endpoint.
///
/// Reserves a vehicle and driver for a pending order.
async fn handle_assign_order(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<AssignResourcesRequest>>,
) -> Result<Json<CommandResponse<OrderInfo>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        order_id = %body.request.order_id,
        vehicle_id = %body.request.vehicle_id,
        driver_id = %body.request.driver_id,
        "Handling assign request"
    );

    let (event_id, order) = execute(&app_state, body, depot_api::assign_resources).await?;
    app_state.broadcaster.broadcast(LiveEvent::OrderAssigned {
        order_id: order.order_id.clone(),
        vehicle_id: order.vehicle_id.clone().unwrap_or_default(),
        driver_id: order.driver_id.clone().unwrap_or_default(),
    });

    Ok(Json(CommandResponse::new(event_id, order)))
}

/// Handler for POST `/orders/dispatch` endpoint.
async fn handle_dispatch_order(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<OrderActionRequest>>,
) -> Result<Json<CommandResponse<DispatchOrderResponse>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        order_id = %body.request.order_id,
        "Handling dispatch request"
    );

    let (event_id, dispatched) = execute(&app_state, body, depot_api::dispatch_order).await?;
    app_state.broadcaster.broadcast(LiveEvent::OrderDispatched {
        order_id: dispatched.order.order_id.clone(),
        delivery_id: dispatched.delivery.delivery_id.clone(),
    });

    Ok(Json(CommandResponse::new(event_id, dispatched)))
}

/// Handler for POST `/orders/cancel` endpoint.
async fn handle_cancel_order(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<OrderActionRequest>>,
) -> Result<Json<CommandResponse<OrderInfo>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        order_id = %body.request.order_id,
        "Handling cancel request"
    );

    let (event_id, order) = execute(&app_state, body, depot_api::cancel_order).await?;
    app_state.broadcaster.broadcast(LiveEvent::OrderCancelled {
        order_id: order.order_id.clone(),
    });

    Ok(Json(CommandResponse::new(event_id, order)))
}

// ============================================================================
// Delivery command handlers
// ============================================================================

/// Handler for POST `/deliveries/progress` endpoint.
async fn handle_record_progress(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<RecordProgressRequest>>,
) -> Result<Json<CommandResponse<DeliveryInfo>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        delivery_id = %body.request.delivery_id,
        progress = body.request.progress,
        "Handling progress report"
    );

    let (event_id, delivery) = execute(&app_state, body, depot_api::record_progress).await?;
    app_state.broadcaster.broadcast(LiveEvent::DeliveryProgress {
        delivery_id: delivery.delivery_id.clone(),
        progress: delivery.progress,
        lat: delivery.current_location.lat,
        lng: delivery.current_location.lng,
    });
    if delivery.completed_at.is_some() {
        app_state.broadcaster.broadcast(LiveEvent::DeliveryCompleted {
            delivery_id: delivery.delivery_id.clone(),
            order_id: delivery.order_id.clone(),
        });
    }

    Ok(Json(CommandResponse::new(event_id, delivery)))
}

/// Handler for POST `/deliveries/alerts` endpoint.
async fn handle_raise_alert(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<RaiseAlertRequest>>,
) -> Result<Json<CommandResponse<AlertResponse>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        delivery_id = %body.request.delivery_id,
        severity = %body.request.severity,
        "Handling raise_alert request"
    );

    let (event_id, raised) = execute(&app_state, body, depot_api::raise_alert).await?;
    app_state.broadcaster.broadcast(LiveEvent::AlertRaised {
        delivery_id: raised.delivery.delivery_id.clone(),
        alert_id: raised.alert.alert_id,
        severity: raised.alert.severity.clone(),
        status: raised.delivery.status.clone(),
    });

    Ok(Json(CommandResponse::new(event_id, raised)))
}

/// Handler for POST `/deliveries/alerts/resolve` endpoint.
async fn handle_resolve_alert(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<ResolveAlertRequest>>,
) -> Result<Json<CommandResponse<AlertResponse>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        delivery_id = %body.request.delivery_id,
        alert_id = body.request.alert_id,
        "Handling resolve_alert request"
    );

    let (event_id, resolved) = execute(&app_state, body, depot_api::resolve_alert).await?;
    app_state.broadcaster.broadcast(LiveEvent::AlertResolved {
        delivery_id: resolved.delivery.delivery_id.clone(),
        alert_id: resolved.alert.alert_id,
        status: resolved.delivery.status.clone(),
    });

    Ok(Json(CommandResponse::new(event_id, resolved)))
}

// ============================================================================
// Stock command handlers
// ============================================================================

fn stock_changed(item: &StockItemInfo, deleted: bool) -> LiveEvent {
    LiveEvent::StockChanged {
        item_id: item.item_id,
        batch_id: item.batch_id.clone(),
        status: (!deleted).then(|| item.status.clone()),
    }
}

/// Handler for POST `/stock` endpoint.
async fn handle_create_stock_item(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<CreateStockItemRequest>>,
) -> Result<Json<CommandResponse<StockItemInfo>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        batch_id = %body.request.batch_id,
        "Handling create_stock_item request"
    );

    let (event_id, item) = execute(&app_state, body, depot_api::create_stock_item).await?;
    app_state.broadcaster.broadcast(stock_changed(&item, false));

    Ok(Json(CommandResponse::new(event_id, item)))
}

/// Handler for POST `/stock/update` endpoint.
async fn handle_update_stock_item(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<UpdateStockItemRequest>>,
) -> Result<Json<CommandResponse<StockItemInfo>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        item_id = body.request.item_id,
        expected_revision = body.request.expected_revision,
        "Handling update_stock_item request"
    );

    let (event_id, item) = execute(&app_state, body, depot_api::update_stock_item).await?;
    app_state.broadcaster.broadcast(stock_changed(&item, false));

    Ok(Json(CommandResponse::new(event_id, item)))
}

/// Handler for POST `/stock/delete` endpoint.
async fn handle_delete_stock_item(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<DeleteStockItemRequest>>,
) -> Result<Json<CommandResponse<StockItemInfo>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        item_id = body.request.item_id,
        "Handling delete_stock_item request"
    );

    let (event_id, item) = execute(&app_state, body, depot_api::delete_stock_item).await?;
    app_state.broadcaster.broadcast(stock_changed(&item, true));

    Ok(Json(CommandResponse::new(event_id, item)))
}

// ============================================================================
// Fleet command handlers
// ============================================================================

async fn vehicle_command(
    app_state: &AppState,
    body: CommandBody<VehicleActionRequest>,
    command: Command<VehicleActionRequest, VehicleInfo>,
) -> Result<Json<CommandResponse<VehicleInfo>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        vehicle_id = %body.request.vehicle_id,
        "Handling vehicle status request"
    );

    let (event_id, vehicle) = execute(app_state, body, command).await?;
    app_state.broadcaster.broadcast(LiveEvent::FleetChanged {
        resource_id: vehicle.vehicle_id.clone(),
        status: vehicle.status.clone(),
    });

    Ok(Json(CommandResponse::new(event_id, vehicle)))
}

async fn driver_command(
    app_state: &AppState,
    body: CommandBody<DriverActionRequest>,
    command: Command<DriverActionRequest, DriverInfo>,
) -> Result<Json<CommandResponse<DriverInfo>>, HttpError> {
    info!(
        actor_id = %body.actor_id,
        driver_id = %body.request.driver_id,
        "Handling driver status request"
    );

    let (event_id, driver) = execute(app_state, body, command).await?;
    app_state.broadcaster.broadcast(LiveEvent::FleetChanged {
        resource_id: driver.driver_id.clone(),
        status: driver.status.clone(),
    });

    Ok(Json(CommandResponse::new(event_id, driver)))
}

/// Handler for POST `/vehicles/maintenance` endpoint.
async fn handle_vehicle_maintenance(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<VehicleActionRequest>>,
) -> Result<Json<CommandResponse<VehicleInfo>>, HttpError> {
    vehicle_command(&app_state, body, depot_api::set_vehicle_in_maintenance).await
}

/// Handler for POST `/vehicles/service` endpoint.
async fn handle_vehicle_service(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<VehicleActionRequest>>,
) -> Result<Json<CommandResponse<VehicleInfo>>, HttpError> {
    vehicle_command(&app_state, body, depot_api::return_vehicle_to_service).await
}

/// Handler for POST `/drivers/leave` endpoint.
async fn handle_driver_leave(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<DriverActionRequest>>,
) -> Result<Json<CommandResponse<DriverInfo>>, HttpError> {
    driver_command(&app_state, body, depot_api::set_driver_on_leave).await
}

/// Handler for POST `/drivers/return` endpoint.
async fn handle_driver_return(
    AxumState(app_state): AxumState<AppState>,
    CommandJson(body): CommandJson<CommandBody<DriverActionRequest>>,
) -> Result<Json<CommandResponse<DriverInfo>>, HttpError> {
    driver_command(&app_state, body, depot_api::return_driver_from_leave).await
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/vehicles", get(handle_list_vehicles))
        .route("/vehicles/available", get(handle_list_available_vehicles))
        .route("/vehicles/maintenance", post(handle_vehicle_maintenance))
        .route("/vehicles/service", post(handle_vehicle_service))
        .route("/drivers", get(handle_list_drivers))
        .route("/drivers/available", get(handle_list_available_drivers))
        .route("/drivers/leave", post(handle_driver_leave))
        .route("/drivers/return", post(handle_driver_return))
        .route("/orders", get(handle_list_orders).post(handle_create_order))
        .route("/orders/{order_id}", get(handle_get_order))
        .route("/orders/assign", post(handle_assign_order))
        .route("/orders/dispatch", post(handle_dispatch_order))
        .route("/orders/cancel", post(handle_cancel_order))
        .route("/deliveries", get(handle_list_deliveries))
        .route("/deliveries/{delivery_id}", get(handle_get_delivery))
        .route("/deliveries/progress", post(handle_record_progress))
        .route("/deliveries/alerts", post(handle_raise_alert))
        .route("/deliveries/alerts/resolve", post(handle_resolve_alert))
        .route("/stock", get(handle_list_stock).post(handle_create_stock_item))
        .route("/stock/attention", get(handle_stock_attention))
        .route("/stock/{item_id}", get(handle_get_stock_item))
        .route("/stock/update", post(handle_update_stock_item))
        .route("/stock/delete", post(handle_delete_stock_item))
        .route("/dashboard", get(handle_dashboard))
        .route("/audit", get(handle_get_audit_log))
        .route("/live", get(live_events_handler))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_filter)),
        )
        .init();

    info!("Initializing Depot Server");

    let config: DepotConfig = args.depot_config()?;
    let depot: Depot = Depot::new(config);
    if args.seed_demo_data {
        seed::load_demo_data(&depot)?;
    }

    let app: Router = build_router(AppState::new(depot));

    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

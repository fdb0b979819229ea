// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_order_request, create_stock_request, create_test_cause, create_test_depot,
    create_test_dispatcher, dispatch_test_order,
};
use crate::{
    ApiError, DeliveryFilter, RaiseAlertRequest, RecordProgressRequest, create_order,
    create_stock_item, dashboard, get_delivery, get_order, list_available_drivers,
    list_available_vehicles, list_deliveries, list_drivers, list_orders, list_stock,
    list_vehicles, raise_alert, record_progress, stock_attention,
};

#[test]
fn test_list_vehicles_and_available_subset() {
    let (depot, _clock) = create_test_depot();

    let all = list_vehicles(&depot);
    let available = list_available_vehicles(&depot);

    assert_eq!(all.vehicles.len(), 4);
    assert_eq!(all.vehicles[0].capacity, "5 tons");
    assert_eq!(all.vehicles[0].capacity_kg, 5000);
    assert_eq!(available.vehicles.len(), 3);
    assert!(available.vehicles.iter().all(|v| v.status == "Available"));
}

#[test]
fn test_list_drivers() {
    let (depot, _clock) = create_test_depot();
    dispatch_test_order(&depot, "DO-1001", "V-001", "D-001");

    assert_eq!(list_drivers(&depot).drivers.len(), 3);
    let available: Vec<String> = list_available_drivers(&depot)
        .drivers
        .into_iter()
        .map(|d| d.driver_id)
        .collect();
    assert_eq!(available, vec![String::from("D-002"), String::from("D-003")]);
}

#[test]
fn test_list_orders_by_status() {
    let (depot, _clock) = create_test_depot();
    dispatch_test_order(&depot, "DO-1001", "V-001", "D-001");
    create_order(
        &depot,
        &create_order_request("DO-1002"),
        create_test_dispatcher(),
        create_test_cause(),
    )
    .unwrap();

    let pending = list_orders(&depot, Some("Pending")).unwrap();
    let all = list_orders(&depot, None).unwrap();

    assert_eq!(pending.orders.len(), 1);
    assert_eq!(pending.orders[0].order_id, "DO-1002");
    assert_eq!(all.orders.len(), 2);
}

#[test]
fn test_list_orders_with_unknown_status_is_invalid_input() {
    let (depot, _clock) = create_test_depot();

    let result = list_orders(&depot, Some("Lost"));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "status"
    ));
}

#[test]
fn test_get_order_is_case_insensitive_on_id() {
    let (depot, _clock) = create_test_depot();
    create_order(
        &depot,
        &create_order_request("DO-1001"),
        create_test_dispatcher(),
        create_test_cause(),
    )
    .unwrap();

    let order = get_order(&depot, " do-1001 ").unwrap();

    assert_eq!(order.order_id, "DO-1001");
    assert_eq!(order.items.len(), 2);
}

#[test]
fn test_get_unknown_order_names_the_id() {
    let (depot, _clock) = create_test_depot();

    let err = get_order(&depot, "DO-4040").unwrap_err();

    assert_eq!(
        err.to_string(),
        "Dispatch order not found: Dispatch order 'DO-4040' does not exist"
    );
}

#[test]
fn test_list_deliveries_filters() {
    let (depot, _clock) = create_test_depot();
    let first: String = dispatch_test_order(&depot, "DO-1001", "V-001", "D-001");
    dispatch_test_order(&depot, "DO-1002", "V-002", "D-002");
    record_progress(
        &depot,
        &RecordProgressRequest {
            delivery_id: first.clone(),
            progress: 100,
            lat: 34.1,
            lng: -118.3,
        },
        create_test_dispatcher(),
        create_test_cause(),
    )
    .unwrap();

    assert_eq!(list_deliveries(&depot, DeliveryFilter::All).deliveries.len(), 2);
    let active = list_deliveries(&depot, DeliveryFilter::Active);
    assert_eq!(active.deliveries.len(), 1);
    assert_eq!(active.deliveries[0].order_id, "DO-1002");
    let completed = list_deliveries(&depot, DeliveryFilter::Completed);
    assert_eq!(completed.deliveries[0].delivery_id, first);
}

#[test]
fn test_get_delivery() {
    let (depot, _clock) = create_test_depot();
    let delivery_id: String = dispatch_test_order(&depot, "DO-1001", "V-001", "D-001");

    let delivery = get_delivery(&depot, &delivery_id).unwrap();

    assert_eq!(delivery.delivery_id, "DEL-1000");
    assert_eq!(delivery.route.len(), 1);
    assert!(matches!(
        get_delivery(&depot, "DEL-0001"),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_list_stock_search_and_attention() {
    let (depot, _clock) = create_test_depot();
    for (batch, quantity, expiry) in [
        ("B-7829", 450, "2026-12-31"),
        ("B-7830", 80, "2026-12-31"),
        ("B-7831", 500, "2025-07-01"),
    ] {
        create_stock_item(
            &depot,
            &create_stock_request(batch, quantity, expiry),
            create_test_dispatcher(),
            create_test_cause(),
        )
        .unwrap();
    }

    assert_eq!(list_stock(&depot, None).items.len(), 3);
    assert_eq!(list_stock(&depot, Some("b-7830")).items.len(), 1);
    assert_eq!(list_stock(&depot, Some("grains")).items.len(), 3);

    let attention: Vec<String> = stock_attention(&depot)
        .items
        .into_iter()
        .map(|item| item.batch_id)
        .collect();
    assert_eq!(attention, vec![String::from("B-7830"), String::from("B-7831")]);
}

#[test]
fn test_dashboard_counts() {
    let (depot, _clock) = create_test_depot();
    let delivery_id: String = dispatch_test_order(&depot, "DO-1001", "V-001", "D-001");
    create_order(
        &depot,
        &create_order_request("DO-1002"),
        create_test_dispatcher(),
        create_test_cause(),
    )
    .unwrap();
    raise_alert(
        &depot,
        &RaiseAlertRequest {
            delivery_id,
            alert_type: String::from("Weather"),
            message: String::from("Heavy rain"),
            severity: String::from("Medium"),
        },
        create_test_dispatcher(),
        create_test_cause(),
    )
    .unwrap();
    create_stock_item(
        &depot,
        &create_stock_request("B-7830", 25, "2026-12-31"),
        create_test_dispatcher(),
        create_test_cause(),
    )
    .unwrap();

    let overview = dashboard(&depot);

    assert_eq!(overview.orders.pending, 1);
    assert_eq!(overview.orders.dispatched, 1);
    assert_eq!(overview.orders.delivered, 0);
    assert_eq!(overview.active_deliveries, 1);
    assert_eq!(overview.deliveries_with_alerts, 1);
    assert_eq!(overview.available_vehicles, 2);
    assert_eq!(overview.available_drivers, 2);
    assert_eq!(overview.stock.total_items, 1);
    assert_eq!(overview.stock.critical_stock, 1);
}

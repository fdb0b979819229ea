// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, translate_core_error, translate_domain_error};
use depot::CoreError;
use depot_domain::{DeliveryId, DomainError, EntityKind, OrderId, OrderStatus};

#[test]
fn test_stale_state_asks_caller_to_refresh() {
    let err = translate_core_error(CoreError::StaleState {
        kind: EntityKind::Order,
        id: String::from("DO-1001"),
        expected: String::from("Pending"),
        actual: String::from("Assigned"),
    });

    match err {
        ApiError::ActionNoLongerValid { message } => {
            assert!(message.contains("refresh and retry"));
            assert!(!message.contains("Assigned"));
        }
        other => panic!("expected ActionNoLongerValid, got {other:?}"),
    }
}

#[test]
fn test_order_state_errors_are_no_longer_valid() {
    let err = translate_core_error(CoreError::OrderNotCancelable {
        order_id: OrderId::new("DO-1001"),
        status: OrderStatus::Dispatched,
    });

    assert_eq!(
        err.to_string(),
        "Dispatch order 'DO-1001' is Dispatched; this action is no longer valid, refresh and retry"
    );
}

#[test]
fn test_resource_unavailable_names_resource() {
    let err = translate_core_error(CoreError::ResourceUnavailable {
        kind: EntityKind::Driver,
        id: String::from("D-003"),
        status: String::from("OnLeave"),
    });

    assert_eq!(
        err,
        ApiError::ResourceUnavailable {
            resource_type: String::from("Driver"),
            message: String::from("Driver 'D-003' is OnLeave; please select an available resource"),
        }
    );
}

#[test]
fn test_completed_delivery_is_conflict() {
    let err = translate_core_error(CoreError::DeliveryCompleted {
        delivery_id: DeliveryId::new("DEL-1000"),
    });

    assert!(matches!(err, ApiError::Conflict { .. }));
}

#[test]
fn test_invariant_violation_is_internal() {
    let err = translate_core_error(CoreError::InvariantViolation {
        reason: String::from("vehicle held twice"),
    });

    assert_eq!(err.to_string(), "Internal error: vehicle held twice");
}

#[test]
fn test_empty_field_names_the_field() {
    let err = translate_domain_error(DomainError::EmptyField {
        field: "destination",
    });

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("destination"),
            message: String::from("must not be empty"),
        }
    );
}

#[test]
fn test_wrapped_domain_error_is_translated() {
    let err = translate_core_error(CoreError::DomainViolation(DomainError::ProgressRegression {
        current: 60,
        requested: 40,
    }));

    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "monotonic_progress"
    ));
}

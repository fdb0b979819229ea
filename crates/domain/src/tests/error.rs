// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::EmptyField { field: "address" };
    assert_eq!(format!("{err}"), "Field 'address' cannot be empty");

    let err: DomainError = DomainError::InvalidQuantity {
        context: String::from("B-7829"),
        quantity: -3,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid quantity -3 for 'B-7829': must be greater than 0"
    );

    let err: DomainError = DomainError::NoLineItems {
        order_id: String::from("DO-1001"),
    };
    assert_eq!(
        format!("{err}"),
        "Dispatch order 'DO-1001' must contain at least one item"
    );

    let err: DomainError = DomainError::InvalidProgress { progress: 120 };
    assert_eq!(
        format!("{err}"),
        "Invalid progress 120%: must be between 0 and 100"
    );

    let err: DomainError = DomainError::ProgressRegression {
        current: 65,
        requested: 40,
    };
    assert_eq!(format!("{err}"), "Progress cannot decrease from 65% to 40%");

    let err: DomainError = DomainError::InvalidStatusTransition {
        from: String::from("Pending"),
        to: String::from("Dispatched"),
    };
    assert_eq!(
        format!("{err}"),
        "Cannot transition order from Pending to Dispatched"
    );

    let err: DomainError = DomainError::InvalidPriority(String::from("Urgent"));
    assert_eq!(format!("{err}"), "Invalid priority: 'Urgent'");
}

#[test]
fn test_domain_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(DomainError::InvalidThresholds {
        critical: 200,
        low: 100,
    });
    assert_eq!(
        err.to_string(),
        "Critical stock threshold (200) must be below the low stock threshold (100)"
    );
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use depot::{CoreError, Depot, DepotConfig};
use depot_domain::EntityKind;

use crate::handlers::with_stale_retry;

fn depot(retry_on_stale: bool) -> Depot {
    Depot::new(DepotConfig {
        retry_on_stale,
        ..DepotConfig::default()
    })
}

fn stale() -> CoreError {
    CoreError::StaleState {
        kind: EntityKind::Order,
        id: String::from("DO-1001"),
        expected: String::from("Pending"),
        actual: String::from("Assigned"),
    }
}

#[test]
fn test_stale_attempt_is_retried_once() {
    let depot: Depot = depot(true);
    let mut calls: u32 = 0;

    let result = with_stale_retry(&depot, || {
        calls += 1;
        if calls == 1 { Err(stale()) } else { Ok(calls) }
    });

    assert_eq!(result, Ok(2));
    assert_eq!(calls, 2);
}

#[test]
fn test_second_stale_attempt_is_returned() {
    let depot: Depot = depot(true);
    let mut calls: u32 = 0;

    let result: Result<(), CoreError> = with_stale_retry(&depot, || {
        calls += 1;
        Err(stale())
    });

    assert_eq!(result, Err(stale()));
    assert_eq!(calls, 2);
}

#[test]
fn test_stale_attempt_is_not_retried_when_disabled() {
    let depot: Depot = depot(false);
    let mut calls: u32 = 0;

    let result: Result<(), CoreError> = with_stale_retry(&depot, || {
        calls += 1;
        Err(stale())
    });

    assert_eq!(result, Err(stale()));
    assert_eq!(calls, 1);
}

#[test]
fn test_other_errors_are_not_retried() {
    let depot: Depot = depot(true);
    let mut calls: u32 = 0;

    let result: Result<(), CoreError> = with_stale_retry(&depot, || {
        calls += 1;
        Err(CoreError::NotFound {
            kind: EntityKind::Order,
            id: String::from("DO-9999"),
        })
    });

    assert!(matches!(result, Err(CoreError::NotFound { .. })));
    assert_eq!(calls, 1);
}

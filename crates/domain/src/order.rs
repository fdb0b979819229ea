// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::ids::{DriverId, OrderId, VehicleId};
use crate::order_status::{OrderStatus, Priority};
use crate::validation::{validate_non_empty, validate_quantity};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// One product line on a dispatch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub batch_id: String,
    pub product_name: String,
    /// Always greater than zero.
    pub quantity: u32,
}

/// An unvalidated line item as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLineItem {
    pub batch_id: String,
    pub product_name: String,
    pub quantity: i64,
}

impl NewLineItem {
    /// Validates the line item.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch id or product name is blank, or the
    /// quantity is not positive.
    pub fn validate(self) -> Result<LineItem, DomainError> {
        let batch_id: String = validate_non_empty("batch_id", &self.batch_id)?;
        let product_name: String = validate_non_empty("product_name", &self.product_name)?;
        let quantity: u32 = validate_quantity(&batch_id, self.quantity)?;
        Ok(LineItem {
            batch_id,
            product_name,
            quantity,
        })
    }
}

/// An unvalidated dispatch order as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDispatchOrder {
    pub id: OrderId,
    pub destination: String,
    pub address: String,
    pub items: Vec<NewLineItem>,
    pub scheduled_date: Date,
    pub priority: Priority,
}

impl NewDispatchOrder {
    /// Validates the order and produces a `Pending` dispatch order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The identifier, destination or address is blank
    /// - There are no line items
    /// - Any line item is invalid
    pub fn validate(self) -> Result<DispatchOrder, DomainError> {
        if self.id.is_empty() {
            return Err(DomainError::EmptyField { field: "id" });
        }
        let destination: String = validate_non_empty("destination", &self.destination)?;
        let address: String = validate_non_empty("address", &self.address)?;
        if self.items.is_empty() {
            return Err(DomainError::NoLineItems {
                order_id: self.id.value().to_string(),
            });
        }
        let items: Vec<LineItem> = self
            .items
            .into_iter()
            .map(NewLineItem::validate)
            .collect::<Result<_, _>>()?;

        Ok(DispatchOrder {
            id: self.id,
            destination,
            address,
            items,
            scheduled_date: self.scheduled_date,
            priority: self.priority,
            status: OrderStatus::Pending,
            vehicle: None,
            driver: None,
            assigned_at: None,
            dispatched_at: None,
            delivered_at: None,
            cancelled_at: None,
        })
    }
}

/// A delivery request moving through the dispatch lifecycle.
///
/// `vehicle` and `driver` are set if and only if the status is `Assigned`,
/// `Dispatched` or `Delivered`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchOrder {
    pub id: OrderId,
    pub destination: String,
    pub address: String,
    pub items: Vec<LineItem>,
    pub scheduled_date: Date,
    pub priority: Priority,
    pub status: OrderStatus,
    pub vehicle: Option<VehicleId>,
    pub driver: Option<DriverId>,
    pub assigned_at: Option<OffsetDateTime>,
    pub dispatched_at: Option<OffsetDateTime>,
    pub delivered_at: Option<OffsetDateTime>,
    pub cancelled_at: Option<OffsetDateTime>,
}

impl DispatchOrder {
    /// Returns true if the resource references agree with the status.
    #[must_use]
    pub const fn references_consistent(&self) -> bool {
        let holds: bool = self.status.holds_resources();
        self.vehicle.is_some() == holds && self.driver.is_some() == holds
    }

    /// Returns the assigned vehicle and driver, if any.
    #[must_use]
    pub fn resources(&self) -> Option<(&VehicleId, &DriverId)> {
        self.vehicle.as_ref().zip(self.driver.as_ref())
    }

    /// Total units across all line items.
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}

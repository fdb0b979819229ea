// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Warehouse stock items and quantity-derived stock levels.

use crate::error::DomainError;
use crate::ids::StockItemId;
use crate::validation::{validate_non_empty, validate_quantity};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Duration};

/// Stock level derived from an item's quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    InStock,
    LowStock,
    CriticalStock,
}

impl StockStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InStock => "InStock",
            Self::LowStock => "LowStock",
            Self::CriticalStock => "CriticalStock",
        }
    }

    /// Returns true for levels that need restocking attention.
    #[must_use]
    pub const fn needs_attention(&self) -> bool {
        matches!(self, Self::LowStock | Self::CriticalStock)
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "InStock" | "In Stock" => Ok(Self::InStock),
            "LowStock" | "Low Stock" => Ok(Self::LowStock),
            "CriticalStock" | "Critical Stock" => Ok(Self::CriticalStock),
            other => Err(DomainError::InvalidStockStatus(other.to_string())),
        }
    }
}

/// Quantity thresholds that classify stock levels.
///
/// An item is critical at or below `critical` units, low at or below `low`
/// units, and in stock above that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockThresholds {
    critical: u32,
    low: u32,
}

impl StockThresholds {
    pub const DEFAULT_CRITICAL: u32 = 30;
    pub const DEFAULT_LOW: u32 = 120;

    /// Creates thresholds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidThresholds` unless `critical < low`.
    pub const fn new(critical: u32, low: u32) -> Result<Self, DomainError> {
        if critical >= low {
            return Err(DomainError::InvalidThresholds { critical, low });
        }
        Ok(Self { critical, low })
    }

    #[must_use]
    pub const fn critical(&self) -> u32 {
        self.critical
    }

    #[must_use]
    pub const fn low(&self) -> u32 {
        self.low
    }

    /// Classifies a quantity.
    #[must_use]
    pub const fn classify(&self, quantity: u32) -> StockStatus {
        if quantity <= self.critical {
            StockStatus::CriticalStock
        } else if quantity <= self.low {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

impl Default for StockThresholds {
    fn default() -> Self {
        Self {
            critical: Self::DEFAULT_CRITICAL,
            low: Self::DEFAULT_LOW,
        }
    }
}

/// A batch of product held in the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: StockItemId,
    pub batch_id: String,
    pub product_name: String,
    pub category: String,
    /// Always greater than zero.
    pub quantity: u32,
    pub expiry_date: Date,
    pub location: String,
    /// Derived from `quantity`; never taken from caller input.
    pub status: StockStatus,
    /// Incremented on every update; used for compare-and-swap.
    pub revision: u64,
}

impl StockItem {
    /// Returns true if the item expires before `today + window_days`.
    #[must_use]
    pub fn expires_within(&self, today: Date, window_days: u32) -> bool {
        today
            .checked_add(Duration::days(i64::from(window_days)))
            .is_none_or(|horizon| self.expiry_date < horizon)
    }
}

/// An unvalidated stock item as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStockItem {
    pub batch_id: String,
    pub product_name: String,
    pub category: String,
    pub quantity: i64,
    pub expiry_date: Date,
    pub location: String,
}

impl NewStockItem {
    /// Validates the item and assigns it an identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if a text field is blank or the quantity is not positive.
    pub fn validate(
        self,
        id: StockItemId,
        thresholds: &StockThresholds,
    ) -> Result<StockItem, DomainError> {
        let batch_id: String = validate_non_empty("batch_id", &self.batch_id)?;
        let product_name: String = validate_non_empty("product_name", &self.product_name)?;
        let category: String = validate_non_empty("category", &self.category)?;
        let location: String = validate_non_empty("location", &self.location)?;
        let quantity: u32 = validate_quantity(&batch_id, self.quantity)?;

        Ok(StockItem {
            id,
            batch_id,
            product_name,
            category,
            quantity,
            expiry_date: self.expiry_date,
            location,
            status: thresholds.classify(quantity),
            revision: 0,
        })
    }
}

/// A partial update to a stock item. `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StockUpdate {
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub expiry_date: Option<Date>,
    pub location: Option<String>,
}

impl StockUpdate {
    /// Applies the update to a copy of `item`, re-deriving its status and
    /// bumping its revision.
    ///
    /// # Errors
    ///
    /// Returns an error if an updated text field is blank or the updated
    /// quantity is not positive. `item` is never modified.
    pub fn apply_to(
        self,
        item: &StockItem,
        thresholds: &StockThresholds,
    ) -> Result<StockItem, DomainError> {
        let mut updated: StockItem = item.clone();
        if let Some(product_name) = self.product_name {
            updated.product_name = validate_non_empty("product_name", &product_name)?;
        }
        if let Some(category) = self.category {
            updated.category = validate_non_empty("category", &category)?;
        }
        if let Some(location) = self.location {
            updated.location = validate_non_empty("location", &location)?;
        }
        if let Some(quantity) = self.quantity {
            updated.quantity = validate_quantity(&updated.batch_id, quantity)?;
        }
        if let Some(expiry_date) = self.expiry_date {
            updated.expiry_date = expiry_date;
        }
        updated.status = thresholds.classify(updated.quantity);
        updated.revision = item.revision + 1;
        Ok(updated)
    }
}

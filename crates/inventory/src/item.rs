use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use eventdesk_core::{DomainError, DomainResult, Entity, InventoryItemId, Money};

/// Stock availability of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    Available,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Derive status from stock on hand.
    ///
    /// Zero is out of stock; at or below `min_threshold` is low stock.
    pub fn derive(quantity: u32, min_threshold: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= min_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::Available
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Available => "available",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    pub fn needs_attention(&self) -> bool {
        !matches!(self, StockStatus::Available)
    }
}

impl core::str::FromStr for StockStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(StockStatus::Available),
            "low-stock" => Ok(StockStatus::LowStock),
            "out-of-stock" => Ok(StockStatus::OutOfStock),
            other => Err(DomainError::validation(format!(
                "unknown stock status '{other}' (expected available, low-stock, out-of-stock)"
            ))),
        }
    }
}

/// An inventory line: one kind of item held in one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub min_threshold: u32,
    pub location: String,
    pub unit: String,
    pub cost_per_unit: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    pub status: StockStatus,
    pub last_updated: NaiveDate,
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;
    const KIND: &'static str = "inventory item";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl InventoryItem {
    pub fn from_new(id: InventoryItemId, new: NewInventoryItem, today: NaiveDate) -> Self {
        let status = StockStatus::derive(new.quantity, new.min_threshold);
        Self {
            id,
            name: new.name,
            category: new.category,
            quantity: new.quantity,
            min_threshold: new.min_threshold,
            location: new.location,
            unit: new.unit,
            cost_per_unit: new.cost_per_unit,
            supplier: new.supplier,
            status,
            last_updated: today,
        }
    }

    /// Stock value: quantity × cost per unit.
    pub fn value(&self) -> Money {
        self.cost_per_unit.times(self.quantity)
    }

    /// Re-derive `status` from the current quantity and threshold.
    pub fn refresh_status(&mut self) {
        self.status = StockStatus::derive(self.quantity, self.min_threshold);
    }
}

/// Input for adding an item.
///
/// `status` and `last_updated` are not accepted: both are derived on write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    #[serde(default)]
    pub min_threshold: u32,
    #[serde(default)]
    pub location: String,
    pub unit: String,
    pub cost_per_unit: Money,
    #[serde(default)]
    pub supplier: Option<String>,
}

impl NewInventoryItem {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.unit.trim().is_empty() {
            return Err(DomainError::validation("unit cannot be empty"));
        }
        Ok(())
    }
}

/// Partial update for an inventory item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub min_threshold: Option<u32>,
    pub location: Option<String>,
    pub unit: Option<String>,
    pub cost_per_unit: Option<Money>,
    pub supplier: Option<Option<String>>,
}

impl InventoryPatch {
    pub fn validate(&self) -> DomainResult<()> {
        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if matches!(&self.unit, Some(unit) if unit.trim().is_empty()) {
            return Err(DomainError::validation("unit cannot be empty"));
        }
        Ok(())
    }

    /// Merge into `item`, stamp `last_updated` and re-derive status.
    pub fn apply_to(self, item: &mut InventoryItem, today: NaiveDate) {
        if let Some(v) = self.name {
            item.name = v;
        }
        if let Some(v) = self.category {
            item.category = v;
        }
        if let Some(v) = self.quantity {
            item.quantity = v;
        }
        if let Some(v) = self.min_threshold {
            item.min_threshold = v;
        }
        if let Some(v) = self.location {
            item.location = v;
        }
        if let Some(v) = self.unit {
            item.unit = v;
        }
        if let Some(v) = self.cost_per_unit {
            item.cost_per_unit = v;
        }
        if let Some(v) = self.supplier {
            item.supplier = v;
        }
        item.last_updated = today;
        item.refresh_status();
    }
}

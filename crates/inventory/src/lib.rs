//! Inventory domain module.
//!
//! Equipment and supplies on hand for events (chairs, AV gear, linens), with
//! stock status derived from quantity against a per-item threshold. Pure
//! domain logic: no IO, no storage.

pub mod item;

pub use item::{InventoryItem, InventoryPatch, NewInventoryItem, StockStatus};

//! `vending-core` — domain building blocks for the vending machine.
//!
//! This crate contains **pure domain** primitives (no IO, no resource loading).

pub mod error;
pub mod item;
pub mod machine;
pub mod selection;
pub mod value_object;

pub use error::{InventoryError, InventoryResult, VendingError, VendingResult};
pub use item::{Inventory, Item, VendingItem};
pub use machine::VendingMachine;
pub use selection::VendingSelection;
pub use value_object::ValueObject;

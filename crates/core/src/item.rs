use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{InventoryError, InventoryResult};
use crate::selection::VendingSelection;
use crate::value_object::ValueObject;

/// Full selection -> item mapping for one machine.
pub type Inventory = BTreeMap<VendingSelection, Item>;

/// Read access to a stocked product.
pub trait VendingItem {
    fn price(&self) -> f64;

    fn quantity(&self) -> u32;
}

/// Stocked product record: fixed unit price, remaining quantity.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Item {
    price: f64,
    quantity: u32,
}

impl Item {
    pub fn new(price: f64, quantity: u32) -> InventoryResult<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(InventoryError::conversion(format!("invalid price: {price}")));
        }
        Ok(Self { price, quantity })
    }

    /// Copy of this item with `quantity` units removed.
    ///
    /// Returns `None` when fewer than `quantity` units remain.
    pub fn take(&self, quantity: u32) -> Option<Self> {
        Some(Self {
            price: self.price,
            quantity: self.quantity.checked_sub(quantity)?,
        })
    }
}

impl VendingItem for Item {
    fn price(&self) -> f64 {
        self.price
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl ValueObject for Item {}

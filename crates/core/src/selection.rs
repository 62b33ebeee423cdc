//! The closed set of products a machine can dispense.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Product identifier.
///
/// Serialized as its record key (lowerCamelCase), which is also the asset name
/// used for the product's icon.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VendingSelection {
    Soda,
    DietSoda,
    Chips,
    Cookie,
    Sandwich,
    Wrap,
    CandyBar,
    PopTart,
    Water,
    FruitJuice,
    SportsDrink,
    Gum,
}

impl VendingSelection {
    /// Every selection, in display order.
    pub const ALL: [VendingSelection; 12] = [
        VendingSelection::Soda,
        VendingSelection::DietSoda,
        VendingSelection::Chips,
        VendingSelection::Cookie,
        VendingSelection::Sandwich,
        VendingSelection::Wrap,
        VendingSelection::CandyBar,
        VendingSelection::PopTart,
        VendingSelection::Water,
        VendingSelection::FruitJuice,
        VendingSelection::SportsDrink,
        VendingSelection::Gum,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            VendingSelection::Soda => "soda",
            VendingSelection::DietSoda => "dietSoda",
            VendingSelection::Chips => "chips",
            VendingSelection::Cookie => "cookie",
            VendingSelection::Sandwich => "sandwich",
            VendingSelection::Wrap => "wrap",
            VendingSelection::CandyBar => "candyBar",
            VendingSelection::PopTart => "popTart",
            VendingSelection::Water => "water",
            VendingSelection::FruitJuice => "fruitJuice",
            VendingSelection::SportsDrink => "sportsDrink",
            VendingSelection::Gum => "gum",
        }
    }
}

impl core::fmt::Display for VendingSelection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_key())
    }
}

impl FromStr for VendingSelection {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|selection| selection.as_key() == s)
            .ok_or_else(|| InventoryError::invalid_selection(s))
    }
}

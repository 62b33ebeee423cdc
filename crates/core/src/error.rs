//! Domain error model.
//!
//! Two independent families: failures while stocking a machine from an
//! external record, and failures of a single vend/deposit transaction.

use thiserror::Error;

use crate::selection::VendingSelection;

/// Result type used while building an inventory.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Result type used by machine operations.
pub type VendingResult<T> = Result<T, VendingError>;

/// Error raised while constructing an inventory from an external source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The named source record does not exist.
    #[error("invalid resource: {0}")]
    InvalidResource(String),

    /// The source record exists but is not shaped as a key -> object mapping.
    #[error("conversion failure: {0}")]
    ConversionFailure(String),

    /// A key does not name any known selection.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

impl InventoryError {
    pub fn invalid_resource(msg: impl Into<String>) -> Self {
        Self::InvalidResource(msg.into())
    }

    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::ConversionFailure(msg.into())
    }

    pub fn invalid_selection(key: impl Into<String>) -> Self {
        Self::InvalidSelection(key.into())
    }
}

/// Error raised by a vend or deposit.
///
/// A machine that returns one of these is left exactly as it was before the call.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VendingError {
    /// The selection is not stocked in this machine.
    #[error("invalid selection: {0}")]
    InvalidSelection(VendingSelection),

    #[error("out of stock: {selection} (requested {requested}, available {available})")]
    OutOfStock {
        selection: VendingSelection,
        requested: u32,
        available: u32,
    },

    /// `required` is the shortfall, not the total price.
    #[error("insufficient funds: {required:.2} more required")]
    InsufficientFunds { required: f64 },

    /// Negative or non-finite deposit amount.
    #[error("invalid deposit amount: {0}")]
    InvalidDeposit(f64),
}

impl VendingError {
    pub fn insufficient_funds(required: f64) -> Self {
        Self::InsufficientFunds { required }
    }

    /// Shortfall carried by an `InsufficientFunds` error.
    pub fn required(&self) -> Option<f64> {
        match self {
            Self::InsufficientFunds { required } => Some(*required),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_funds_formats_shortfall() {
        let err = VendingError::insufficient_funds(2.0);
        assert_eq!(err.to_string(), "insufficient funds: 2.00 more required");
        assert_eq!(err.required(), Some(2.0));
    }

    #[test]
    fn out_of_stock_names_selection() {
        let err = VendingError::OutOfStock {
            selection: VendingSelection::Soda,
            requested: 3,
            available: 2,
        };
        assert_eq!(err.to_string(), "out of stock: soda (requested 3, available 2)");
        assert_eq!(err.required(), None);
    }

    #[test]
    fn inventory_error_messages() {
        assert_eq!(
            InventoryError::invalid_selection("tea").to_string(),
            "invalid selection: tea"
        );
        assert_eq!(
            InventoryError::invalid_resource("vendingInventory.json").to_string(),
            "invalid resource: vendingInventory.json"
        );
    }
}

use vending_core::{
    Inventory, Item, VendingError, VendingItem, VendingMachine, VendingResult, VendingSelection,
};

use crate::config::MachineConfig;

/// The snack machine: all twelve selections, pre-funded balance.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodVendingMachine {
    inventory: Inventory,
    amount_deposited: f64,
}

impl FoodVendingMachine {
    /// Take ownership of `inventory`, starting from the default balance.
    pub fn new(inventory: Inventory) -> Self {
        Self::with_config(inventory, &MachineConfig::default())
    }

    pub fn with_config(inventory: Inventory, config: &MachineConfig) -> Self {
        Self {
            inventory,
            amount_deposited: config.starting_balance,
        }
    }

    /// Decide the outcome of a vend without touching state.
    fn check_vend(
        &self,
        selection: VendingSelection,
        quantity: u32,
    ) -> VendingResult<(Item, f64)> {
        let item = self
            .inventory
            .get(&selection)
            .ok_or(VendingError::InvalidSelection(selection))?;

        // Stock is checked strictly before funds.
        let remaining = item.take(quantity).ok_or(VendingError::OutOfStock {
            selection,
            requested: quantity,
            available: item.quantity(),
        })?;

        let total_price = item.price() * f64::from(quantity);
        if self.amount_deposited >= total_price {
            Ok((remaining, total_price))
        } else {
            Err(VendingError::insufficient_funds(
                total_price - self.amount_deposited,
            ))
        }
    }
}

impl VendingMachine for FoodVendingMachine {
    fn selection(&self) -> &[VendingSelection] {
        &VendingSelection::ALL
    }

    fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    fn amount_deposited(&self) -> f64 {
        self.amount_deposited
    }

    fn vend(&mut self, selection: VendingSelection, quantity: u32) -> VendingResult<()> {
        let (remaining, total_price) = self.check_vend(selection, quantity)?;

        self.amount_deposited -= total_price;
        self.inventory.insert(selection, remaining);

        tracing::debug!(
            %selection,
            quantity,
            total_price,
            remaining = remaining.quantity(),
            balance = self.amount_deposited,
            "vended"
        );
        Ok(())
    }

    fn deposit(&mut self, amount: f64) -> VendingResult<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(VendingError::InvalidDeposit(amount));
        }
        self.amount_deposited += amount;

        tracing::debug!(amount, balance = self.amount_deposited, "deposited");
        Ok(())
    }
}

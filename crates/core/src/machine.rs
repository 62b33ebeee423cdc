//! Machine contract shared by every vending machine variant.

use crate::error::VendingResult;
use crate::item::{Inventory, Item};
use crate::selection::VendingSelection;

/// A vending machine: the single transactional authority over stock and
/// deposited balance for one session.
///
/// Implementations differ in starting balance or validation rules; callers
/// only talk to this interface.
///
/// - `vend` and `deposit` either commit fully or return an error and leave the
///   machine untouched.
/// - No other operation mutates the machine.
pub trait VendingMachine {
    /// Selections this machine offers, in display order.
    fn selection(&self) -> &[VendingSelection];

    fn inventory(&self) -> &Inventory;

    /// Balance currently deposited by the session.
    fn amount_deposited(&self) -> f64;

    /// Dispense `quantity` units of `selection`, debiting stock and balance.
    fn vend(&mut self, selection: VendingSelection, quantity: u32) -> VendingResult<()>;

    fn deposit(&mut self, amount: f64) -> VendingResult<()>;

    /// Snapshot of the stocked item, if this machine ever stocked `selection`.
    fn item_for_selection(&self, selection: VendingSelection) -> Option<Item> {
        self.inventory().get(&selection).copied()
    }
}

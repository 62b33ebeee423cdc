//! Drives a machine through the `VendingMachine` contract only, the way a
//! presentation layer would.

use vending_core::{Inventory, Item, VendingError, VendingItem, VendingMachine, VendingSelection};
use vending_machine::{FoodVendingMachine, MachineConfig};

fn full_inventory() -> Inventory {
    VendingSelection::ALL
        .into_iter()
        .enumerate()
        .map(|(i, selection)| {
            let price = 1.0 + i as f64 * 0.25;
            (selection, Item::new(price, 4).unwrap())
        })
        .collect()
}

fn total_stock(machine: &dyn VendingMachine) -> u32 {
    machine.inventory().values().map(|item| item.quantity()).sum()
}

#[test]
fn session_through_trait_object() {
    let mut machine: Box<dyn VendingMachine> = Box::new(FoodVendingMachine::new(full_inventory()));
    assert_eq!(machine.selection().len(), 12);
    assert_eq!(total_stock(machine.as_ref()), 48);

    // soda 1.00, chips 1.50
    machine.vend(VendingSelection::Soda, 2).unwrap();
    machine.vend(VendingSelection::Chips, 4).unwrap();
    assert_eq!(machine.amount_deposited(), 2.0);
    assert_eq!(total_stock(machine.as_ref()), 42);

    let err = machine.vend(VendingSelection::Chips, 1).unwrap_err();
    assert!(matches!(err, VendingError::OutOfStock { available: 0, .. }));

    // gum costs 3.75
    let err = machine.vend(VendingSelection::Gum, 1).unwrap_err();
    assert_eq!(err.required(), Some(1.75));

    machine.deposit(1.75).unwrap();
    machine.vend(VendingSelection::Gum, 1).unwrap();
    assert_eq!(machine.amount_deposited(), 0.0);
    assert_eq!(
        machine.item_for_selection(VendingSelection::Gum).map(|i| i.quantity()),
        Some(3)
    );
}

#[test]
fn machine_variants_share_callers() {
    let machines: Vec<Box<dyn VendingMachine>> = vec![
        Box::new(FoodVendingMachine::new(full_inventory())),
        Box::new(FoodVendingMachine::with_config(
            full_inventory(),
            &MachineConfig::new(0.0),
        )),
    ];

    let outcomes: Vec<bool> = machines
        .into_iter()
        .map(|mut machine| machine.vend(VendingSelection::Water, 1).is_ok())
        .collect();

    assert_eq!(outcomes, vec![true, false]);
}

#[test]
fn empty_machine_rejects_every_selection() {
    let mut machine = FoodVendingMachine::new(Inventory::new());
    for selection in VendingSelection::ALL {
        assert_eq!(
            machine.vend(selection, 1),
            Err(VendingError::InvalidSelection(selection))
        );
        assert_eq!(machine.item_for_selection(selection), None);
    }
    assert_eq!(machine.amount_deposited(), 10.0);
}

//! Dictionary -> inventory conversion.

use serde_json::Value;
use vending_core::{Inventory, InventoryResult, Item, VendingSelection};

use crate::source::{Dictionary, InventorySource};

/// Build an inventory from a `key -> { price, quantity }` dictionary.
///
/// Entries whose value is not an object with a numeric `price` and a
/// non-negative integer `quantity` are skipped. A well-formed entry under a key
/// that names no selection fails the whole load with `InvalidSelection`.
pub fn vending_inventory(dictionary: &Dictionary) -> InventoryResult<Inventory> {
    let mut inventory = Inventory::new();

    for (key, value) in dictionary {
        let Some(item) = parse_item(value) else {
            tracing::debug!(key = %key, "skipping malformed inventory entry");
            continue;
        };

        let selection: VendingSelection = key.parse()?;
        inventory.insert(selection, item);
    }

    Ok(inventory)
}

fn parse_item(value: &Value) -> Option<Item> {
    let fields = value.as_object()?;
    let price = fields.get("price")?.as_f64()?;
    let quantity = u32::try_from(fields.get("quantity")?.as_u64()?).ok()?;
    Item::new(price, quantity).ok()
}

/// Fetch record `name.ext` from `source` and convert it.
pub fn load_inventory<S>(source: &S, name: &str, ext: &str) -> InventoryResult<Inventory>
where
    S: InventorySource + ?Sized,
{
    let dictionary = source.dictionary(name, ext)?;
    let inventory = vending_inventory(&dictionary)?;

    tracing::info!(
        resource = %format!("{name}.{ext}"),
        stocked = inventory.len(),
        skipped = dictionary.len() - inventory.len(),
        "inventory loaded"
    );
    Ok(inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemorySource;
    use serde_json::json;
    use vending_core::{InventoryError, VendingItem};

    fn dictionary(value: Value) -> Dictionary {
        match value {
            Value::Object(map) => map,
            _ => panic!("test fixture must be an object"),
        }
    }

    #[test]
    fn converts_well_formed_entries() {
        let inventory = vending_inventory(&dictionary(json!({
            "soda": { "price": 1.5, "quantity": 5 },
            "dietSoda": { "price": 1.25, "quantity": 0 },
            "gum": { "price": 1, "quantity": 12 },
        })))
        .unwrap();

        assert_eq!(inventory.len(), 3);
        let soda = inventory[&VendingSelection::Soda];
        assert_eq!((soda.price(), soda.quantity()), (1.5, 5));
        assert_eq!(inventory[&VendingSelection::DietSoda].quantity(), 0);
        // integer prices are still prices
        assert_eq!(inventory[&VendingSelection::Gum].price(), 1.0);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let inventory = vending_inventory(&dictionary(json!({
            "soda": { "price": 1.5, "quantity": 5 },
            "chips": { "price": 1.0 },
            "cookie": { "quantity": 3 },
            "wrap": { "price": "cheap", "quantity": 3 },
            "water": { "price": 1.0, "quantity": 2.5 },
            "candyBar": { "price": 1.0, "quantity": -1 },
            "popTart": { "price": -2.0, "quantity": 1 },
            "sandwich": "not an item",
        })))
        .unwrap();

        assert_eq!(inventory.len(), 1);
        assert!(inventory.contains_key(&VendingSelection::Soda));
    }

    #[test]
    fn unknown_key_with_valid_item_is_invalid_selection() {
        let err = vending_inventory(&dictionary(json!({
            "soda": { "price": 1.5, "quantity": 5 },
            "coffee": { "price": 2.0, "quantity": 1 },
        })))
        .unwrap_err();

        assert_eq!(err, InventoryError::InvalidSelection("coffee".to_string()));
    }

    #[test]
    fn unknown_key_with_malformed_item_is_skipped() {
        let inventory = vending_inventory(&dictionary(json!({
            "soda": { "price": 1.5, "quantity": 5 },
            "coffee": { "price": 2.0 },
        })))
        .unwrap();

        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn empty_dictionary_is_empty_inventory() {
        assert!(vending_inventory(&Dictionary::new()).unwrap().is_empty());
    }

    #[test]
    fn load_inventory_propagates_source_errors() {
        let source = InMemorySource::new();
        let err = load_inventory(&source, "vendingInventory", "json").unwrap_err();
        assert!(matches!(err, InventoryError::InvalidResource(_)));
    }

    #[test]
    fn load_inventory_through_trait_object() {
        let source: Box<dyn InventorySource> = Box::new(InMemorySource::new().with_record(
            "vendingInventory",
            "json",
            json!({ "water": { "price": 0.75, "quantity": 8 } }),
        ));

        let inventory = load_inventory(source.as_ref(), "vendingInventory", "json").unwrap();
        assert_eq!(inventory[&VendingSelection::Water].quantity(), 8);
    }
}

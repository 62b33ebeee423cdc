use anyhow::Context;

use vending_console::{parse_script, Action, Session};
use vending_machine::{FoodVendingMachine, MachineConfig};
use vending_resources::{load_inventory, AssetDirectory, DirectorySource};

const INVENTORY_EXT: &str = "json";

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| {
        tracing::debug!("{key} not set; using {default}");
        default.to_string()
    })
}

fn main() -> anyhow::Result<()> {
    vending_observability::init();

    let resource_dir = env_or("VENDING_RESOURCE_DIR", "resources");
    let inventory_name = env_or("VENDING_INVENTORY", "vendingInventory");
    let asset_dir = env_or("VENDING_ASSET_DIR", &resource_dir);

    let mut actions = parse_script(std::env::args().skip(1)).context("invalid session script")?;
    if actions.is_empty() {
        actions.push(Action::Show);
    }

    let source = DirectorySource::new(&resource_dir);
    let inventory = load_inventory(&source, &inventory_name, INVENTORY_EXT)
        .with_context(|| format!("failed to stock machine from {resource_dir}/{inventory_name}"))?;

    let config = MachineConfig::from_env();
    tracing::info!(
        stocked = inventory.len(),
        starting_balance = config.starting_balance,
        "machine ready"
    );

    let machine = FoodVendingMachine::with_config(inventory, &config);
    let mut session = Session::new(machine, AssetDirectory::new(asset_dir));

    for line in session.run(&actions) {
        println!("{line}");
    }
    Ok(())
}

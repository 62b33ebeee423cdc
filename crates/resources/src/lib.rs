//! Resources a machine is stocked and presented with: inventory records and
//! product icons. These sit outside the transactional core.

pub mod icons;
pub mod source;
pub mod unarchiver;

pub use icons::{AssetDirectory, Icon, IconLookup, DEFAULT_ICON};
pub use source::{Dictionary, DirectorySource, InMemorySource, InventorySource};
pub use unarchiver::{load_inventory, vending_inventory};

//! Vending machine ledger.
//!
//! Holds the inventory and the deposited balance for one session and arbitrates
//! vend transactions. Pure in-memory logic: no IO, no resource loading.

pub mod config;
pub mod food;

pub use config::MachineConfig;
pub use food::FoodVendingMachine;

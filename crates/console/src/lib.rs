//! Console front end for a vending machine session.
//!
//! Stands in for the machine's display: parses a scripted list of user actions,
//! runs them against any `VendingMachine`, and renders each outcome as a line of
//! text. Failed actions are reported and the session carries on.

pub mod script;
pub mod session;

pub use script::{parse_script, Action, ScriptError};
pub use session::Session;

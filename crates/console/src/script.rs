use thiserror::Error;
use vending_core::{InventoryError, VendingSelection};

/// One user action at the machine.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Deposit(f64),
    Vend {
        selection: VendingSelection,
        quantity: u32,
    },
    Show,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScriptError {
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("{action}: missing argument")]
    MissingArgument { action: &'static str },

    #[error("deposit: not an amount: {0}")]
    InvalidAmount(String),

    #[error(transparent)]
    InvalidSelection(#[from] InventoryError),
}

/// Parse words such as `deposit 2 vend soda 3 vend gum show`.
///
/// `vend` takes an optional quantity, defaulting to one unit.
pub fn parse_script<I, S>(words: I) -> Result<Vec<Action>, ScriptError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words: Vec<S> = words.into_iter().collect();
    let mut words = words.iter().map(AsRef::<str>::as_ref).peekable();
    let mut actions = Vec::new();

    while let Some(word) = words.next() {
        let action = match word {
            "deposit" => {
                let raw = words
                    .next()
                    .ok_or(ScriptError::MissingArgument { action: "deposit" })?;
                let amount = raw
                    .parse::<f64>()
                    .map_err(|_| ScriptError::InvalidAmount(raw.to_string()))?;
                Action::Deposit(amount)
            }
            "vend" => {
                let selection = words
                    .next()
                    .ok_or(ScriptError::MissingArgument { action: "vend" })?
                    .parse::<VendingSelection>()?;
                let quantity = match words.peek().and_then(|w| w.parse::<u32>().ok()) {
                    Some(quantity) => {
                        words.next();
                        quantity
                    }
                    None => 1,
                };
                Action::Vend {
                    selection,
                    quantity,
                }
            }
            "show" => Action::Show,
            other => return Err(ScriptError::UnknownAction(other.to_string())),
        };
        actions.push(action);
    }

    Ok(actions)
}

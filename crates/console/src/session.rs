use vending_core::{VendingItem, VendingMachine};
use vending_resources::IconLookup;

use crate::script::Action;

/// A user session at one machine.
pub struct Session<M, I> {
    machine: M,
    icons: I,
}

impl<M, I> Session<M, I>
where
    M: VendingMachine,
    I: IconLookup,
{
    pub fn new(machine: M, icons: I) -> Self {
        Self { machine, icons }
    }

    pub fn machine(&self) -> &M {
        &self.machine
    }

    /// Run every action in order, returning the rendered transcript.
    pub fn run(&mut self, actions: &[Action]) -> Vec<String> {
        actions
            .iter()
            .flat_map(|action| self.perform(action))
            .collect()
    }

    /// Perform a single action. Machine errors are rendered, not propagated.
    pub fn perform(&mut self, action: &Action) -> Vec<String> {
        match *action {
            Action::Deposit(amount) => match self.machine.deposit(amount) {
                Ok(()) => vec![format!(
                    "deposited {amount:.2}, balance {:.2}",
                    self.machine.amount_deposited()
                )],
                Err(err) => {
                    tracing::info!(error = %err, "deposit refused");
                    vec![format!("deposit refused: {err}")]
                }
            },
            Action::Vend {
                selection,
                quantity,
            } => match self.machine.vend(selection, quantity) {
                Ok(()) => vec![format!(
                    "vended {quantity} x {selection}, balance {:.2}",
                    self.machine.amount_deposited()
                )],
                Err(err) => {
                    tracing::info!(%selection, quantity, error = %err, "vend refused");
                    vec![format!("vend refused: {err}")]
                }
            },
            Action::Show => self.render(),
        }
    }

    /// One line per selection, followed by the balance.
    pub fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .machine
            .selection()
            .iter()
            .map(|&selection| {
                let icon = self.icons.icon(selection);
                match self.machine.item_for_selection(selection) {
                    Some(item) => format!(
                        "{selection:<12} [{}] {:>6.2} x {}",
                        icon.name,
                        item.price(),
                        item.quantity()
                    ),
                    None => format!("{selection:<12} [{}] not stocked", icon.name),
                }
            })
            .collect();
        lines.push(format!("balance {:.2}", self.machine.amount_deposited()));
        lines
    }
}

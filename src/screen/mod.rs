//! Line-oriented terminal screen over one [`WizardSession`].
//!
//! The screen is both the navigation callback and the state observer: every
//! snapshot pushed by the use cases is rendered as it arrives.

pub mod command;

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use rb_app::usecases::AddIngredientOutcome;
use rb_app::{WizardSession, WizardSessionError};
use rb_core::ports::{NavigationPort, WizardEventPort};
use rb_core::recipe::Recipe;
use rb_core::wizard::{WizardPhase, WizardState, WizardStep};
use rb_core::IngredientForm;
use tracing::{info, info_span, warn, Instrument};

pub use command::{parse, Command, CommandError, IngredientCommand, HELP};

/// Whether the input loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct TerminalScreen<W> {
    out: Mutex<W>,
    closed: AtomicBool,
}

impl<W: Write + Send> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            closed: AtomicBool::new(false),
        }
    }

    /// `true` once the session completed or was cancelled.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn print(&self, text: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(err) = writeln!(out, "{text}").and_then(|_| out.flush()) {
            warn!(error = %err, "failed to write to terminal");
        }
    }

    pub fn show_state(&self, state: &WizardState) {
        self.print(&render_state(state));
    }

    pub fn into_inner(self) -> Option<W> {
        self.out.into_inner().ok()
    }
}

fn step_label(step: WizardStep) -> &'static str {
    match step {
        WizardStep::GeneralInfo => "general info",
        WizardStep::Ingredients => "ingredients",
        WizardStep::Instructions => "instructions",
    }
}

fn render_state(state: &WizardState) -> String {
    let mut lines = Vec::new();
    match &state.phase {
        WizardPhase::Saving => lines.push("saving recipe...".to_string()),
        WizardPhase::Completed { recipe_id } => lines.push(format!("recipe saved ({recipe_id})")),
        WizardPhase::Cancelled => lines.push("recipe discarded".to_string()),
        WizardPhase::Editing => {
            lines.push(format!(
                "[{}/{}] {}",
                state.step_index() + 1,
                WizardStep::ALL.len(),
                step_label(state.step)
            ));
            let draft = &state.draft;
            match state.step {
                WizardStep::GeneralInfo => {
                    lines.push(format!("  name: {}", draft.name()));
                    lines.push(format!("  description: {}", draft.description()));
                }
                WizardStep::Ingredients => {
                    if draft.ingredients().is_empty() {
                        lines.push("  (no ingredients yet)".to_string());
                    }
                    for (i, ingredient) in draft.ingredients().iter().enumerate() {
                        lines.push(format!(
                            "  {}. {} {} {}",
                            i + 1,
                            ingredient.name(),
                            ingredient.quantity(),
                            ingredient.unit()
                        ));
                    }
                }
                WizardStep::Instructions => {
                    lines.push(format!("  instructions: {}", draft.instructions()));
                }
            }
        }
    }
    if let Some(error) = &state.error {
        lines.push(format!("  ! {error}"));
    }
    lines.join("\n")
}

fn render_form(form: &IngredientForm) -> String {
    let mut lines = vec![format!(
        "  ingredient: name='{}' qty='{}' unit='{}'",
        form.name(),
        form.quantity_input(),
        form.unit()
    )];
    if !form.suggestions().is_empty() {
        lines.push(format!("    suggestions: {}", form.suggestions().join(", ")));
    }
    if let Some(error) = form.error() {
        lines.push(format!("    ! {error}"));
    }
    lines.join("\n")
}

#[async_trait]
impl<W: Write + Send> NavigationPort for TerminalScreen<W> {
    async fn on_complete(&self, recipe: Recipe) {
        info!(recipe_id = %recipe.id, "recipe created");
        self.closed.store(true, Ordering::SeqCst);
        self.print(&format!(
            "created \"{}\" with {} ingredient(s)",
            recipe.name,
            recipe.ingredients.len()
        ));
    }

    async fn on_cancel(&self) {
        info!("recipe creation cancelled");
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl<W: Write + Send> WizardEventPort for TerminalScreen<W> {
    async fn emit_wizard_state_changed(&self, state: WizardState) {
        self.show_state(&state);
    }

    async fn emit_ingredient_form_changed(&self, form: IngredientForm) {
        self.print(&render_form(&form));
    }

    async fn emit_ingredient_form_closed(&self) {
        self.print("  ingredient form closed");
    }
}

/// Apply one command to the session.
pub async fn execute<W: Write + Send>(
    session: &WizardSession,
    screen: &TerminalScreen<W>,
    command: Command,
) -> Result<Flow, WizardSessionError> {
    let span = info_span!("command.screen.execute", command = ?command);
    apply(session, screen, command).instrument(span).await
}

async fn apply<W: Write + Send>(
    session: &WizardSession,
    screen: &TerminalScreen<W>,
    command: Command,
) -> Result<Flow, WizardSessionError> {
    let wizard = session.wizard();
    let entry = session.ingredient_entry();
    match command {
        Command::Name(name) => {
            wizard.edit_name(name).await?;
        }
        Command::Description(description) => {
            wizard.edit_description(description).await?;
        }
        Command::Instructions(instructions) => {
            wizard.edit_instructions(instructions).await?;
        }
        Command::RemoveIngredient(index) => {
            wizard.remove_ingredient(index).await?;
        }
        Command::Next => {
            wizard.next().await?;
        }
        Command::Back => {
            wizard.back().await?;
        }
        Command::Done => {
            if wizard.get_state().await.step.is_last() {
                wizard.complete().await?;
            } else {
                screen.print("  finish the remaining steps first (next)");
            }
        }
        Command::Cancel => {
            entry.cancel().await;
            wizard.cancel().await?;
        }
        Command::Ingredient(IngredientCommand::Open) => {
            entry.open().await;
        }
        Command::Ingredient(IngredientCommand::Name(partial)) => {
            entry.update_name_query(partial).await?;
        }
        Command::Ingredient(IngredientCommand::Pick(name)) => {
            entry.select_suggestion(name).await?;
        }
        Command::Ingredient(IngredientCommand::Quantity(quantity)) => {
            entry.set_quantity(quantity).await?;
        }
        Command::Ingredient(IngredientCommand::Unit(unit)) => {
            entry.set_unit(unit).await?;
        }
        Command::Ingredient(IngredientCommand::Confirm) => {
            if let AddIngredientOutcome::Rejected(_) = session.add_ingredient().await? {
                screen.print("  ingredient not added");
            }
        }
        Command::Ingredient(IngredientCommand::Discard) => {
            entry.cancel().await;
        }
        Command::Help => screen.print(HELP),
        Command::Quit => return Ok(Flow::Exit),
    }

    Ok(if screen.is_closed() {
        Flow::Exit
    } else {
        Flow::Continue
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rb_core::recipe::{Ingredient, Quantity, Unit};

    #[test]
    fn renders_ingredient_step_with_error() {
        let mut state = WizardState::new();
        state.step = WizardStep::Ingredients;
        state.draft.push_ingredient(
            Ingredient::new("Harina", Quantity::new(2.0).unwrap(), Unit::from_input("Kg")).unwrap(),
        );
        state.error = Some(rb_core::WizardError::IngredientsEmpty);

        let text = render_state(&state);
        assert!(text.starts_with("[2/3] ingredients"));
        assert!(text.contains("1. Harina 2 Kg"));
        assert!(text.contains("! add at least one ingredient"));
    }

    #[test]
    fn renders_suggestions() {
        let mut form = IngredientForm::open(1.0, Unit::Count);
        let query = form.begin_name_query("ha").unwrap();
        form.apply_suggestions(query.seq, vec!["Harina".to_string(), "Hash".to_string()]);

        let text = render_form(&form);
        assert!(text.contains("name='ha' qty='1' unit='unit'"));
        assert!(text.contains("suggestions: Harina, Hash"));
    }

    #[tokio::test]
    async fn navigation_closes_screen() {
        let screen = TerminalScreen::new(Vec::new());
        assert!(!screen.is_closed());
        screen.on_cancel().await;
        assert!(screen.is_closed());
    }
}

use crate::ingredient_entry::IngredientForm;
use crate::wizard::WizardState;

/// Observer notified after every state change, so a UI can re-render even
/// for updates it did not trigger (late suggestion responses).
#[async_trait::async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_wizard_state_changed(&self, state: WizardState);
    async fn emit_ingredient_form_changed(&self, form: IngredientForm);
    /// The ingredient form was confirmed or cancelled.
    async fn emit_ingredient_form_closed(&self);
}

//! Hand-written fakes shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rb_app::usecases::{RecipeWizardOrchestrator, SaveRecipe};
use rb_core::ports::{
    ClockPort, DocumentFields, DocumentStoreError, DocumentStorePort, NavigationPort,
    WizardEventPort,
};
use rb_core::recipe::Recipe;
use rb_core::wizard::WizardState;
use rb_core::IngredientForm;

pub const NOW_MS: i64 = 1_760_000_000_000;

/// Document store recording every write. Name lookups answer from a fixed
/// table after an optional per-query delay.
#[derive(Default)]
pub struct FakeStore {
    pub saves: Mutex<Vec<(String, String, DocumentFields)>>,
    pub queries: Mutex<Vec<(String, String)>>,
    issued_ids: AtomicUsize,
    fail_saves: Mutex<Option<DocumentStoreError>>,
    fail_queries: Mutex<Option<DocumentStoreError>>,
    save_delay: Mutex<Option<Duration>>,
    answers: Mutex<HashMap<String, (Vec<String>, Duration)>>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_saves_with(&self, err: DocumentStoreError) {
        *self.fail_saves.lock().unwrap() = Some(err);
    }

    pub fn recover_saves(&self) {
        *self.fail_saves.lock().unwrap() = None;
    }

    pub fn fail_queries_with(&self, err: DocumentStoreError) {
        *self.fail_queries.lock().unwrap() = Some(err);
    }

    pub fn delay_saves(&self, delay: Duration) {
        *self.save_delay.lock().unwrap() = Some(delay);
    }

    pub fn answer(&self, partial: &str, names: &[&str], delay: Duration) {
        self.answers.lock().unwrap().insert(
            partial.to_string(),
            (names.iter().map(|name| name.to_string()).collect(), delay),
        );
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

#[async_trait]
impl DocumentStorePort for FakeStore {
    fn generate_id(&self, collection: &str) -> String {
        let n = self.issued_ids.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{collection}-{n}")
    }

    async fn save(
        &self,
        collection: &str,
        id: &str,
        fields: DocumentFields,
    ) -> Result<(), DocumentStoreError> {
        let delay = *self.save_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.fail_saves.lock().unwrap().clone() {
            return Err(err);
        }
        self.saves
            .lock()
            .unwrap()
            .push((collection.to_string(), id.to_string(), fields));
        Ok(())
    }

    async fn query_by_name_contains(
        &self,
        collection: &str,
        partial: &str,
    ) -> Result<Vec<String>, DocumentStoreError> {
        self.queries
            .lock()
            .unwrap()
            .push((collection.to_string(), partial.to_string()));
        let answer = self.answers.lock().unwrap().get(partial).cloned();
        let (names, delay) = answer.unwrap_or_default();
        tokio::time::sleep(delay).await;
        if let Some(err) = self.fail_queries.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(names)
    }
}

#[derive(Default)]
pub struct RecordingNavigation {
    pub completed: Mutex<Vec<Recipe>>,
    pub cancelled: AtomicUsize,
}

impl RecordingNavigation {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn completed(&self) -> Vec<Recipe> {
        self.completed.lock().unwrap().clone()
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NavigationPort for RecordingNavigation {
    async fn on_complete(&self, recipe: Recipe) {
        self.completed.lock().unwrap().push(recipe);
    }

    async fn on_cancel(&self) {
        self.cancelled.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingEvents {
    pub wizard_states: Mutex<Vec<WizardState>>,
    pub forms: Mutex<Vec<IngredientForm>>,
    pub forms_closed: AtomicUsize,
}

impl RecordingEvents {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl WizardEventPort for RecordingEvents {
    async fn emit_wizard_state_changed(&self, state: WizardState) {
        self.wizard_states.lock().unwrap().push(state);
    }

    async fn emit_ingredient_form_changed(&self, form: IngredientForm) {
        self.forms.lock().unwrap().push(form);
    }

    async fn emit_ingredient_form_closed(&self) {
        self.forms_closed.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct FixedClock;

impl ClockPort for FixedClock {
    fn now_ms(&self) -> i64 {
        NOW_MS
    }
}

pub struct WizardHarness {
    pub orchestrator: RecipeWizardOrchestrator,
    pub store: Arc<FakeStore>,
    pub navigation: Arc<RecordingNavigation>,
    pub events: Arc<RecordingEvents>,
}

pub fn build_wizard(save_timeout: Duration) -> WizardHarness {
    let store = FakeStore::new();
    let navigation = RecordingNavigation::new();
    let events = RecordingEvents::new();
    let save_recipe = Arc::new(SaveRecipe::new(
        store.clone(),
        Arc::new(FixedClock),
        save_timeout,
    ));
    let orchestrator =
        RecipeWizardOrchestrator::new(save_recipe, navigation.clone(), events.clone());
    WizardHarness {
        orchestrator,
        store,
        navigation,
        events,
    }
}

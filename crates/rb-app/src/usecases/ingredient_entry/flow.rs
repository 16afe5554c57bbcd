//! Ingredient entry flow.
//!
//! Runs the autocomplete lookups for the ingredient form without holding the
//! form lock across the round-trip, so the form stays editable. Responses are
//! applied only when they answer the latest lookup of the same open form.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rb_core::config::IngredientsConfig;
use rb_core::ingredient_entry::{IngredientEntryError, IngredientForm};
use rb_core::ports::{DocumentStorePort, WizardEventPort};
use rb_core::recipe::{Ingredient, INGREDIENTS_COLLECTION};
use tokio::sync::Mutex;
use tracing::{debug, info_span, warn, Instrument};

use crate::usecases::internal::gateway::call_with_timeout;
use crate::usecases::CatalogueIngredient;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngredientEntryFlowError {
    #[error("ingredient entry form is not open")]
    NotOpen,
    #[error("ingredient is already being confirmed")]
    ConfirmInProgress,
}

/// Result of [`IngredientEntryFlow::confirm`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    /// Form closed; append the ingredient to the draft.
    Confirmed(Ingredient),
    /// Form stays open with its error set.
    Rejected(IngredientForm),
}

struct OpenForm {
    /// Distinguishes successive forms so a lookup issued by a closed form can
    /// never land in a newer one.
    epoch: u64,
    form: IngredientForm,
    /// Set while a confirmed ingredient is being catalogued.
    confirming: bool,
}

pub struct IngredientEntryFlow {
    form: Mutex<Option<OpenForm>>,
    next_epoch: AtomicU64,
    store: Arc<dyn DocumentStorePort>,
    catalogue: Option<Arc<CatalogueIngredient>>,
    wizard_events: Arc<dyn WizardEventPort>,
    settings: IngredientsConfig,
    query_timeout: Duration,
}

impl IngredientEntryFlow {
    /// `catalogue` is `Some` when confirmed ingredients must be saved to the
    /// ingredient collection before they are handed back.
    pub fn new(
        store: Arc<dyn DocumentStorePort>,
        catalogue: Option<Arc<CatalogueIngredient>>,
        wizard_events: Arc<dyn WizardEventPort>,
        settings: IngredientsConfig,
        query_timeout: Duration,
    ) -> Self {
        Self {
            form: Mutex::new(None),
            next_epoch: AtomicU64::new(0),
            store,
            catalogue,
            wizard_events,
            settings,
            query_timeout,
        }
    }

    /// Current form, if one is open.
    pub async fn form(&self) -> Option<IngredientForm> {
        self.form.lock().await.as_ref().map(|open| open.form.clone())
    }

    /// Present a fresh form, replacing any form still open.
    pub async fn open(&self) -> IngredientForm {
        let epoch = self.next_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let form = IngredientForm::open(self.settings.default_quantity, self.settings.default_unit());
        *self.form.lock().await = Some(OpenForm {
            epoch,
            form: form.clone(),
            confirming: false,
        });
        debug!(epoch, "ingredient form opened");
        self.wizard_events
            .emit_ingredient_form_changed(form.clone())
            .await;
        form
    }

    /// Discard the form. Outstanding lookups and catalogue writes are dropped
    /// when they return.
    pub async fn cancel(&self) {
        let closed = self.form.lock().await.take();
        if closed.is_some() {
            debug!("ingredient form cancelled");
            self.wizard_events.emit_ingredient_form_closed().await;
        }
    }

    /// Name lookup for the open form.
    ///
    /// When the form is closed or replaced while the lookup is in flight the
    /// response is dropped and the snapshot taken before the lookup is
    /// returned.
    pub async fn update_name_query(
        &self,
        partial: String,
    ) -> Result<IngredientForm, IngredientEntryFlowError> {
        let (epoch, query, snapshot) = {
            let mut guard = self.form.lock().await;
            let open = guard.as_mut().ok_or(IngredientEntryFlowError::NotOpen)?;
            let query = open.form.begin_name_query(partial);
            (open.epoch, query, open.form.clone())
        };
        self.wizard_events
            .emit_ingredient_form_changed(snapshot.clone())
            .await;

        let Some(query) = query else {
            return Ok(snapshot);
        };

        let span = info_span!("usecase.ingredient_entry.lookup", seq = query.seq);
        let lookup = call_with_timeout(
            "ingredient name lookup",
            self.query_timeout,
            self.store
                .query_by_name_contains(INGREDIENTS_COLLECTION, &query.partial),
        )
        .instrument(span)
        .await;

        let snapshot = {
            let mut guard = self.form.lock().await;
            let Some(open) = guard.as_mut().filter(|open| open.epoch == epoch) else {
                debug!(seq = query.seq, "form closed, dropping ingredient suggestions");
                return Ok(snapshot);
            };
            match lookup {
                Ok(names) => {
                    if !open.form.apply_suggestions(query.seq, names) {
                        debug!(
                            seq = query.seq,
                            latest = open.form.latest_query(),
                            "discarding stale ingredient suggestions"
                        );
                        return Ok(open.form.clone());
                    }
                }
                Err(err) => {
                    warn!(error = %err, seq = query.seq, "ingredient name lookup failed");
                    return Ok(open.form.clone());
                }
            }
            open.form.clone()
        };
        self.wizard_events
            .emit_ingredient_form_changed(snapshot.clone())
            .await;
        Ok(snapshot)
    }

    pub async fn select_suggestion(
        &self,
        name: String,
    ) -> Result<IngredientForm, IngredientEntryFlowError> {
        self.update_form(|form| form.select_suggestion(name)).await
    }

    pub async fn set_quantity(
        &self,
        quantity: String,
    ) -> Result<IngredientForm, IngredientEntryFlowError> {
        self.update_form(|form| form.set_quantity(quantity)).await
    }

    pub async fn set_unit(&self, unit: String) -> Result<IngredientForm, IngredientEntryFlowError> {
        self.update_form(|form| form.set_unit(&unit)).await
    }

    /// Validate the form and hand back the ingredient, cataloguing it first
    /// when configured to.
    pub async fn confirm(&self) -> Result<ConfirmOutcome, IngredientEntryFlowError> {
        let (epoch, candidate) = {
            let mut guard = self.form.lock().await;
            let open = guard.as_mut().ok_or(IngredientEntryFlowError::NotOpen)?;
            if open.confirming {
                return Err(IngredientEntryFlowError::ConfirmInProgress);
            }
            match open.form.validate() {
                Ok(ingredient) => {
                    open.confirming = self.catalogue.is_some();
                    (open.epoch, ingredient)
                }
                Err(error) => {
                    debug!(%error, "ingredient rejected");
                    open.form.set_error(error);
                    let form = open.form.clone();
                    drop(guard);
                    self.wizard_events
                        .emit_ingredient_form_changed(form.clone())
                        .await;
                    return Ok(ConfirmOutcome::Rejected(form));
                }
            }
        };

        let ingredient = match &self.catalogue {
            Some(catalogue) => match catalogue.execute(candidate).await {
                Ok(ingredient) => ingredient,
                Err(err) => {
                    warn!(error = %err, "ingredient cataloguing failed");
                    return self
                        .reject_open_form(
                            epoch,
                            IngredientEntryError::Persistence {
                                reason: err.to_string(),
                            },
                        )
                        .await;
                }
            },
            None => candidate,
        };

        {
            let mut guard = self.form.lock().await;
            if !guard.as_ref().is_some_and(|open| open.epoch == epoch) {
                debug!(name = ingredient.name(), "form closed during confirm, ingredient dropped");
                return Err(IngredientEntryFlowError::NotOpen);
            }
            *guard = None;
        }
        debug!(name = ingredient.name(), "ingredient confirmed");
        self.wizard_events.emit_ingredient_form_closed().await;
        Ok(ConfirmOutcome::Confirmed(ingredient))
    }

    async fn reject_open_form(
        &self,
        epoch: u64,
        error: IngredientEntryError,
    ) -> Result<ConfirmOutcome, IngredientEntryFlowError> {
        let form = {
            let mut guard = self.form.lock().await;
            let open = guard
                .as_mut()
                .filter(|open| open.epoch == epoch)
                .ok_or(IngredientEntryFlowError::NotOpen)?;
            open.confirming = false;
            open.form.set_error(error);
            open.form.clone()
        };
        self.wizard_events
            .emit_ingredient_form_changed(form.clone())
            .await;
        Ok(ConfirmOutcome::Rejected(form))
    }

    async fn update_form<F>(&self, apply: F) -> Result<IngredientForm, IngredientEntryFlowError>
    where
        F: FnOnce(&mut IngredientForm),
    {
        let form = {
            let mut guard = self.form.lock().await;
            let open = guard.as_mut().ok_or(IngredientEntryFlowError::NotOpen)?;
            apply(&mut open.form);
            open.form.clone()
        };
        self.wizard_events
            .emit_ingredient_form_changed(form.clone())
            .await;
        Ok(form)
    }
}

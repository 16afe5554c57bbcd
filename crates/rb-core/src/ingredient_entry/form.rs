//! Ingredient entry form.
//!
//! Holds the raw field input for one ingredient plus the autocomplete state.
//! Name lookups are tagged with a sequence number; only the response to the
//! most recently issued lookup may replace the suggestion list.

use serde::{Deserialize, Serialize};

use crate::ingredient_entry::IngredientEntryError;
use crate::recipe::{Ingredient, Quantity, Unit};

/// A name lookup the caller must run against the ingredient collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameQuery {
    pub seq: u64,
    pub partial: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientForm {
    name: String,
    quantity: String,
    unit: Unit,
    suggestions: Vec<String>,
    error: Option<IngredientEntryError>,
    #[serde(skip)]
    latest_query: u64,
}

impl IngredientForm {
    /// Fresh form with the quantity and unit pre-filled.
    pub fn open(default_quantity: f64, default_unit: Unit) -> Self {
        Self {
            name: String::new(),
            quantity: default_quantity.to_string(),
            unit: default_unit,
            suggestions: Vec::new(),
            error: None,
            latest_query: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity_input(&self) -> &str {
        &self.quantity
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn error(&self) -> Option<&IngredientEntryError> {
        self.error.as_ref()
    }

    pub fn latest_query(&self) -> u64 {
        self.latest_query
    }

    /// Record the typed name and issue a new lookup.
    ///
    /// Blank input clears the suggestions and returns `None`; any lookup still
    /// in flight becomes stale either way.
    pub fn begin_name_query(&mut self, partial: impl Into<String>) -> Option<NameQuery> {
        self.name = partial.into();
        self.latest_query += 1;
        if self.name.trim().is_empty() {
            self.suggestions.clear();
            return None;
        }
        Some(NameQuery {
            seq: self.latest_query,
            partial: self.name.trim().to_string(),
        })
    }

    /// Apply a lookup response. Returns `false` when the response is stale.
    pub fn apply_suggestions(&mut self, seq: u64, names: Vec<String>) -> bool {
        if seq != self.latest_query {
            return false;
        }
        self.suggestions = names;
        true
    }

    pub fn select_suggestion(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.suggestions.clear();
        self.latest_query += 1;
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.quantity = quantity.into();
        self.error = None;
    }

    pub fn set_unit(&mut self, unit: &str) {
        self.unit = Unit::from_input(unit);
        self.error = None;
    }

    pub fn set_error(&mut self, error: IngredientEntryError) {
        self.error = Some(error);
    }

    /// Validate the fields and build an uncatalogued ingredient.
    pub fn validate(&self) -> Result<Ingredient, IngredientEntryError> {
        if self.name.trim().is_empty() {
            return Err(IngredientEntryError::NameEmpty);
        }
        let quantity = Quantity::parse(&self.quantity).ok_or(IngredientEntryError::InvalidQuantity)?;
        Ingredient::new(self.name.clone(), quantity, self.unit.clone())
    }
}

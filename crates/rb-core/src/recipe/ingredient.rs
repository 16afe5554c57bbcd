use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::IngredientId;
use crate::ingredient_entry::IngredientEntryError;
use crate::recipe::Unit;

/// Non-negative, finite ingredient amount.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Quantity(f64);

impl Quantity {
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value >= 0.0).then_some(Self(value))
    }

    /// Parse free-form input such as `"2"`, `" 0.5 "` or `"1,5"`.
    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().replacen(',', ".", 1);
        if normalized.is_empty() {
            return None;
        }
        normalized.parse::<f64>().ok().and_then(Self::new)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Quantity {
    type Error = IngredientEntryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(IngredientEntryError::InvalidQuantity)
    }
}

impl From<Quantity> for f64 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of a recipe's ingredient list. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IngredientDocument")]
pub struct Ingredient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<IngredientId>,
    name: String,
    quantity: Quantity,
    unit: Unit,
}

/// Stored shape of an [`Ingredient`], checked by [`Ingredient::new`] on load.
#[derive(Deserialize)]
struct IngredientDocument {
    #[serde(default)]
    id: Option<IngredientId>,
    name: String,
    quantity: Quantity,
    unit: Unit,
}

impl TryFrom<IngredientDocument> for Ingredient {
    type Error = IngredientEntryError;

    fn try_from(doc: IngredientDocument) -> Result<Self, Self::Error> {
        let ingredient = Self::new(doc.name, doc.quantity, doc.unit)?;
        Ok(match doc.id {
            Some(id) => ingredient.with_id(id),
            None => ingredient,
        })
    }
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: Quantity,
        unit: Unit,
    ) -> Result<Self, IngredientEntryError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(IngredientEntryError::NameEmpty);
        }
        Ok(Self {
            id: None,
            name,
            quantity,
            unit,
        })
    }

    /// Attach the id the document store issued when the ingredient was catalogued.
    pub fn with_id(self, id: IngredientId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    pub fn id(&self) -> Option<&IngredientId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }
}

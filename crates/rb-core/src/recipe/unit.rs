use std::fmt;

use serde::{Deserialize, Serialize};

/// Measurement unit of an ingredient.
///
/// Enumerated units are stored by their lowercase name; anything else the
/// user types is kept verbatim as [`Unit::Custom`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    /// Whole items ("2 eggs"), written `unit`.
    #[default]
    Count,
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Cup,
    Tablespoon,
    Teaspoon,
    Pinch,
    Custom(String),
}

impl Unit {
    /// Enumerated units in the order they are offered to the user.
    pub const ENUMERATED: [Unit; 9] = [
        Unit::Count,
        Unit::Gram,
        Unit::Kilogram,
        Unit::Milliliter,
        Unit::Liter,
        Unit::Cup,
        Unit::Tablespoon,
        Unit::Teaspoon,
        Unit::Pinch,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Unit::Count => "unit",
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Milliliter => "milliliter",
            Unit::Liter => "liter",
            Unit::Cup => "cup",
            Unit::Tablespoon => "tablespoon",
            Unit::Teaspoon => "teaspoon",
            Unit::Pinch => "pinch",
            Unit::Custom(text) => text,
        }
    }

    /// Interpret user input. Enumerated names match case-insensitively,
    /// blank input falls back to [`Unit::Count`].
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Unit::Count;
        }
        Self::ENUMERATED
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Unit::Custom(trimmed.to_string()))
    }

    pub fn is_enumerated(&self) -> bool {
        !matches!(self, Unit::Custom(_))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Unit {
    fn from(s: String) -> Self {
        Unit::from_input(&s)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        match unit {
            Unit::Custom(text) => text,
            other => other.as_str().to_string(),
        }
    }
}

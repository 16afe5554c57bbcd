//! Per-step validation rules.
//!
//! Each rule reads only the draft field owned by its step.

use crate::recipe::RecipeDraft;
use crate::wizard::{WizardError, WizardStep};

pub fn validate_step(step: WizardStep, draft: &RecipeDraft) -> Result<(), WizardError> {
    match step {
        WizardStep::GeneralInfo => {
            if draft.name().trim().is_empty() {
                return Err(WizardError::NameEmpty);
            }
        }
        WizardStep::Ingredients => {
            if draft.ingredients().is_empty() {
                return Err(WizardError::IngredientsEmpty);
            }
        }
        WizardStep::Instructions => {
            if draft.instructions().trim().is_empty() {
                return Err(WizardError::InstructionsEmpty);
            }
        }
    }
    Ok(())
}

/// Validate every step in order, reporting the first failure.
pub fn validate_draft(draft: &RecipeDraft) -> Result<(), WizardError> {
    WizardStep::ALL
        .into_iter()
        .try_for_each(|step| validate_step(step, draft))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{Ingredient, Quantity, Unit};

    fn harina() -> Ingredient {
        Ingredient::new("Harina", Quantity::new(2.0).unwrap(), Unit::Kilogram).unwrap()
    }

    #[test]
    fn general_info_requires_trimmed_name() {
        let mut draft = RecipeDraft::new();
        assert_eq!(
            validate_step(WizardStep::GeneralInfo, &draft),
            Err(WizardError::NameEmpty)
        );
        draft.set_name("   \t");
        assert_eq!(
            validate_step(WizardStep::GeneralInfo, &draft),
            Err(WizardError::NameEmpty)
        );
        draft.set_name("Tarta");
        assert!(validate_step(WizardStep::GeneralInfo, &draft).is_ok());
    }

    #[test]
    fn ingredients_step_requires_one_ingredient() {
        let mut draft = RecipeDraft::new();
        assert_eq!(
            validate_step(WizardStep::Ingredients, &draft),
            Err(WizardError::IngredientsEmpty)
        );
        draft.push_ingredient(harina());
        assert!(validate_step(WizardStep::Ingredients, &draft).is_ok());
    }

    #[test]
    fn instructions_step_requires_trimmed_text() {
        let mut draft = RecipeDraft::new();
        draft.set_instructions("\n ");
        assert_eq!(
            validate_step(WizardStep::Instructions, &draft),
            Err(WizardError::InstructionsEmpty)
        );
        draft.set_instructions("Mezclar y hornear");
        assert!(validate_step(WizardStep::Instructions, &draft).is_ok());
    }

    #[test]
    fn each_rule_ignores_fields_of_other_steps() {
        // Every combination of the three fields; a step's verdict must only
        // follow its own field.
        for mask in 0..8u8 {
            let mut draft = RecipeDraft::new();
            let has_name = mask & 1 != 0;
            let has_ingredient = mask & 2 != 0;
            let has_instructions = mask & 4 != 0;
            if has_name {
                draft.set_name("Tarta");
            }
            if has_ingredient {
                draft.push_ingredient(harina());
            }
            if has_instructions {
                draft.set_instructions("Hornear");
            }
            draft.set_description(if mask % 2 == 0 { "" } else { "desc" });

            assert_eq!(
                validate_step(WizardStep::GeneralInfo, &draft).is_ok(),
                has_name
            );
            assert_eq!(
                validate_step(WizardStep::Ingredients, &draft).is_ok(),
                has_ingredient
            );
            assert_eq!(
                validate_step(WizardStep::Instructions, &draft).is_ok(),
                has_instructions
            );
            assert_eq!(
                validate_draft(&draft).is_ok(),
                has_name && has_ingredient && has_instructions
            );
        }
    }
}

use serde::{Deserialize, Serialize};

/// Wizard step, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    GeneralInfo,
    Ingredients,
    Instructions,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::GeneralInfo,
        WizardStep::Ingredients,
        WizardStep::Instructions,
    ];

    pub fn index(self) -> usize {
        match self {
            WizardStep::GeneralInfo => 0,
            WizardStep::Ingredients => 1,
            WizardStep::Instructions => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::GeneralInfo => "general_info",
            WizardStep::Ingredients => "ingredients",
            WizardStep::Instructions => "instructions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_ordered() {
        assert_eq!(WizardStep::GeneralInfo.next(), Some(WizardStep::Ingredients));
        assert_eq!(WizardStep::Instructions.next(), None);
        assert_eq!(WizardStep::GeneralInfo.previous(), None);
        assert_eq!(
            WizardStep::Instructions.previous(),
            Some(WizardStep::Ingredients)
        );
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), Some(*step));
        }
        assert!(WizardStep::Instructions.is_last());
    }
}

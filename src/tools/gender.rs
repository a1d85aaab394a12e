//! Gender prediction by first name.

use super::format::group_thousands;
use super::{Notices, NoticeVariant, Screen, ScreenResult, ScreenState};
use crate::router::Tool;

/// Predicted gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse the upstream value; anything but `male`/`female` is unknown.
    #[must_use]
    pub fn from_api(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "👨 Masculino",
            Self::Female => "👩 Femenino",
        }
    }

    /// Background class of the result panel.
    #[must_use]
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Male => "bg-male",
            Self::Female => "bg-female",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenderPrediction {
    pub name: String,
    pub gender: Gender,
    /// Confidence in `[0, 1]`.
    pub probability: f64,
    /// Number of samples behind the prediction.
    pub count: u64,
}

impl GenderPrediction {
    #[must_use]
    pub fn probability_label(&self) -> String {
        format!("Probabilidad: {:.1}%", self.probability * 100.0)
    }

    #[must_use]
    pub fn sample_label(&self) -> String {
        format!("Basado en {} registros", group_thousands(self.count))
    }
}

pub const NOTICES: Notices = Notices {
    empty_input: "Por favor ingresa un nombre",
    miss_title: "No se encontró información",
    miss_description: "No se pudo determinar el género para este nombre",
    miss_variant: NoticeVariant::Destructive,
    failure: "Error al consultar la API",
};

impl ScreenResult for GenderPrediction {
    const NOTICES: Notices = NOTICES;
    const TOOL: Tool = Tool::Gender;

    fn slot(state: &mut ScreenState) -> Option<&mut Screen<Self>> {
        match state {
            ScreenState::Gender(screen) => Some(screen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let prediction = GenderPrediction {
            name: "John".to_string(),
            gender: Gender::Male,
            probability: 0.97,
            count: 12_345,
        };
        assert_eq!(prediction.gender.label(), "👨 Masculino");
        assert_eq!(prediction.probability_label(), "Probabilidad: 97.0%");
        assert_eq!(prediction.sample_label(), "Basado en 12,345 registros");
    }

    #[test]
    fn test_from_api() {
        assert_eq!(Gender::from_api("female"), Some(Gender::Female));
        assert_eq!(Gender::from_api("Female"), None);
        assert_eq!(Gender::from_api(""), None);
    }
}

//! Age estimation by first name.

use super::format::group_thousands;
use super::{Notices, NoticeVariant, Screen, ScreenResult, ScreenState};
use crate::router::Tool;

/// Life stage derived from an estimated age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeCategory {
    /// Under 30.
    Young,
    /// 30 to 59.
    Adult,
    /// 60 and over.
    Elder,
}

impl AgeCategory {
    #[must_use]
    pub fn from_age(age: u32) -> Self {
        if age < 30 {
            Self::Young
        } else if age < 60 {
            Self::Adult
        } else {
            Self::Elder
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Young => "Joven",
            Self::Adult => "Adulto",
            Self::Elder => "Anciano",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Young => "👶",
            Self::Adult => "👨",
            Self::Elder => "👴",
        }
    }

    #[must_use]
    pub fn color_class(self) -> &'static str {
        match self {
            Self::Young => "bg-young",
            Self::Adult => "bg-adult",
            Self::Elder => "bg-old",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgePrediction {
    pub name: String,
    pub age: u32,
    pub count: u64,
}

impl AgePrediction {
    #[must_use]
    pub fn category(&self) -> AgeCategory {
        AgeCategory::from_age(self.age)
    }

    #[must_use]
    pub fn age_label(&self) -> String {
        format!("{} años", self.age)
    }

    #[must_use]
    pub fn sample_label(&self) -> String {
        format!("Basado en {} registros", group_thousands(self.count))
    }
}

pub const NOTICES: Notices = Notices {
    empty_input: "Por favor ingresa un nombre",
    miss_title: "No se encontró información",
    miss_description: "No se pudo determinar la edad para este nombre",
    miss_variant: NoticeVariant::Destructive,
    failure: "Error al consultar la API",
};

impl ScreenResult for AgePrediction {
    const NOTICES: Notices = NOTICES;
    const TOOL: Tool = Tool::Age;

    fn slot(state: &mut ScreenState) -> Option<&mut Screen<Self>> {
        match state {
            ScreenState::Age(screen) => Some(screen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(AgeCategory::from_age(0), AgeCategory::Young);
        assert_eq!(AgeCategory::from_age(29), AgeCategory::Young);
        assert_eq!(AgeCategory::from_age(30), AgeCategory::Adult);
        assert_eq!(AgeCategory::from_age(59), AgeCategory::Adult);
        assert_eq!(AgeCategory::from_age(60), AgeCategory::Elder);
        assert_eq!(AgeCategory::from_age(101), AgeCategory::Elder);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(AgeCategory::from_age(29).label(), "Joven");
        assert_eq!(AgeCategory::from_age(30).label(), "Adulto");
        assert_eq!(AgeCategory::from_age(60).label(), "Anciano");
    }

    #[test]
    fn test_prediction_labels() {
        let prediction = AgePrediction {
            name: "sarah".to_string(),
            age: 48,
            count: 1_002,
        };
        assert_eq!(prediction.age_label(), "48 años");
        assert_eq!(prediction.category(), AgeCategory::Adult);
        assert_eq!(prediction.sample_label(), "Basado en 1,002 registros");
    }
}

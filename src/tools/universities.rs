//! University search by country.

use super::{Notices, NoticeVariant, Screen, ScreenResult, ScreenState};
use crate::router::Tool;

/// Country the search field starts with.
pub const DEFAULT_COUNTRY: &str = "Dominican Republic";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct University {
    pub name: String,
    pub web_pages: Vec<String>,
    pub domains: Vec<String>,
    pub country: String,
}

impl University {
    #[must_use]
    pub fn domains_label(&self) -> String {
        self.domains.join(", ")
    }

    /// First listed web page, if any.
    #[must_use]
    pub fn homepage(&self) -> Option<&str> {
        self.web_pages.first().map(String::as_str)
    }
}

/// Summary line above the result list.
#[must_use]
pub fn found_label(count: usize) -> String {
    format!("Se encontraron {count} universidades")
}

pub const NOTICES: Notices = Notices {
    empty_input: "Por favor ingresa un país",
    miss_title: "No se encontraron resultados",
    miss_description: "No se encontraron universidades para este país",
    miss_variant: NoticeVariant::Default,
    failure: "Error al consultar la API",
};

impl ScreenResult for Vec<University> {
    const NOTICES: Notices = NOTICES;
    const TOOL: Tool = Tool::Universities;

    fn slot(state: &mut ScreenState) -> Option<&mut Screen<Self>> {
        match state {
            ScreenState::Universities(screen) => Some(screen),
            _ => None,
        }
    }
}

//! Latest WordPress.org news.

use chrono::NaiveDateTime;

use super::format::spanish_date;
use super::{Notices, NoticeVariant, Screen, ScreenResult, ScreenState};
use crate::router::Tool;

/// Characters of excerpt shown before the ellipsis.
pub const EXCERPT_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub id: u64,
    /// Title as rendered markup.
    pub title_html: String,
    /// Excerpt as rendered markup.
    pub excerpt_html: String,
    pub link: String,
    /// Publish date as sent by WordPress (`2024-10-15T10:00:00`).
    pub date: String,
}

impl NewsItem {
    #[must_use]
    pub fn title(&self) -> String {
        strip_html(&self.title_html)
    }

    /// Plain-text excerpt cut to [`EXCERPT_CHARS`], always followed by `...`.
    #[must_use]
    pub fn excerpt_preview(&self) -> String {
        let text: String = strip_html(&self.excerpt_html)
            .chars()
            .take(EXCERPT_CHARS)
            .collect();
        format!("{text}...")
    }

    /// Spanish long date, or the raw value when it does not parse.
    #[must_use]
    pub fn date_label(&self) -> String {
        NaiveDateTime::parse_from_str(&self.date, "%Y-%m-%dT%H:%M:%S")
            .map_or_else(|_| self.date.clone(), |dt| spanish_date(dt.date()))
    }
}

/// Text content of an HTML fragment: tags dropped, entities decoded.
#[must_use]
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    html_escape::decode_html_entities(&text).into_owned()
}

pub const NOTICES: Notices = Notices {
    empty_input: "",
    miss_title: "No se encontró información",
    miss_description: "No hay noticias disponibles",
    miss_variant: NoticeVariant::Default,
    failure: "Error al cargar las noticias",
};

impl ScreenResult for Vec<NewsItem> {
    const NOTICES: Notices = NOTICES;
    const TOOL: Tool = Tool::News;

    fn slot(state: &mut ScreenState) -> Option<&mut Screen<Self>> {
        match state {
            ScreenState::News(screen) => Some(screen),
            _ => None,
        }
    }
}

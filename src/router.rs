//! View router: which tool screen is active and whether the drawer is open.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The closed set of tool screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Landing page listing the tools.
    #[default]
    Home,
    /// Name-to-gender prediction.
    Gender,
    /// Name-to-age prediction.
    Age,
    /// University search by country.
    Universities,
    /// Current weather in Santo Domingo.
    Weather,
    /// Pokémon lookup.
    Creature,
    /// Latest WordPress.org news.
    News,
    /// Author profile and app description.
    About,
}

impl Tool {
    /// Every tool, in navigation order.
    pub const ALL: [Self; 8] = [
        Self::Home,
        Self::Gender,
        Self::Age,
        Self::Universities,
        Self::Weather,
        Self::Creature,
        Self::News,
        Self::About,
    ];

    /// URL slug used in `/tools/{slug}`.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Universities => "universities",
            Self::Weather => "weather",
            Self::Creature => "pokemon",
            Self::News => "news",
            Self::About => "about",
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::Gender => "Género",
            Self::Age => "Edad",
            Self::Universities => "Universidades",
            Self::Weather => "Clima RD",
            Self::Creature => "Pokémon",
            Self::News => "Noticias",
            Self::About => "Acerca de",
        }
    }

    /// Whether the screen fetches on its own as soon as it is mounted.
    #[must_use]
    pub fn fetches_on_mount(self) -> bool {
        matches!(self, Self::Weather | Self::News)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a slug names no tool.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl FromStr for Tool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.slug() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// Current tool plus the mobile navigation drawer flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewRouter {
    current: Tool,
    drawer_open: bool,
}

impl ViewRouter {
    /// Router on the home screen with the drawer closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active tool.
    #[must_use]
    pub fn current(&self) -> Tool {
        self.current
    }

    /// Whether the navigation drawer is open.
    #[must_use]
    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Select a tool and close the drawer.
    ///
    /// Returns `true` when the active tool changed.
    pub fn select(&mut self, tool: Tool) -> bool {
        self.drawer_open = false;
        let changed = self.current != tool;
        self.current = tool;
        changed
    }

    /// Flip the drawer open/closed.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        let router = ViewRouter::new();
        assert_eq!(router.current(), Tool::Home);
        assert!(!router.drawer_open());
    }

    #[test]
    fn test_select_closes_drawer() {
        let mut router = ViewRouter::new();
        router.toggle_drawer();
        assert!(router.drawer_open());

        assert!(router.select(Tool::Weather));
        assert_eq!(router.current(), Tool::Weather);
        assert!(!router.drawer_open());
    }

    #[test]
    fn test_reselect_reports_no_change() {
        let mut router = ViewRouter::new();
        assert!(router.select(Tool::Age));
        assert!(!router.select(Tool::Age));
    }

    #[test]
    fn test_slug_parsing() {
        for tool in Tool::ALL {
            assert_eq!(tool.slug().parse::<Tool>(), Ok(tool));
        }
        assert_eq!("pokemon".parse::<Tool>(), Ok(Tool::Creature));
        let err = "creature".parse::<Tool>().unwrap_err();
        assert_eq!(err, UnknownTool("creature".to_string()));
        assert_eq!(err.to_string(), "unknown tool: creature");
    }

    #[test]
    fn test_mount_fetching_tools() {
        let auto: Vec<Tool> = Tool::ALL
            .into_iter()
            .filter(|t| t.fetches_on_mount())
            .collect();
        assert_eq!(auto, vec![Tool::Weather, Tool::News]);
    }
}

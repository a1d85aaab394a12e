//! Tool screens.
//!
//! Every data-fetching screen owns a [`Screen`] state container holding its
//! input, loading flag, last result and current notice. The generic drivers
//! [`submit`] and [`load`] run one outbound request for the screen that is
//! mounted in a [`Session`], applying the outcome only if that same screen
//! instance is still mounted when the response arrives.
//!
//! # Modules
//!
//! - [`gender`], [`age`]: name-based predictions
//! - [`universities`]: university search by country
//! - [`weather`]: current conditions, fetched on mount
//! - [`creature`]: Pokémon lookup
//! - [`news`]: latest WordPress.org posts, fetched on mount
//! - [`format`]: display helpers shared by the screens

pub mod age;
pub mod creature;
pub mod format;
pub mod gender;
pub mod news;
pub mod universities;
pub mod weather;

use std::future::Future;

use tracing::{debug, warn};

use crate::error::{ErrorKind, ToolError};
use crate::router::Tool;
use crate::session::Session;

use age::AgePrediction;
use creature::Creature;
use gender::GenderPrediction;
use news::NewsItem;
use universities::University;
use weather::WeatherSnapshot;

/// Visual weight of a notice banner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoticeVariant {
    /// Informational.
    #[default]
    Default,
    /// Error styling.
    Destructive,
}

/// A transient, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NoticeVariant,
}

/// The texts one screen shows for each error tier.
#[derive(Debug, Clone, Copy)]
pub struct Notices {
    /// Shown when the input is blank.
    pub empty_input: &'static str,
    pub miss_title: &'static str,
    pub miss_description: &'static str,
    pub miss_variant: NoticeVariant,
    /// Shown for network, status and payload failures.
    pub failure: &'static str,
}

impl Notices {
    /// Notice for a blank input.
    #[must_use]
    pub fn validation(&self) -> Notice {
        Notice {
            title: "Error",
            description: self.empty_input,
            variant: NoticeVariant::Destructive,
        }
    }

    /// Notice for a failed request.
    #[must_use]
    pub fn for_error(&self, err: &ToolError) -> Notice {
        match err.kind() {
            ErrorKind::SemanticMiss => Notice {
                title: self.miss_title,
                description: self.miss_description,
                variant: self.miss_variant,
            },
            ErrorKind::Transport => Notice {
                title: "Error",
                description: self.failure,
                variant: NoticeVariant::Destructive,
            },
        }
    }
}

/// Why a request was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// Blank input; the validation notice is now showing.
    EmptyInput,
    /// A request from this screen is still in flight.
    Busy,
    /// The mount fetch already ran for this screen instance.
    AlreadyRequested,
    /// The screen is not the one currently mounted.
    Unmounted,
}

/// State container for one screen instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen<T> {
    input: String,
    loading: bool,
    requested: bool,
    result: Option<T>,
    notice: Option<Notice>,
}

impl<T> Default for Screen<T> {
    fn default() -> Self {
        Self {
            input: String::new(),
            loading: false,
            requested: false,
            result: None,
            notice: None,
        }
    }
}

impl<T> Screen<T> {
    /// Idle screen with an empty input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle screen with a pre-filled input.
    #[must_use]
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Screen that shows its loading state until the mount fetch runs.
    #[must_use]
    pub fn awaiting_mount() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Whether the mount fetch has not been started yet.
    pub fn awaiting_request(&self) -> bool {
        self.loading && !self.requested
    }

    /// Start a user submission and return the trimmed query.
    ///
    /// A blank input raises the validation notice and leaves the rest of
    /// the state untouched.
    pub fn begin(&mut self, raw_input: &str, notices: &Notices) -> Result<String, Rejected> {
        if self.requested && self.loading {
            return Err(Rejected::Busy);
        }
        self.input = raw_input.to_string();

        let query = raw_input.trim();
        if query.is_empty() {
            self.notice = Some(notices.validation());
            return Err(Rejected::EmptyInput);
        }

        self.notice = None;
        self.loading = true;
        self.requested = true;
        Ok(query.to_string())
    }

    /// Start the one-shot fetch of a screen that loads on mount.
    pub fn begin_mount(&mut self) -> Result<(), Rejected> {
        if self.requested {
            return Err(Rejected::AlreadyRequested);
        }
        self.loading = true;
        self.requested = true;
        Ok(())
    }

    /// Apply the outcome of the request started by `begin`/`begin_mount`.
    pub fn finish(&mut self, outcome: Result<T, ToolError>, notices: &Notices) {
        self.loading = false;
        match outcome {
            Ok(value) => {
                self.result = Some(value);
                self.notice = None;
            }
            Err(err) => {
                self.result = None;
                self.notice = Some(notices.for_error(&err));
            }
        }
    }
}

/// State of whichever screen is mounted.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ScreenState {
    #[default]
    Home,
    Gender(Screen<GenderPrediction>),
    Age(Screen<AgePrediction>),
    Universities(Screen<Vec<University>>),
    Weather(Screen<WeatherSnapshot>),
    Creature(Screen<Creature>),
    News(Screen<Vec<NewsItem>>),
    About,
}

impl ScreenState {
    /// Fresh state for a newly mounted screen.
    #[must_use]
    pub fn mount(tool: Tool) -> Self {
        match tool {
            Tool::Home => Self::Home,
            Tool::Gender => Self::Gender(Screen::new()),
            Tool::Age => Self::Age(Screen::new()),
            Tool::Universities => {
                Self::Universities(Screen::with_input(universities::DEFAULT_COUNTRY))
            }
            Tool::Weather => Self::Weather(Screen::awaiting_mount()),
            Tool::Creature => Self::Creature(Screen::new()),
            Tool::News => Self::News(Screen::awaiting_mount()),
            Tool::About => Self::About,
        }
    }

    /// The tool this state belongs to.
    #[must_use]
    pub fn tool(&self) -> Tool {
        match self {
            Self::Home => Tool::Home,
            Self::Gender(_) => Tool::Gender,
            Self::Age(_) => Tool::Age,
            Self::Universities(_) => Tool::Universities,
            Self::Weather(_) => Tool::Weather,
            Self::Creature(_) => Tool::Creature,
            Self::News(_) => Tool::News,
            Self::About => Tool::About,
        }
    }
}

/// A result type that lives in exactly one screen.
pub trait ScreenResult: Sized + Send + 'static {
    /// Texts for this screen's notices.
    const NOTICES: Notices;

    /// The tool whose screen holds this result.
    const TOOL: Tool;

    /// Borrow the screen for this result if it is the mounted one.
    fn slot(state: &mut ScreenState) -> Option<&mut Screen<Self>>;
}

/// Handle for an in-flight request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Mount generation the request was started under.
    pub mount: u64,
    /// Trimmed query (empty for mount fetches).
    pub query: String,
}

fn log_outcome<T>(tool: Tool, outcome: &Result<T, ToolError>) {
    if let Err(err) = outcome {
        match err.kind() {
            ErrorKind::Transport => {
                warn!(name: "upstream.failed", tool = %tool, error = %err, "Upstream request failed");
            }
            _ => {
                debug!(name: "upstream.miss", tool = %tool, error = %err, "Upstream had no data");
            }
        }
    }
}

/// Run a user submission on the mounted screen for `T`.
///
/// `fetch` receives the trimmed query and is called at most once; it is not
/// called for blank input or while the screen is already loading.
pub async fn submit<T, F, Fut>(session: &Session, raw_input: &str, fetch: F) -> Result<(), Rejected>
where
    T: ScreenResult,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<T, ToolError>>,
{
    let ticket = session.begin::<T>(raw_input)?;
    let outcome = fetch(ticket.query.clone()).await;
    log_outcome(T::TOOL, &outcome);
    session.complete(&ticket, outcome);
    Ok(())
}

/// Run the one-shot mount fetch of the mounted screen for `T`.
pub async fn load<T, F, Fut>(session: &Session, fetch: F) -> Result<(), Rejected>
where
    T: ScreenResult,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ToolError>>,
{
    let ticket = session.begin_mount::<T>()?;
    let outcome = fetch().await;
    log_outcome(T::TOOL, &outcome);
    session.complete(&ticket, outcome);
    Ok(())
}

//! Browser sessions and their in-memory store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::error::ToolError;
use crate::router::{Tool, ViewRouter};
use crate::tools::{Rejected, ScreenResult, ScreenState, Ticket};

/// One browser's view of the toolbox.
///
/// Cloning is cheap; clones share the same state.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    id: String,
    view: Mutex<View>,
    last_activity: RwLock<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct View {
    router: ViewRouter,
    screen: ScreenState,
    /// Bumped every time a screen is mounted.
    mount: u64,
}

impl Session {
    fn new(id: String) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                id,
                view: Mutex::new(View::default()),
                last_activity: RwLock::new(Utc::now()),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    fn view(&self) -> MutexGuard<'_, View> {
        self.touch();
        self.inner
            .view
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Select a tool, mounting a fresh screen if it differs from the current one.
    ///
    /// Returns `true` when a new screen was mounted.
    pub fn select(&self, tool: Tool) -> bool {
        let mut view = self.view();
        if !view.router.select(tool) {
            return false;
        }
        view.screen = ScreenState::mount(tool);
        view.mount += 1;
        true
    }

    pub fn toggle_drawer(&self) {
        self.view().router.toggle_drawer();
    }

    #[must_use]
    pub fn current_tool(&self) -> Tool {
        self.view().router.current()
    }

    /// Mount generation of the current screen.
    #[must_use]
    pub fn mount_generation(&self) -> u64 {
        self.view().mount
    }

    /// Read the router and the mounted screen under the session lock.
    pub fn with_view<R>(&self, f: impl FnOnce(&ViewRouter, &ScreenState) -> R) -> R {
        let view = self.view();
        f(&view.router, &view.screen)
    }

    /// Copy of the mounted screen state.
    #[must_use]
    pub fn screen(&self) -> ScreenState {
        self.view().screen.clone()
    }

    /// Start a submission on the mounted screen for `T`.
    pub fn begin<T: ScreenResult>(&self, raw_input: &str) -> Result<Ticket, Rejected> {
        let mut view = self.view();
        let mount = view.mount;
        let screen = T::slot(&mut view.screen).ok_or(Rejected::Unmounted)?;
        let query = screen.begin(raw_input, &T::NOTICES)?;
        Ok(Ticket { mount, query })
    }

    /// Start the mount fetch of the mounted screen for `T`.
    pub fn begin_mount<T: ScreenResult>(&self) -> Result<Ticket, Rejected> {
        let mut view = self.view();
        let mount = view.mount;
        let screen = T::slot(&mut view.screen).ok_or(Rejected::Unmounted)?;
        screen.begin_mount()?;
        Ok(Ticket {
            mount,
            query: String::new(),
        })
    }

    /// Apply an outcome if the screen that issued `ticket` is still mounted.
    ///
    /// Returns `false` when the outcome was discarded.
    pub fn complete<T: ScreenResult>(
        &self,
        ticket: &Ticket,
        outcome: Result<T, ToolError>,
    ) -> bool {
        let mut view = self.view();
        if view.mount != ticket.mount {
            debug!(
                name: "screen.result.discarded",
                session = %self.inner.id,
                tool = %T::TOOL,
                "Screen unmounted before its response arrived"
            );
            return false;
        }
        match T::slot(&mut view.screen) {
            Some(screen) => {
                screen.finish(outcome, &T::NOTICES);
                true
            }
            None => false,
        }
    }

    fn touch(&self) {
        let mut guard = self
            .inner
            .last_activity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Utc::now();
    }

    /// Whether the session has been idle longer than `timeout`.
    #[must_use]
    pub fn is_idle_longer_than(&self, timeout: Duration) -> bool {
        let last = *self
            .inner
            .last_activity
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        // A negative span means `last` is in the future.
        (Utc::now() - last)
            .to_std()
            .is_ok_and(|idle| idle > timeout)
    }
}

/// Thread-safe store for sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a fresh UUID.
    #[must_use]
    pub fn create(&self) -> Session {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone());
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, session.clone());
        session
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn remove(&self, id: &str) -> Option<Session> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop sessions idle longer than `timeout`; returns how many were removed.
    pub fn prune_idle(&self, timeout: Duration) -> usize {
        let mut guard = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = guard.len();
        guard.retain(|_, session| !session.is_idle_longer_than(timeout));
        before - guard.len()
    }
}

mod action;
mod auth;
mod course;

pub use action::{Action, AuthAction, CourseAction};
pub use auth::AuthState;
pub use course::CourseState;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// The full application state, one field per slice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub auth: AuthState,
    pub course: CourseState,
}

/// Single-writer state container. All mutation flows through
/// [`Store::dispatch`]; reads see the state between dispatches, so a render
/// pass always observes a consistent snapshot.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the application's starter catalog.
    pub fn seeded() -> Self {
        Self {
            state: AppState {
                auth: AuthState::default(),
                course: CourseState::seeded(),
            },
        }
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Owned copy of the current state, e.g. for handing off to a renderer.
    pub fn snapshot(&self) -> AppState {
        self.state.clone()
    }

    pub fn dispatch(&mut self, action: impl Into<Action>) {
        let action = action.into();
        debug!(?action, "dispatch");
        match action {
            Action::Auth(action) => self.state.auth.apply(action),
            Action::Course(action) => self.state.course.apply(action),
        }
    }
}

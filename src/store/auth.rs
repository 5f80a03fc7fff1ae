use serde::{Deserialize, Serialize};

use crate::models::{Role, User};
use crate::store::AuthAction;

/// Authentication slice: who is signed in, and whether the login form is
/// visible. `show_login` and `is_authenticated` are never both true —
/// logging in dismisses the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub show_login: bool,
}

impl AuthState {
    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::Login(user) => {
                self.user = Some(user);
                self.is_authenticated = true;
                self.show_login = false;
            }
            AuthAction::Logout => {
                self.user = None;
                self.is_authenticated = false;
                self.show_login = false;
            }
            AuthAction::ShowLoginForm => {
                self.show_login = true;
            }
            AuthAction::HideLoginForm => {
                self.show_login = false;
            }
        }
    }

    /// Only signed-in admins may edit courses and week content.
    pub fn can_edit(&self) -> bool {
        self.is_authenticated && self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_sets_user_and_dismisses_form() {
        let mut state = AuthState {
            show_login: true,
            ..AuthState::default()
        };
        let user = User::demo(Role::Admin);

        state.apply(AuthAction::Login(user.clone()));

        assert_eq!(state.user, Some(user));
        assert!(state.is_authenticated);
        assert!(!state.show_login);
    }

    #[test]
    fn logout_clears_identity() {
        let mut state = AuthState::default();
        state.apply(AuthAction::Login(User::demo(Role::User)));

        state.apply(AuthAction::Logout);

        assert_eq!(state.user, None);
        assert!(!state.is_authenticated);
        assert!(!state.show_login);
    }

    #[test]
    fn form_visibility_toggles_independently_of_auth() {
        let mut state = AuthState::default();

        state.apply(AuthAction::ShowLoginForm);
        assert!(state.show_login);

        state.apply(AuthAction::HideLoginForm);
        assert!(!state.show_login);
    }

    #[test]
    fn login_logout_cycle_repeats() {
        let mut state = AuthState::default();
        for _ in 0..3 {
            state.apply(AuthAction::Login(User::demo(Role::Admin)));
            assert!(state.is_authenticated);
            state.apply(AuthAction::Logout);
            assert!(!state.is_authenticated);
        }
    }

    #[test]
    fn only_authenticated_admins_can_edit() {
        let mut state = AuthState::default();
        assert!(!state.can_edit());

        state.apply(AuthAction::Login(User::demo(Role::User)));
        assert!(!state.can_edit());

        state.apply(AuthAction::Login(User::demo(Role::Admin)));
        assert!(state.can_edit());

        state.apply(AuthAction::Logout);
        assert!(!state.can_edit());
    }
}

// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Sign-in and sign-up form state.
//!
//! One component serves both forms; a mode flag selects which backend
//! operation a submission maps to. The rest of the application is not
//! reachable until a sign-in succeeds.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SignInMode {
    SignIn,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SignInField {
    Username,
    Password,
}

pub(crate) struct SignInView {
    pub(crate) mode: SignInMode,
    pub(crate) active_field: SignInField,
    pub(crate) username: Input,
    pub(crate) password: Input,
}

impl SignInView {
    pub(crate) fn new() -> Self {
        Self {
            mode: SignInMode::SignIn,
            active_field: SignInField::Username,
            username: Input::default(),
            password: Input::default(),
        }
    }

    /// Returns the form to sign-in mode, e.g. after a successful sign-up.
    pub(crate) fn show_sign_in(&mut self) {
        self.mode = SignInMode::SignIn;
        self.active_field = SignInField::Username;
        self.password.reset();
    }

    pub(crate) fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            SignInMode::SignIn => SignInMode::SignUp,
            SignInMode::SignUp => SignInMode::SignIn,
        };
    }

    pub(crate) fn next_field(&mut self) {
        self.active_field = match self.active_field {
            SignInField::Username => SignInField::Password,
            SignInField::Password => SignInField::Username,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_view_starts_in_sign_in_mode() {
        let view = SignInView::new();
        assert_eq!(view.mode, SignInMode::SignIn);
        assert_eq!(view.active_field, SignInField::Username);
    }

    #[test]
    fn test_toggle_mode_round_trips() {
        let mut view = SignInView::new();
        view.toggle_mode();
        assert_eq!(view.mode, SignInMode::SignUp);
        view.toggle_mode();
        assert_eq!(view.mode, SignInMode::SignIn);
    }

    #[test]
    fn test_show_sign_in_clears_the_password() {
        let mut view = SignInView::new();
        view.toggle_mode();
        view.password = Input::new("secret".to_string());

        view.show_sign_in();
        assert_eq!(view.mode, SignInMode::SignIn);
        assert_eq!(view.password.value(), "");
    }
}

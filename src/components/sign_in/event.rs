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

//! Event routing for the sign-in view.
//!
//! Keyboard input is delegated to the active text input; Tab moves between
//! fields, Ctrl-R flips between the sign-in and sign-up forms, and Enter
//! submits whichever form is showing.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::SignInView,
    components::sign_in::{SignInField, SignInMode},
};

impl AppEventProcessor for SignInView {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = &event else {
            return Ok(());
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('r'), modifiers) if modifiers == KeyModifiers::CONTROL => {
                self.toggle_mode();
            }

            (KeyCode::Tab, _) | (KeyCode::Down, _) | (KeyCode::Up, _) | (KeyCode::BackTab, _) => {
                self.next_field();
            }

            (KeyCode::Enter, _) => {
                let username = self.username.value().trim().to_string();
                let password = self.password.value().to_string();

                // Nothing to submit until both fields have content; the
                // server does all real validation.
                if !username.is_empty() && !password.is_empty() {
                    let submit = match self.mode {
                        SignInMode::SignIn => AppEvent::SubmitSignIn { username, password },
                        SignInMode::SignUp => AppEvent::SubmitSignUp { username, password },
                    };
                    event_tx.send(submit)?;
                }
            }

            _ => {
                let input = match self.active_field {
                    SignInField::Username => &mut self.username,
                    SignInField::Password => &mut self.password,
                };
                input.handle_event(&event);
            }
        }

        Ok(())
    }
}

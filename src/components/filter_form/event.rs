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

//! Event routing for the filter form.
//!
//! Tab and the arrow keys move between the five fields, Enter submits the
//! current filter as a new search query, and everything else is delegated
//! to the active text input.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    actions::events::{AppEvent, AppEventProcessor},
    components::FilterForm,
};

impl AppEventProcessor for FilterForm {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        let Event::Key(key_event) = &event else {
            return Ok(());
        };

        match key_event.code {
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.previous_field(),

            KeyCode::Enter => {
                // An all-empty filter is deliberately allowed through; it is
                // the broadest query the server accepts.
                event_tx.send(AppEvent::NewSearchQuery(self.filter()))?;
            }

            _ => {
                self.inputs[self.active].handle_event(&event);
            }
        }

        Ok(())
    }
}

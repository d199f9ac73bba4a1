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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (recording server, video player), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state,
//!    triggers commands to background workers (like the API worker or the
//!    player), and manages UI navigation logic.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView, StatusLine,
    actions::commands::AppCommand,
    model::{SearchFilter, VideoRecord},
    player::PlayerState,
    render::draw,
    session::Identity,
    spool::ClipHandle,
};

const FINE_VOLUME_DELTA: i32 = 1;
const VOLUME_DELTA: i32 = 5;

const FINE_SEEK_DELTA: i32 = 5;
const SEEK_DELTA: i32 = 20;

/// Which half of the search screen owns keyboard input.
#[derive(Debug, PartialEq)]
pub(crate) enum SearchFocus {
    FilterForm,
    Results,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SubmitSignIn { username: String, password: String },
    SubmitSignUp { username: String, password: String },
    SignedIn(Identity),
    SignInFailed(String),
    SignUpComplete(String),
    SignUpFailed(String),
    SignedOut,

    NewSearchQuery(SearchFilter),
    SearchResultsReady(Vec<VideoRecord>),
    SearchFailed(String),

    ActivateSelection,
    ClipReady(VideoRecord, ClipHandle),
    ClipLoadFailed(String),

    PlayerStateChanged(PlayerState),
    TitleChanged(String),
    DurationChanged(u64),
    TimeChanged(f64),
    VolumeChanged(u32),
    ClipFinished,

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            // Authentication
            AppEvent::SubmitSignIn { username, password } => {
                app.status = Some(StatusLine::info("Signing in..."));
                app.command_tx.send(AppCommand::SignIn { username, password })?;
            }
            AppEvent::SubmitSignUp { username, password } => {
                app.status = Some(StatusLine::info("Creating account..."));
                app.command_tx.send(AppCommand::SignUp { username, password })?;
            }
            AppEvent::SignedIn(identity) => {
                app.status = Some(StatusLine::info(format!("Signed in as {}", identity.username)));
                app.session.sign_in(identity);
                app.main_view = MainView::Search;
                app.search_focus = SearchFocus::FilterForm;
            }
            AppEvent::SignInFailed(reason) => app.status = Some(StatusLine::error(reason)),
            AppEvent::SignUpComplete(message) => {
                app.sign_in_view.show_sign_in();
                app.status = Some(StatusLine::info(message));
            }
            AppEvent::SignUpFailed(reason) => app.status = Some(StatusLine::error(reason)),
            AppEvent::SignedOut => {
                app.session.sign_out();
                app.result_table.set_records(vec![]);
                app.main_view = MainView::SignIn;
                app.status = None;
            }

            // Search
            AppEvent::NewSearchQuery(filter) => {
                app.status = Some(StatusLine::info("Searching..."));
                app.command_tx.send(AppCommand::Search(filter))?;
            }
            AppEvent::SearchResultsReady(records) => {
                app.status = Some(StatusLine::info(format!("{} clip(s) found", records.len())));
                // Replaced wholesale; a new search never merges into the old
                // result set.
                app.result_table.set_records(records);
                app.search_focus = SearchFocus::Results;
            }
            AppEvent::SearchFailed(reason) => {
                // The previous result set stays bound on failure.
                app.status = Some(StatusLine::error(reason));
            }

            // Playback
            AppEvent::ActivateSelection => {
                if let Some(record) = app.result_table.selected_record() {
                    app.status = Some(StatusLine::info(format!("Loading {}...", record.filename)));
                    app.command_tx.send(AppCommand::LoadClip(record.clone()))?;
                }
            }
            AppEvent::ClipReady(record, handle) => {
                app.status = None;
                app.video_player.play_clip(handle.path())?;
                app.now_playing = Some(record);
                // Binding the new clip drops the superseded handle, which
                // releases its spooled file.
                app.current_clip = Some(handle);
            }
            AppEvent::ClipLoadFailed(reason) => {
                // The previous clip, if any, stays bound on failure.
                app.status = Some(StatusLine::error(reason));
            }

            // Player state
            AppEvent::PlayerStateChanged(state) => app.player_state = state,
            AppEvent::TitleChanged(title) => app.player_clip_title = Some(title),
            AppEvent::DurationChanged(dur) => app.player_duration = Some(dur),
            AppEvent::VolumeChanged(vol) => app.volume = Some(vol),
            AppEvent::ClipFinished => app.player_time = app.player_duration,
            AppEvent::TimeChanged(seconds) => {
                app.player_time = Some(seconds as u64);
                if let Some(duration) = app.player_duration {
                    app.player_position = if duration > 0 {
                        Some(seconds / duration as f64)
                    } else {
                        None
                    };
                }
            }

            AppEvent::Tick => {}

            AppEvent::Error(message) => app.status = Some(StatusLine::error(message)),
            AppEvent::FatalError(message) => {
                app.status = Some(StatusLine::error(format!("Fatal: {}", message)));
            }

            AppEvent::ExitApplication => unreachable!(),
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions and playback commands.
///
/// This function acts as the primary input router for the TUI. While signed
/// out, every key goes to the sign-in screen; nothing else is reachable.
/// Once signed in, input is routed by search-screen focus: the filter form
/// consumes typing, and the result list owns navigation and the playback
/// controls.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl-C quits from anywhere, including text inputs.
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    if !app.session.is_authenticated() {
        if key.code == KeyCode::Esc {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
        return app.sign_in_view.process_event(Event::Key(key), &app.event_tx);
    }

    match app.search_focus {
        SearchFocus::FilterForm => match key.code {
            KeyCode::Esc => {
                app.search_focus = SearchFocus::Results;
                Ok(())
            }
            _ => app.filter_form.process_event(Event::Key(key), &app.event_tx),
        },
        SearchFocus::Results => process_results_key_event(app, key),
    }
}

/// Key handling for the result list and the playback controls.
fn process_results_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('e'), _) | (KeyCode::Char('/'), _) => {
            app.search_focus = SearchFocus::FilterForm;
        }

        (KeyCode::Char('o'), modifiers) if modifiers == KeyModifiers::CONTROL => {
            app.command_tx.send(AppCommand::SignOut)?;
        }

        // Result navigation and clip activation
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) => app.result_table.goto_next(),
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) => app.result_table.goto_previous(),
        (KeyCode::Char('g'), _) => app.result_table.goto_first(),
        (KeyCode::Char('G'), _) => app.result_table.goto_last(),
        (KeyCode::Enter, _) => app.event_tx.send(AppEvent::ActivateSelection)?,

        // Playback controls; toggle and stop are no-ops with no clip bound
        (KeyCode::Char(' '), _) => {
            if app.current_clip.is_some() {
                app.video_player.toggle_pause()?;
            }
        }
        (KeyCode::Char('s'), _) => {
            if app.current_clip.is_some() {
                app.video_player.stop()?;
            }
        }
        (KeyCode::Char(','), _) => app.video_player.seek(-FINE_SEEK_DELTA)?,
        (KeyCode::Char('.'), _) => app.video_player.seek(FINE_SEEK_DELTA)?,
        (KeyCode::Char('<'), _) => app.video_player.seek(-SEEK_DELTA)?,
        (KeyCode::Char('>'), _) => app.video_player.seek(SEEK_DELTA)?,
        (KeyCode::Char('-'), _) => app.video_player.adjust_volume(-FINE_VOLUME_DELTA)?,
        (KeyCode::Char('='), _) => app.video_player.adjust_volume(FINE_VOLUME_DELTA)?,
        (KeyCode::Char('_'), _) => app.video_player.adjust_volume(-VOLUME_DELTA)?,
        (KeyCode::Char('+'), _) => app.video_player.adjust_volume(VOLUME_DELTA)?,
        (KeyCode::Char('m'), _) => app.video_player.toggle_mute()?,

        _ => {}
    }

    Ok(())
}

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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking
//! backend requests from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppCommand`] requests into HTTP calls against the
//! recording server and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! The worker processes commands strictly in submission order. Overlapping
//! submissions are never coalesced or cancelled; each completes and reports
//! independently, and state on the UI side reflects whichever result is
//! processed last.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::info;

use crate::{
    actions::events::AppEvent,
    api::ApiClient,
    config::AppConfig,
    model::{SearchFilter, VideoRecord},
    spool::ClipSpool,
};

#[derive(Debug)]
pub(crate) enum AppCommand {
    SignIn { username: String, password: String },
    SignUp { username: String, password: String },
    SignOut,
    Search(SearchFilter),
    LoadClip(VideoRecord),
    ExitApplication,
}

/// Spawns a background thread to process application commands.
///
/// This worker thread initializes its own API client and clip spool and
/// enters a blocking loop, listening for incoming [`AppCommand`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `command_rx` - The receiving end of the command channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();
    let error_tx = event_tx.clone();

    thread::spawn(move || {
        let mut api = match ApiClient::new(&config.server_url) {
            Ok(api) => api,
            Err(e) => {
                let _ = error_tx.send(AppEvent::FatalError(format!("API client failure: {:?}", e)));
                return;
            }
        };

        let spool = match ClipSpool::new() {
            Ok(spool) => spool,
            Err(e) => {
                let _ = error_tx.send(AppEvent::FatalError(format!("Clip spool failure: {:?}", e)));
                return;
            }
        };

        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&mut api, &spool, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Orchestrates the execution of a single command.
///
/// This function implements the logic for each command and sends the result
/// back through the application event channel. Backend failures are reported
/// as ordinary events, never as loop errors; each failure is terminal to its
/// own command only.
fn handle_command(
    api: &mut ApiClient,
    spool: &ClipSpool,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::SignIn { username, password } => {
            match api.sign_in(&username, &password) {
                Ok(identity) => event_tx.send(AppEvent::SignedIn(identity))?,
                Err(e) => event_tx.send(AppEvent::SignInFailed(e.to_string()))?,
            }
        }
        AppCommand::SignUp { username, password } => {
            match api.sign_up(&username, &password) {
                Ok(message) => event_tx.send(AppEvent::SignUpComplete(message))?,
                Err(e) => event_tx.send(AppEvent::SignUpFailed(e.to_string()))?,
            }
        }
        AppCommand::SignOut => {
            api.sign_out();
            event_tx.send(AppEvent::SignedOut)?;
        }
        AppCommand::Search(filter) => {
            match api.search(&filter) {
                Ok(records) => event_tx.send(AppEvent::SearchResultsReady(records))?,
                Err(e) => event_tx.send(AppEvent::SearchFailed(e.to_string()))?,
            }
        }
        AppCommand::LoadClip(record) => {
            info!("Loading clip {} ({})", record.video_id, record.filename);
            match api.fetch_clip(&record.video_id) {
                Ok(bytes) => {
                    // Spool to a local file only after the fetch succeeded;
                    // a failed load leaves the previous clip bound.
                    let handle = spool.store(&record.video_id, &bytes)?;
                    info!("Clip {} ready for playback", handle.video_id());
                    event_tx.send(AppEvent::ClipReady(record, handle))?;
                }
                Err(e) => event_tx.send(AppEvent::ClipLoadFailed(e.to_string()))?,
            }
        }
        AppCommand::ExitApplication => {
            event_tx.send(AppEvent::ExitApplication)?;
        }
    }

    Ok(())
}

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

//! Video playback control and state management.
//!
//! This module provides the high-level [`VideoPlayer`] interface used by the
//! UI to control clip playback. It manages a background worker thread that
//! interfaces with the underlying media library (MPV), ensuring that heavy
//! media operations do not block the main application thread.

mod commands;

use std::{path::Path, sync::mpsc};

use anyhow::Result;

use crate::{actions::events::AppEvent, player::commands::VideoPlayerCommand};

/// Represents the current playback status of the media engine.
///
/// `Empty` means no clip is bound; the toggle and stop controls are no-ops
/// there. A successful clip bind leaves the engine `Playing` (the bind
/// autoplays), and stop returns it to `Paused` at the start of the clip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Empty,
    Paused,
    Playing,
}

/// A handle to the video playback engine.
///
/// This struct acts as a command proxy; it does not perform media processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct VideoPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<VideoPlayerCommand>,
}

impl VideoPlayer {
    /// Spawns the media worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send application-level events (like
    ///   progress updates or errors) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<VideoPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self { command_tx })
    }

    // Maps internal media backend flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Empty
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    /// Instructs the worker to bind and play a spooled clip.
    ///
    /// Binding replaces whatever clip was loaded before and starts playback
    /// as soon as the engine has the new source ready.
    pub(crate) fn play_clip(&self, path: &Path) -> Result<()> {
        self.command_tx
            .send(VideoPlayerCommand::PlayClip(path.display().to_string()))?;
        Ok(())
    }

    /// Toggles the playback state between paused and playing.
    pub(crate) fn toggle_pause(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::TogglePause)?;
        Ok(())
    }

    /// Pauses playback and resets the position to the start of the clip.
    pub(crate) fn stop(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::Stop)?;
        Ok(())
    }

    /// Adjusts the playback volume relative to the current level.
    pub(crate) fn adjust_volume(&self, delta: i32) -> Result<()> {
        self.command_tx
            .send(VideoPlayerCommand::AdjustVolume(delta))?;
        Ok(())
    }

    /// Toggles the audio output between muted and unmuted.
    pub(crate) fn toggle_mute(&self) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::ToggleMute)?;
        Ok(())
    }

    /// Adjusts the playback position forward or backwards relative to the
    /// current position.
    pub(crate) fn seek(&self, delta: i32) -> Result<()> {
        self.command_tx.send(VideoPlayerCommand::Seek(delta))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_engine_is_empty_regardless_of_pause_flag() {
        assert_eq!(VideoPlayer::player_state(false, true), PlayerState::Empty);
        assert_eq!(VideoPlayer::player_state(true, true), PlayerState::Empty);
    }

    #[test]
    fn test_bound_engine_follows_the_pause_flag() {
        assert_eq!(VideoPlayer::player_state(true, false), PlayerState::Paused);
        assert_eq!(VideoPlayer::player_state(false, false), PlayerState::Playing);
    }
}

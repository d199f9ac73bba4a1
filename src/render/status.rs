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

//! Render the status line.
//!
//! The bottom line of the frame carries the most recent outcome message
//! (search failures, sign-in results, load progress) and, when signed in,
//! the identity on the right-hand side.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::App;

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .horizontal_margin(1)
        .split(area);

    if let Some(status) = &app.status {
        let colour = if status.is_error {
            app.theme.error_colour
        } else {
            Color::White
        };

        f.render_widget(
            Paragraph::new(status.text.as_str()).style(Style::default().fg(colour)),
            container[0],
        );
    }

    if let Some(identity) = app.session.identity() {
        let who = format!("{} ({})", identity.username, identity.role);
        f.render_widget(
            Paragraph::new(who)
                .alignment(Alignment::Right)
                .style(Style::default().fg(app.theme.table_time_fg)),
            container[1],
        );
    }
}

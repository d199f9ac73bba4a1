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

//! UI rendering logic for the result table.
//!
//! This module handles the visual representation of matched clips, including
//! column layout, selection highlighting, and theme application using the
//! Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::{components::ResultTable, render::Render, theme::Theme};

impl Render for ResultTable {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.records.iter().map(|item| {
            let camera = item.camera_id.as_deref().unwrap_or("-");
            let plates = if item.plates_found.is_empty() {
                "-".to_string()
            } else {
                item.plates_found.join(", ")
            };

            Row::new(vec![
                Cell::from(Line::from(item.upload_date_ist.as_str()).style(Style::default().fg(theme.table_time_fg))),
                Cell::from(Line::from(camera).style(Style::default().fg(theme.table_camera_fg))),
                Cell::from(Line::from(plates).style(Style::default().fg(theme.table_plate_fg))),
                Cell::from(Line::from(item.filename.as_str()).style(Style::default().fg(theme.table_clip_fg))),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(20),
                Constraint::Length(10),
                Constraint::Percentage(25),
                Constraint::Percentage(55),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("Recorded"),
                Cell::from("Camera"),
                Cell::from("Plates"),
                Cell::from("Clip"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(
            Block::default()
                .title(" Results ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_colour)),
        );

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}

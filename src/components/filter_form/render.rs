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

//! UI rendering logic for the filter form.
//!
//! The five criteria fields are laid out in a single bordered row, with the
//! active field highlighted in the accent colour.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::FilterForm, model::FilterField, render::Render, theme::Theme};

impl Render for FilterForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(22),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(18),
                Constraint::Percentage(20),
            ])
            .split(inner_area);

        for (index, field) in FilterField::ALL.iter().enumerate() {
            let active = *field == self.active_field();
            draw_field(
                f,
                chunks[index],
                theme,
                field.label(),
                self.inputs[index].value(),
                active,
            );
        }
    }
}

fn draw_field(f: &mut Frame, area: Rect, theme: &Theme, label: &str, value: &str, active: bool) {
    let label_style = if active {
        Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour)
    } else {
        Style::default().fg(theme.table_time_fg)
    };

    let cursor = if active { "_" } else { "" };

    let lines = vec![
        Line::from(Span::styled(label.to_string(), label_style)),
        Line::from(vec![
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
            Span::styled(cursor, Style::default().fg(theme.accent_colour)),
        ]),
    ];

    f.render_widget(Paragraph::new(lines), area);
}

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

//! UI rendering logic for the sign-in view.
//!
//! Draws a centered form box with the two credential fields, highlighting
//! the active one, and a key hint line for switching between the sign-in
//! and sign-up forms.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::SignInView,
    components::sign_in::{SignInField, SignInMode},
    render::Render,
    theme::Theme,
};

const FORM_WIDTH: u16 = 44;
const FORM_HEIGHT: u16 = 8;

impl Render for SignInView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let form_area = centered_area(area);

        let title = match self.mode {
            SignInMode::SignIn => " Sign in ",
            SignInMode::SignUp => " Create account ",
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let inner_area = block.inner(form_area);
        f.render_widget(block, form_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner_area);

        let masked_password = "*".repeat(self.password.value().chars().count());

        draw_field(
            f,
            chunks[1],
            theme,
            "Username",
            self.username.value(),
            self.active_field == SignInField::Username,
        );
        draw_field(
            f,
            chunks[2],
            theme,
            "Password",
            &masked_password,
            self.active_field == SignInField::Password,
        );

        let hint = match self.mode {
            SignInMode::SignIn => "Enter sign in | Tab field | Ctrl-R sign up",
            SignInMode::SignUp => "Enter create | Tab field | Ctrl-R sign in",
        };

        let hint_line = Paragraph::new(hint)
            .alignment(Alignment::Center)
            .fg(theme.table_time_fg);
        f.render_widget(hint_line, chunks[4]);
    }
}

fn draw_field(f: &mut Frame, area: Rect, theme: &Theme, label: &str, value: &str, active: bool) {
    let label_style = if active {
        Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour)
    } else {
        Style::default().fg(Color::White)
    };

    let cursor = if active { "_" } else { "" };

    let line = Line::from(vec![
        Span::styled(format!("{:<10}", label), label_style),
        Span::raw(value.to_string()),
        Span::styled(cursor, Style::default().fg(theme.accent_colour)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

// Centers the fixed-size form box inside the given area.
fn centered_area(area: Rect) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    let height = FORM_HEIGHT.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

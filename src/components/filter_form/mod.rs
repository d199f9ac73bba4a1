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

//! Clip search form state.
//!
//! Five free-text criteria fields, one text input each. No field is
//! validated here; whatever the user typed is handed to the server as-is,
//! and an entirely empty form is a valid broadest query.

mod event;
mod render;

use tui_input::Input;

use crate::model::{FilterField, SearchFilter};

pub(crate) struct FilterForm {
    pub(crate) inputs: [Input; 5],
    pub(crate) active: usize,
}

impl FilterForm {
    pub(crate) fn new() -> Self {
        Self {
            inputs: std::array::from_fn(|_| Input::default()),
            active: 0,
        }
    }

    pub(crate) fn active_field(&self) -> FilterField {
        FilterField::ALL[self.active]
    }

    pub(crate) fn next_field(&mut self) {
        self.active = (self.active + 1) % FilterField::ALL.len();
    }

    pub(crate) fn previous_field(&mut self) {
        self.active = (self.active + FilterField::ALL.len() - 1) % FilterField::ALL.len();
    }

    /// Builds the filter from the current field values.
    pub(crate) fn filter(&self) -> SearchFilter {
        let mut filter = SearchFilter::default();
        for (field, input) in FilterField::ALL.iter().zip(self.inputs.iter()) {
            filter.set_field(*field, input.value().trim().to_string());
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = FilterForm::new();
        assert_eq!(form.active_field(), FilterField::Date);

        form.previous_field();
        assert_eq!(form.active_field(), FilterField::Plate);

        form.next_field();
        assert_eq!(form.active_field(), FilterField::Date);
    }

    #[test]
    fn test_filter_reflects_typed_values() {
        let mut form = FilterForm::new();
        form.inputs[0] = Input::new("2026-01-05".to_string());
        form.inputs[4] = Input::new("  KA01AB1234 ".to_string());

        let filter = form.filter();
        assert_eq!(filter.date, "2026-01-05");
        assert_eq!(filter.plate, "KA01AB1234");
        assert_eq!(filter.camera_id, "");
    }

    #[test]
    fn test_untouched_form_builds_the_empty_filter() {
        let form = FilterForm::new();
        assert_eq!(form.filter(), SearchFilter::default());
    }
}

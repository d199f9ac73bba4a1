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

//! Interactive result table widget and state management.
//!
//! This module provides the table component for displaying the clips
//! matched by the last search. The record list is replaced wholesale with
//! every successful search, in the order the server returned it, and one
//! record at a time can be selected for playback.

mod render;

use ratatui::widgets::TableState;

use crate::model::VideoRecord;

pub(crate) struct ResultTable {
    pub(crate) records: Vec<VideoRecord>,
    pub(crate) table_state: TableState,
}

impl ResultTable {
    pub(crate) fn new() -> Self {
        Self {
            records: vec![],
            table_state: TableState::new(),
        }
    }

    /// Replaces the record list in full and selects the first row.
    pub(crate) fn set_records(&mut self, records: Vec<VideoRecord>) {
        self.records = records;
        self.table_state = TableState::new();
        if !self.records.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn selected_record(&self) -> Option<&VideoRecord> {
        self.table_state
            .selected()
            .and_then(|index| self.records.get(index))
    }

    pub(crate) fn goto_next(&mut self) {
        let len = self.records.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_previous(&mut self) {
        let len = self.records.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_first(&mut self) {
        if !self.records.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub(crate) fn goto_last(&mut self) {
        if !self.records.is_empty() {
            self.table_state.select(Some(self.records.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(video_id: &str) -> VideoRecord {
        VideoRecord {
            video_id: video_id.to_string(),
            filename: format!("{}.mp4", video_id),
            upload_date_ist: "2026-01-05 08:00:00".to_string(),
            camera_id: Some("CAM_1".to_string()),
            plates_found: vec![],
        }
    }

    #[test]
    fn test_set_records_replaces_wholesale_and_selects_first() {
        let mut table = ResultTable::new();
        table.set_records(vec![record("1"), record("2")]);
        table.goto_next();

        table.set_records(vec![record("3")]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.selected_record().unwrap().video_id, "3");
    }

    #[test]
    fn test_empty_result_set_clears_the_selection() {
        let mut table = ResultTable::new();
        table.set_records(vec![record("1")]);

        table.set_records(vec![]);
        assert!(table.selected_record().is_none());
        table.goto_next();
        assert!(table.selected_record().is_none());
    }

    #[test]
    fn test_navigation_wraps_in_both_directions() {
        let mut table = ResultTable::new();
        table.set_records(vec![record("1"), record("2"), record("3")]);

        table.goto_previous();
        assert_eq!(table.selected_record().unwrap().video_id, "3");

        table.goto_next();
        assert_eq!(table.selected_record().unwrap().video_id, "1");
    }

    #[test]
    fn test_records_keep_server_order() {
        let mut table = ResultTable::new();
        table.set_records(vec![record("2"), record("1")]);

        let ids: Vec<&str> = table.records.iter().map(|r| r.video_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }
}

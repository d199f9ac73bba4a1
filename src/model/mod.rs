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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—the search
//! filter the user edits, and the video records the recording server returns
//! for it.

use serde::Deserialize;

/// One field of the [`SearchFilter`], also used to drive focus in the filter
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FilterField {
    Date,
    StartTime,
    EndTime,
    CameraId,
    Plate,
}

impl FilterField {
    /// All fields, in the order they are serialized and rendered.
    pub(crate) const ALL: [FilterField; 5] = [
        FilterField::Date,
        FilterField::StartTime,
        FilterField::EndTime,
        FilterField::CameraId,
        FilterField::Plate,
    ];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            FilterField::Date => "Date (YYYY-MM-DD)",
            FilterField::StartTime => "Start (HH:MM:SS)",
            FilterField::EndTime => "End (HH:MM:SS)",
            FilterField::CameraId => "Camera",
            FilterField::Plate => "Plate",
        }
    }
}

/// User-entered criteria for locating recorded clips.
///
/// All fields are optional free text; the server does any validation. A field
/// is included in the outgoing query iff it is non-empty.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct SearchFilter {
    pub(crate) date: String,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
    pub(crate) camera_id: String,
    pub(crate) plate: String,
}

impl SearchFilter {
    /// Replaces a single field, leaving the others untouched.
    pub(crate) fn set_field(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Date => self.date = value,
            FilterField::StartTime => self.start_time = value,
            FilterField::EndTime => self.end_time = value,
            FilterField::CameraId => self.camera_id = value,
            FilterField::Plate => self.plate = value,
        }
    }

    /// Serializes the filter into query parameters.
    ///
    /// Only non-empty fields are included, always in the fixed order
    /// {date, start_time, end_time, camera_id, plate}. An all-empty filter
    /// yields no parameters, which the server treats as the broadest query.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("date", self.date.as_str()),
            ("start_time", self.start_time.as_str()),
            ("end_time", self.end_time.as_str()),
            ("camera_id", self.camera_id.as_str()),
            ("plate", self.plate.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

/// One recorded clip's metadata, as returned by the recording server.
///
/// The collection order is the server's order; it is never re-sorted here.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct VideoRecord {
    pub(crate) video_id: String,
    pub(crate) filename: String,
    pub(crate) upload_date_ist: String,
    // The server emits null for clips stored before camera tagging existed.
    #[serde(default)]
    pub(crate) camera_id: Option<String>,
    #[serde(default)]
    pub(crate) plates_found: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_skips_empty_fields() {
        let mut filter = SearchFilter::default();
        filter.set_field(FilterField::Date, "2026-01-05".to_string());
        filter.set_field(FilterField::Plate, "KA01AB1234".to_string());

        assert_eq!(
            filter.query_pairs(),
            vec![("date", "2026-01-05"), ("plate", "KA01AB1234")]
        );
    }

    #[test]
    fn test_query_pairs_fixed_order() {
        let filter = SearchFilter {
            date: "2026-01-05".to_string(),
            start_time: "08:00:00".to_string(),
            end_time: "09:30:00".to_string(),
            camera_id: "CAM_67".to_string(),
            plate: "KA01AB1234".to_string(),
        };

        let keys: Vec<&str> = filter.query_pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["date", "start_time", "end_time", "camera_id", "plate"]);
    }

    #[test]
    fn test_empty_filter_is_a_valid_broadest_query() {
        let filter = SearchFilter::default();
        assert!(filter.query_pairs().is_empty());
    }

    #[test]
    fn test_set_field_replaces_only_one_field() {
        let mut filter = SearchFilter::default();
        filter.set_field(FilterField::CameraId, "CAM_12".to_string());
        filter.set_field(FilterField::CameraId, "CAM_67".to_string());

        assert_eq!(filter.camera_id, "CAM_67");
        assert_eq!(filter.date, "");
        assert_eq!(filter.plate, "");
    }

    #[test]
    fn test_video_record_tolerates_missing_optional_fields() {
        let json = r#"{"video_id":"abc123","filename":"cam.mp4","upload_date_ist":"2026-01-05 08:15:00"}"#;
        let record: VideoRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.video_id, "abc123");
        assert!(record.camera_id.is_none());
        assert!(record.plates_found.is_empty());
    }
}

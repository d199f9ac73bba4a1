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

//! Interactive UI components.
//!
//! Each component pairs its state container with input handling and
//! rendering sub-modules:
//!
//! * [`sign_in`]: the sign-in / sign-up form pair that gates the rest of the
//!   application.
//! * [`filter_form`]: the five-field clip search form.
//! * [`result_table`]: the table of clips matching the last search.

mod filter_form;
mod result_table;
mod sign_in;

pub(crate) use filter_form::FilterForm;
pub(crate) use result_table::ResultTable;
pub(crate) use sign_in::SignInView;

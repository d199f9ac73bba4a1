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

//! HTTP client for the recording server.
//!
//! All backend traffic goes through [`ApiClient`]: sign-in and sign-up,
//! clip search, and decrypted clip retrieval. The client retains the
//! credentials accepted at sign-in and injects them into every subsequent
//! request, so callers never handle authentication themselves.
//!
//! Failures are split into two classes the UI presents differently: reasons
//! the server itself reported, surfaced verbatim, and transport failures
//! where no reply arrived at all.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::{model::{SearchFilter, VideoRecord}, session::Identity};

const USER_AGENT: &str = "camwatch/0.1";

/// Generous enough for a full clip body on a slow link.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

const HEADER_USERNAME: &str = "X-Username";
const HEADER_PASSWORD: &str = "X-Password";

/// A failed backend operation.
#[derive(Error, Debug)]
pub(crate) enum ApiError {
    /// The request never reached the server, or no reply came back. The
    /// display form is deliberately generic so it can never be mistaken for
    /// a server-reported reason.
    #[error("network error")]
    Network(#[source] reqwest::Error),

    /// The server answered and described the failure itself; surfaced
    /// verbatim.
    #[error("{0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
struct Credentials {
    username: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    username: String,
    #[serde(default)]
    role: String,
}

/// Blocking HTTP client bound to one recording server.
pub(crate) struct ApiClient {
    client: reqwest::blocking::Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl ApiClient {
    pub(crate) fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Cannot build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
        })
    }

    /// Verifies credentials against the server.
    ///
    /// On success the credentials are retained and injected into every
    /// subsequent search and clip request.
    pub(crate) fn sign_in(&mut self, username: &str, password: &str) -> Result<Identity, ApiError> {
        info!("POST /login for user {}", username);

        let response = self
            .client
            .post(format!("{}/login", self.base_url))
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .map_err(ApiError::Network)?;

        let status = response.status();
        let body = response.text().map_err(ApiError::Network)?;

        if !status.is_success() {
            warn!("Sign in failed with HTTP {}", status);
            return Err(ApiError::Backend(
                parse_error_reason(&body).unwrap_or_else(|| "sign in failed".to_string()),
            ));
        }

        let parsed: SignInResponse = serde_json::from_str(&body)
            .map_err(|_| ApiError::Backend("sign in failed".to_string()))?;

        self.credentials = Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        });

        Ok(Identity {
            username: parsed.username,
            role: parsed.role,
        })
    }

    /// Registers a new account and returns the server's confirmation
    /// message. Does not sign the new user in.
    pub(crate) fn sign_up(&self, username: &str, password: &str) -> Result<String, ApiError> {
        info!("POST /register for user {}", username);

        let response = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .map_err(ApiError::Network)?;

        let status = response.status();
        let body = response.text().map_err(ApiError::Network)?;

        if !status.is_success() {
            warn!("Sign up failed with HTTP {}", status);
            return Err(ApiError::Backend(
                parse_error_reason(&body).unwrap_or_else(|| "sign up failed".to_string()),
            ));
        }

        Ok(parse_error_reason(&body).unwrap_or_else(|| "account created".to_string()))
    }

    pub(crate) fn sign_out(&mut self) {
        self.credentials = None;
    }

    /// Runs a clip search with the given filter.
    ///
    /// The result list is the server's, in the server's order. A success
    /// response whose body is not a record array is treated as an empty
    /// result set rather than an error.
    pub(crate) fn search(&self, filter: &SearchFilter) -> Result<Vec<VideoRecord>, ApiError> {
        let pairs = filter.query_pairs();
        info!("GET /search with {} filter field(s)", pairs.len());

        let response = self
            .authenticated(self.client.get(format!("{}/search", self.base_url)))
            .query(&pairs)
            .send()
            .map_err(ApiError::Network)?;

        let status = response.status();
        let body = response.text().map_err(ApiError::Network)?;

        if !status.is_success() {
            warn!("Search failed with HTTP {}", status);
            return Err(ApiError::Backend(
                parse_error_reason(&body).unwrap_or_else(|| "search failed".to_string()),
            ));
        }

        let records = parse_search_results(&body);
        info!("Search returned {} record(s)", records.len());
        Ok(records)
    }

    /// Fetches the decrypted bytes of one clip.
    pub(crate) fn fetch_clip(&self, video_id: &str) -> Result<Vec<u8>, ApiError> {
        info!("GET /video/decrypted/{}", video_id);

        let response = self
            .authenticated(
                self.client
                    .get(format!("{}/video/decrypted/{}", self.base_url, video_id)),
            )
            .send()
            .map_err(ApiError::Network)?;

        let status = response.status();

        if !status.is_success() {
            // Clip failures come back as plain text, not JSON.
            let body = response.text().map_err(ApiError::Network)?;
            warn!("Clip fetch failed with HTTP {}", status);
            let reason = if body.trim().is_empty() {
                "failed to load video".to_string()
            } else {
                body
            };
            return Err(ApiError::Backend(reason));
        }

        let bytes = response.bytes().map_err(ApiError::Network)?;
        info!("Fetched clip {} ({} bytes)", video_id, bytes.len());
        Ok(bytes.to_vec())
    }

    // Attaches the retained credentials, if any. The server rejects
    // unauthenticated search and clip requests itself.
    fn authenticated(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match &self.credentials {
            Some(creds) => request
                .header(HEADER_USERNAME, &creds.username)
                .header(HEADER_PASSWORD, &creds.password),
            None => request,
        }
    }
}

/// Extracts a human-readable reason from a structured failure payload.
///
/// The server reports reasons under either a `message` or an `error` key;
/// `message` wins when both are present.
fn parse_error_reason(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

/// Parses a success body into records, defaulting to no records when the
/// body is not the expected array shape.
fn parse_search_results(body: &str) -> Vec<VideoRecord> {
    serde_json::from_str(body).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_reason_prefers_message_over_error() {
        assert_eq!(
            parse_error_reason(r#"{"message":"bad date"}"#),
            Some("bad date".to_string())
        );
        assert_eq!(
            parse_error_reason(r#"{"error":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(
            parse_error_reason(r#"{"message":"first","error":"second"}"#),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_error_reason_absent_for_unstructured_bodies() {
        assert_eq!(parse_error_reason("<html>502</html>"), None);
        assert_eq!(parse_error_reason(r#"{"detail":"nope"}"#), None);
        assert_eq!(parse_error_reason(""), None);
    }

    #[test]
    fn test_search_results_preserve_server_order() {
        let body = r#"[
            {"video_id":"1","filename":"a.mp4","upload_date_ist":"2026-01-05 08:00:00","camera_id":"CAM_1","plates_found":[]},
            {"video_id":"2","filename":"b.mp4","upload_date_ist":"2026-01-05 07:00:00","camera_id":"CAM_2","plates_found":["KA01AB1234"]}
        ]"#;

        let records = parse_search_results(body);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].video_id, "1");
        assert_eq!(records[1].video_id, "2");
        assert_eq!(records[1].plates_found, vec!["KA01AB1234"]);
    }

    #[test]
    fn test_non_array_success_body_is_an_empty_result_set() {
        assert!(parse_search_results("{}").is_empty());
        assert!(parse_search_results("not json at all").is_empty());
        assert!(parse_search_results(r#"{"message":"No results found"}"#).is_empty());
    }

    #[test]
    fn test_backend_error_display_is_verbatim() {
        // The Display form is what reaches the status line.
        let backend = ApiError::Backend("bad date".to_string());
        assert_eq!(backend.to_string(), "bad date");
    }
}

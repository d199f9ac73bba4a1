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

//! Signed-in identity state.
//!
//! The session is owned by the application state and passed explicitly to
//! the code that needs it; nothing reads identity from ambient globals. The
//! credentials themselves live in the API client, which injects them into
//! every outgoing request.

/// The identity the recording server reported at sign-in.
#[derive(Debug, Clone)]
pub(crate) struct Identity {
    pub(crate) username: String,
    pub(crate) role: String,
}

/// Whether a user is signed in, and who they are.
#[derive(Debug, Default)]
pub(crate) struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self { identity: None }
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub(crate) fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub(crate) fn sign_in(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    pub(crate) fn sign_out(&mut self) {
        self.identity = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unauthenticated() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.identity().is_none());
    }

    #[test]
    fn test_sign_in_then_out() {
        let mut session = Session::new();
        session.sign_in(Identity {
            username: "operator1".to_string(),
            role: "viewer".to_string(),
        });

        assert!(session.is_authenticated());
        assert_eq!(session.identity().unwrap().username, "operator1");

        session.sign_out();
        assert!(!session.is_authenticated());
    }
}

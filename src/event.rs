// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! This module contains the [`TestEvent`] and [`TestResponse`] types, the
//! typed views of the JSON payloads exchanged with the invoking platform.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The message returned on every successful invocation.
pub const OK_MESSAGE: &str = "All OK!";

/// A typed view of the invocation payload.
///
/// The platform delivers an arbitrary JSON object; the only key this function
/// reads is `action`. Extraction is lossy on purpose: a missing key, an
/// explicit `null`, and a non-string value all collapse to `None`, so no
/// input shape can fail deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestEvent {
    /// The action requested by the client test, if any.
    pub action: Option<String>,
}

impl TestEvent {
    /// Extracts the event view from the raw payload value.
    pub fn from_value(payload: &Value) -> Self {
        Self {
            action: payload
                .get("action")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }
}

/// The response mapping returned to the invoking platform.
///
/// `action` serializes as an explicit `null` when no action string was
/// supplied; clients assert on the field being present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestResponse {
    /// Always [`OK_MESSAGE`].
    pub message: String,
    /// The action echoed back from the event, or `null`.
    pub action: Option<String>,
}

impl TestResponse {
    /// Returns the successful response echoing the given action.
    pub fn ok(action: Option<String>) -> Self {
        Self {
            message: OK_MESSAGE.to_owned(),
            action,
        }
    }
}

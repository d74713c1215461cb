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

//! Echo function error types

use std::error;
use std::fmt::{Display, Formatter};
use std::io;
use std::result;

/// The fixed message carried by the intentional failure. Client tests match
/// on this exact string, so it renders without any prefix.
pub const CLIENT_TEST_ERROR: &str = "Error for client tests";

/// Result type for operations that could result in an [EchoError]
pub type Result<T> = result::Result<T, EchoError>;

/// Echo function error
#[derive(Debug)]
pub enum EchoError {
    /// Error raised on purpose when the event carries `action == "error"`.
    /// It propagates to the invoking platform, which reports the invocation
    /// as failed with this error's message.
    IntentionalFailure(String),
    /// Error associated to Lambda runtime execution.
    LambdaError(Box<dyn std::error::Error + Send + Sync>),
    /// Error associated to I/O operations and associated traits.
    IoError(io::Error),
    /// Error returned when serde_json failed to serialize or deserialize data.
    SerdeJson(serde_json::Error),
}

impl From<io::Error> for EchoError {
    fn from(e: io::Error) -> Self {
        EchoError::IoError(e)
    }
}

impl From<serde_json::Error> for EchoError {
    fn from(e: serde_json::Error) -> Self {
        EchoError::SerdeJson(e)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for EchoError {
    fn from(e: Box<dyn std::error::Error + Send + Sync>) -> Self {
        EchoError::LambdaError(e)
    }
}

impl Display for EchoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            EchoError::IntentionalFailure(ref desc) => write!(f, "{}", desc),
            EchoError::LambdaError(ref desc) => write!(f, "Lambda error: {}", desc),
            EchoError::IoError(ref desc) => write!(f, "IO error: {}", desc),
            EchoError::SerdeJson(ref desc) => write!(f, "serde_json error: {:?}", desc),
        }
    }
}

impl error::Error for EchoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intentional_failure_renders_the_bare_message() {
        let err = EchoError::IntentionalFailure(CLIENT_TEST_ERROR.to_owned());
        assert_eq!(err.to_string(), "Error for client tests");
    }

    #[test]
    fn ambient_errors_render_with_a_prefix() {
        let err = EchoError::from(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(err.to_string(), "IO error: boom");
    }
}

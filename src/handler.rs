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

//! The handler invoked by the Lambda runtime for every client test event.

use crate::error::{EchoError, Result, CLIENT_TEST_ERROR};
use crate::event::{TestEvent, TestResponse};
use lambda_runtime::LambdaEvent;
use log::info;
use serde_json::Value;

/// The action that makes the invocation fail on purpose.
pub const ERROR_ACTION: &str = "error";

/// Handles a single invocation from the platform.
///
/// The function logs the invoked function ARN, then branches on the event's
/// `action` key:
///
/// * `"error"` fails the invocation with the fixed message
///   [`CLIENT_TEST_ERROR`], so clients can exercise their error handling.
/// * any other string is treated as an unrecognized action and succeeds.
/// * an absent action succeeds unconditionally.
///
/// Every successful invocation returns `{"message": "All OK!", "action": ..}`
/// with the action echoed back, or `null` if none was supplied. The handler
/// keeps no state across invocations.
pub async fn handle(event: LambdaEvent<Value>) -> Result<Value> {
    println!(
        "Lambda function ARN: {}",
        event.context.invoked_function_arn
    );

    let event = TestEvent::from_value(&event.payload);
    match event.action.as_deref() {
        Some(ERROR_ACTION) => {
            info!("Will return an error. Action: {}", ERROR_ACTION);
            return Err(EchoError::IntentionalFailure(CLIENT_TEST_ERROR.to_owned()));
        }
        Some(action) => info!("Normal work - Unknown action: {}", action),
        None => info!("Normal work - All OK!"),
    }

    Ok(serde_json::to_value(TestResponse::ok(event.action))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    fn test_event(payload: Value) -> LambdaEvent<Value> {
        let mut context = Context::default();
        context.invoked_function_arn =
            "arn:aws:lambda:eu-central-1:123456789012:function:echo-function".to_owned();
        LambdaEvent::new(payload, context)
    }

    #[tokio::test]
    async fn empty_event_succeeds_with_null_action() -> Result<()> {
        let response = handle(test_event(json!({}))).await?;
        assert_eq!(response, json!({ "message": "All OK!", "action": null }));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_action_is_echoed_back() -> Result<()> {
        let response = handle(test_event(json!({ "action": "ping" }))).await?;
        assert_eq!(response, json!({ "message": "All OK!", "action": "ping" }));
        Ok(())
    }

    #[tokio::test]
    async fn error_action_fails_with_the_fixed_message() {
        let err = handle(test_event(json!({ "action": "error" })))
            .await
            .expect_err("the error action must fail the invocation");
        assert!(matches!(err, EchoError::IntentionalFailure(_)));
        assert_eq!(err.to_string(), "Error for client tests");
    }

    #[tokio::test]
    async fn unrelated_keys_are_ignored() -> Result<()> {
        let payload = json!({ "detail": { "retries": 3 }, "source": "client" });
        let response = handle(test_event(payload)).await?;
        assert_eq!(response, json!({ "message": "All OK!", "action": null }));
        Ok(())
    }

    #[tokio::test]
    async fn repeat_invocations_are_idempotent() -> Result<()> {
        let payload = json!({ "action": "ping" });
        let first = handle(test_event(payload.clone())).await?;
        let second = handle(test_event(payload)).await?;
        assert_eq!(first, second);
        Ok(())
    }
}

use serde_json::Value;
use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ReplyError {
    #[snafu(display("Request failed: {status}"))]
    Status { status: u16 },

    #[snafu(display("{source}"))]
    ParseBody { source: serde_json::Error },

    #[snafu(display("Response body is null"))]
    NullBody,
}

/// Turns a `/api/hello` reply into the text of the success panel.
///
/// A non-empty `message` string is shown as-is. Any other truthy `message` is
/// shown serialized, and a falsy or missing one falls back to the serialized body.
///
/// # Errors
///
/// Fails on a non-2xx status, on a body which is not JSON, or on a JSON `null` body.
pub fn interpret_reply(status: u16, body: &[u8]) -> Result<String, ReplyError> {
    if !(200..300).contains(&status) {
        return Err(ReplyError::Status { status });
    }

    let value: Value = serde_json::from_slice(body).context(ParseBodySnafu)?;
    match value.get("message") {
        _ if value.is_null() => Err(ReplyError::NullBody),
        Some(Value::String(message)) if !message.is_empty() => Ok(message.clone()),
        Some(message) if is_truthy(message) => Ok(message.to_string()),
        _ => Ok(value.to_string()),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use crate::{interpret_reply, ReplyError};

    #[test]
    fn test_message_field() {
        assert_eq!(interpret_reply(200, br#"{"message":"hi"}"#).unwrap(), "hi");
        assert_eq!(
            interpret_reply(201, br#"{"message":"Hello from the backend","extra":1}"#).unwrap(),
            "Hello from the backend"
        );
    }

    #[test]
    fn test_without_message_field() {
        assert_eq!(interpret_reply(200, br#"{"greeting":"hey"}"#).unwrap(), r#"{"greeting":"hey"}"#);
        assert_eq!(interpret_reply(200, br#"{"message":""}"#).unwrap(), r#"{"message":""}"#);
        assert_eq!(interpret_reply(200, br#"{"message":null}"#).unwrap(), r#"{"message":null}"#);
        assert_eq!(interpret_reply(200, b"[1, 2]").unwrap(), "[1,2]");
        assert_eq!(interpret_reply(200, br#""plain""#).unwrap(), r#""plain""#);
    }

    #[test]
    fn test_non_string_message() {
        assert_eq!(interpret_reply(200, br#"{"message":42}"#).unwrap(), "42");
        assert_eq!(interpret_reply(200, br#"{"message":{"a":1}}"#).unwrap(), r#"{"a":1}"#);
        assert_eq!(interpret_reply(200, br#"{"message":0}"#).unwrap(), r#"{"message":0}"#);
    }

    #[test]
    fn test_status_error() {
        let err = interpret_reply(500, br#"{"message":"hi"}"#).unwrap_err();
        assert!(matches!(err, ReplyError::Status { status: 500 }));
        assert_eq!(err.to_string(), "Request failed: 500");

        let err = interpret_reply(404, b"").unwrap_err();
        assert_eq!(err.to_string(), "Request failed: 404");
    }

    #[test]
    fn test_invalid_body() {
        assert!(matches!(
            interpret_reply(200, b"<html></html>").unwrap_err(),
            ReplyError::ParseBody { .. }
        ));
        assert!(matches!(interpret_reply(200, b"null").unwrap_err(), ReplyError::NullBody));
    }
}

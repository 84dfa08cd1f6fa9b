use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::JobError;

#[derive(Debug, Deserialize, Serialize)]
pub struct JobPayload {
    pub hello: Value
}

impl JobPayload {

    // the body has to be JSON and carry a `hello` field, nothing is defaulted
    pub fn from_body(body: &[u8]) -> Result<Self, JobError> {

        let json: Value = serde_json::from_slice(body)?;

        let hello = json
            .get("hello")
            .cloned()
            .ok_or(JobError::MissingHello)?;

        Ok(JobPayload { hello })

    }

    // scalars are stringified loosely: true is 1, false and null are empty, whole floats lose `.0`.
    // arrays and objects fall back to compact JSON
    pub fn hello_text(&self) -> String {

        match &self.hello {
            Value::String(s) => s.clone(),
            Value::Bool(true) => "1".to_string(),
            Value::Bool(false) | Value::Null => String::new(),
            Value::Number(n) => match n.as_f64() {
                // f64's Display drops the trailing `.0` of whole floats
                Some(f) if n.is_f64() => f.to_string(),
                _ => n.to_string()
            },
            other => other.to_string()
        }

    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct JobResponse {
    pub message: String
}

impl JobResponse {
    pub fn new(payload: &JobPayload, trace_id: &str) -> Self {

        JobResponse {
            message: format!(
                "Script ran successfully (hello = {}, trace = {})",
                payload.hello_text(),
                trace_id
            )
        }

    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_hello_is_not_quoted() {
        let payload = JobPayload::from_body(br#"{"hello":"world"}"#).unwrap();
        let response = JobResponse::new(&payload, "abc123");

        assert_eq!(
            response.message,
            "Script ran successfully (hello = world, trace = abc123)"
        );
    }

    fn render(body: &[u8]) -> String {
        JobPayload::from_body(body).unwrap().hello_text()
    }

    #[test]
    fn scalar_hello_renders_as_loose_text() {
        assert_eq!(render(br#"{"hello":42}"#), "42");
        assert_eq!(render(br#"{"hello":-7}"#), "-7");
        assert_eq!(render(br#"{"hello":true}"#), "1");
        assert_eq!(render(br#"{"hello":false}"#), "");
        assert_eq!(render(br#"{"hello":null}"#), "");
        assert_eq!(render(br#"{"hello":1.0}"#), "1");
        assert_eq!(render(br#"{"hello":1.5}"#), "1.5");
    }

    #[test]
    fn compound_hello_renders_as_json() {
        let list = JobPayload::from_body(br#"{"hello":[1,"a"],"other":true}"#).unwrap();
        assert_eq!(list.hello_text(), r#"[1,"a"]"#);

        let object = JobPayload::from_body(br#"{"hello":{"a":1}}"#).unwrap();
        assert_eq!(object.hello_text(), r#"{"a":1}"#);
    }

    #[test]
    fn invalid_json_is_rejected() {
        let err = JobPayload::from_body(b"\xff not json").unwrap_err();
        assert!(matches!(err, JobError::InvalidJson(_)));

        let err = JobPayload::from_body(b"").unwrap_err();
        assert!(matches!(err, JobError::InvalidJson(_)));
    }

    #[test]
    fn missing_hello_is_rejected() {
        let err = JobPayload::from_body(br#"{"goodbye":"world"}"#).unwrap_err();
        assert!(matches!(err, JobError::MissingHello));

        // valid JSON but not an object
        let err = JobPayload::from_body(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, JobError::MissingHello));
    }
}

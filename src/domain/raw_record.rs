use serde::Deserialize;
use serde_json::{Map, Value};

// Attachment paths come back relative to the upstream host.
const ATTACHMENT_BASE_URL: &str = "https://ndb.startmunich.de";

/// One untyped upstream row. Only the normalizers may look inside one;
/// everything past this boundary works with the canonical types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn integer_field(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(Value::as_i64)
    }

    // Cleared cells come back as "", which counts as absent.
    pub fn string_field(&self, key: &str) -> Option<String> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
    }

    /// Absolute URL for the first attachment of an attachment-list
    /// field, if it carries a signed path.
    pub fn attachment_url(&self, key: &str) -> Option<String> {
        self.0
            .get(key)
            .and_then(Value::as_array)
            .and_then(|attachments| attachments.first())
            .and_then(|attachment| attachment.get("signedPath"))
            .and_then(Value::as_str)
            .filter(|path| !path.is_empty())
            .map(|path| format!("{}/{}", ATTACHMENT_BASE_URL, path))
    }
}

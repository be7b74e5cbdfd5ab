//! Screening and parsing of uploaded JSON files.

use serde_json::Value;
use thiserror::Error;

use super::normalize::RawInput;

pub const JSON_MIME: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// Neither the MIME type nor the extension says JSON. Raised before reading.
    #[error("Please upload a JSON file")]
    NotJson,
    #[error("Error reading file")]
    Unreadable,
    #[error("Invalid JSON format. Please check your file.")]
    InvalidJson(String),
    /// Valid JSON, but not an object that could carry transaction fields.
    #[error("Uploaded JSON must be an object of transaction fields")]
    NotAnObject,
}

/// Whether a file may be read at all. `mime` is whatever the platform
/// reported, if anything.
pub fn is_json_file(name: &str, mime: Option<&str>) -> bool {
    if mime.is_some_and(|mime| mime.eq_ignore_ascii_case(JSON_MIME)) {
        return true;
    }
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("json"))
}

/// Gate applied before any read is attempted.
pub fn screen(name: &str, mime: Option<&str>) -> Result<(), UploadError> {
    if is_json_file(name, mime) {
        Ok(())
    } else {
        Err(UploadError::NotJson)
    }
}

/// Turn the result of a file read into a [`RawInput`].
/// `None` means the read itself failed.
pub fn parse(contents: Option<&str>) -> Result<RawInput, UploadError> {
    let text = contents.ok_or(UploadError::Unreadable)?;
    let value: Value =
        serde_json::from_str(text).map_err(|err| UploadError::InvalidJson(err.to_string()))?;
    match value {
        Value::Object(map) => Ok(RawInput::from(map)),
        _ => Err(UploadError::NotAnObject),
    }
}

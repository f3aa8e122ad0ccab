use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::extract_strict_json;

/// Failures surfaced once extracted text is handed to a JSON consumer
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The candidate text did not deserialize into the requested type
    #[error("response did not contain valid JSON: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
        /// The extracted text that was attempted
        candidate: String,
    },

    /// The schema document itself could not be compiled
    #[error("invalid JSON schema: {0}")]
    InvalidSchema(String),

    /// The value parsed but does not satisfy the schema
    #[error("JSON failed schema validation: {}", .errors.join("; "))]
    SchemaViolation { errors: Vec<String> },
}

impl ExtractError {
    /// Whether asking the model again might produce usable output
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExtractError::Deserialize { .. } | ExtractError::SchemaViolation { .. }
        )
    }

    /// The extracted text behind a deserialization failure
    pub fn candidate(&self) -> Option<&str> {
        match self {
            ExtractError::Deserialize { candidate, .. } => Some(candidate),
            _ => None,
        }
    }
}

/// Extract the JSON span of an LLM response and deserialize it.
pub fn decode_strict_json<T: DeserializeOwned>(raw: &str) -> Result<T, ExtractError> {
    let candidate = extract_strict_json(raw);
    serde_json::from_str(candidate).map_err(|source| {
        debug!("Deserialization failed at line {} column {}", source.line(), source.column());
        ExtractError::Deserialize {
            source,
            candidate: candidate.to_string(),
        }
    })
}

/// Validate a decoded value against a JSON Schema document.
///
/// Every violation is collected, not just the first.
pub fn validate_against_schema(value: &Value, schema: &Value) -> Result<(), ExtractError> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|e| ExtractError::InvalidSchema(e.to_string()))?;

    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ExtractError::SchemaViolation { errors })
    }
}

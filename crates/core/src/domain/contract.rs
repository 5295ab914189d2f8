use crate::domain::market::{lenient_object, MarketSnapshot};
use crate::domain::profile::ProfileType;
use crate::error::AdviceError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body as sent by clients. Both fields may be missing on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    #[serde(default)]
    pub user_input: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub market_data: Option<MarketSnapshot>,
}

/// A request that passed boundary validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub user_input: String,
    pub market: MarketSnapshot,
}

impl AdviceRequest {
    pub fn new(user_input: impl Into<String>, market_data: Option<MarketSnapshot>) -> Self {
        Self {
            user_input: Some(user_input.into()),
            market_data,
        }
    }

    pub fn from_json_slice(body: &[u8]) -> Result<Self, AdviceError> {
        serde_json::from_slice(body).map_err(|e| AdviceError::MalformedRequest(e.to_string()))
    }

    /// Rejects absent or blank input. The text itself is kept verbatim, since
    /// the report quotes it back.
    pub fn validate(self) -> Result<ValidatedRequest, AdviceError> {
        let user_input = self
            .user_input
            .filter(|s| !s.trim().is_empty())
            .ok_or(AdviceError::MissingUserInput)?;

        Ok(ValidatedRequest {
            user_input,
            market: self.market_data.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub timestamp: String,
    pub model: String,
    pub profile: ProfileType,
}

impl ReportMetadata {
    pub fn new(generated_at: DateTime<Utc>, model: &str, profile: ProfileType) -> Self {
        Self {
            timestamp: generated_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            model: model.to_string(),
            profile,
        }
    }
}

/// Response envelope. `success` discriminates the two shapes on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdviceResponse {
    Success {
        success: bool,
        report: String,
        metadata: ReportMetadata,
    },
    Failure {
        success: bool,
        error: String,
    },
}

impl AdviceResponse {
    pub fn success(report: String, metadata: ReportMetadata) -> Self {
        AdviceResponse::Success {
            success: true,
            report,
            metadata,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        AdviceResponse::Failure {
            success: false,
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AdviceResponse::Success { .. })
    }
}

impl From<AdviceError> for AdviceResponse {
    fn from(err: AdviceError) -> Self {
        AdviceResponse::failure(err.to_string())
    }
}

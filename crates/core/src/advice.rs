//! The request/response contract shared by the HTTP service and the CLI.

use crate::classify;
use crate::domain::contract::{AdviceRequest, AdviceResponse, ReportMetadata, ValidatedRequest};
use crate::domain::profile::Profile;
use crate::error::AdviceError;
use crate::report;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct Advice {
    pub profile: Profile,
    pub report: String,
    pub metadata: ReportMetadata,
}

impl From<Advice> for AdviceResponse {
    fn from(advice: Advice) -> Self {
        AdviceResponse::success(advice.report, advice.metadata)
    }
}

/// Classifies the request and renders its report. Holds no state between calls.
pub fn advise(request: &ValidatedRequest, now: DateTime<Utc>, model: &str) -> Advice {
    let profile = classify::classify(&request.user_input);
    let report = report::compose(&profile, &request.market, &request.user_input, now);

    tracing::info!(
        profile = %profile.profile_type,
        requested_leverage = profile.requested_leverage,
        leverage_allocation = profile.leverage_allocation,
        sentiment = ?request.market.sentiment(),
        report_len = report.len(),
        "generated advisory report"
    );

    Advice {
        metadata: ReportMetadata::new(now, model, profile.profile_type),
        profile,
        report,
    }
}

/// Validates a parsed request and runs the pipeline.
pub fn handle(request: AdviceRequest, now: DateTime<Utc>, model: &str) -> Result<Advice, AdviceError> {
    let request = request.validate()?;
    Ok(advise(&request, now, model))
}

/// Same as [`handle`], starting from a raw JSON body.
pub fn handle_json(body: &[u8], now: DateTime<Utc>, model: &str) -> Result<Advice, AdviceError> {
    handle(AdviceRequest::from_json_slice(body)?, now, model)
}

//! Table-driven rendering of a [`Profile`] and a [`MarketSnapshot`] into the
//! four-section advisory report.

pub mod action_plan;
pub mod executive;
pub mod request_summary;
pub mod resources;
pub mod strategy;
pub mod template;

use crate::domain::market::MarketSnapshot;
use crate::domain::profile::Profile;
use crate::time::kr_market;
use chrono::{DateTime, Utc};
use resources::{
    HEADER_ACTION_PLAN, HEADER_EXECUTIVE_SUMMARY, HEADER_PORTFOLIO_STRATEGY, HEADER_USER_REQUEST,
    PLACEHOLDER,
};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSections {
    pub user_request: String,
    pub executive_summary: String,
    pub portfolio_strategy: String,
    pub action_plan: String,
}

impl ReportSections {
    /// Sections in output order, each paired with its header.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            (HEADER_USER_REQUEST, self.user_request.as_str()),
            (HEADER_EXECUTIVE_SUMMARY, self.executive_summary.as_str()),
            (HEADER_PORTFOLIO_STRATEGY, self.portfolio_strategy.as_str()),
            (HEADER_ACTION_PLAN, self.action_plan.as_str()),
        ]
        .into_iter()
    }
}

impl fmt::Display for ReportSections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (header, body)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{header}\n{body}")?;
        }
        Ok(())
    }
}

pub fn compose_sections(
    profile: &Profile,
    market: &MarketSnapshot,
    input: &str,
    now: DateTime<Utc>,
) -> ReportSections {
    let date = kr_market::report_date(now);
    let sentiment = market.sentiment();

    ReportSections {
        user_request: request_summary::render(profile, input),
        executive_summary: executive::render(profile, market, sentiment, &date, input),
        portfolio_strategy: strategy::render(profile, market),
        action_plan: action_plan::render(profile, sentiment),
    }
}

/// Renders the full report. Never fails: missing quotes render as `N/A`.
pub fn compose(
    profile: &Profile,
    market: &MarketSnapshot,
    input: &str,
    now: DateTime<Utc>,
) -> String {
    compose_sections(profile, market, input, now).to_string()
}

pub(crate) fn quote_text(value: Option<f64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::domain::market::Quote;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        // 2026-01-05 09:00 KST
        Utc.with_ymd_and_hms(2026, 1, 5, 0, 0, 0).unwrap()
    }

    fn full_market() -> MarketSnapshot {
        MarketSnapshot {
            kospi: Some(Quote::new(2650.5, 1.2)),
            kosdaq: Some(Quote::new(870.25, 0.4)),
            kodex200: Some(Quote::new(18250.0, 2.4)),
            kodex150: Some(Quote::new(9120.0, 0.8)),
        }
    }

    #[test]
    fn sections_are_ordered_with_headers() {
        let input = "공격적으로 80% 레버리지 써주세요";
        let report = compose(&classify(input), &full_market(), input, now());

        assert!(report.starts_with("USER_REQUEST\n📝 "));
        let headers = [
            "USER_REQUEST\n",
            "\n\nEXECUTIVE_SUMMARY\n",
            "\n\nPORTFOLIO_STRATEGY\n",
            "\n\nACTION_PLAN\n",
        ];
        let positions: Vec<usize> = headers.iter().map(|h| report.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(report.contains("2026년 1월 5일 투자 전략"));
        // (1.2 + 0.4) / 2 = 0.8
        assert!(report.contains("**강세** 흐름"));
        assert!(report.ends_with("**🔔 현재 강세장 - 공격적 진입 타이밍**"));
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let input = "안전하게 20%만 레버리지, 3주 정도";
        let profile = classify(input);
        let a = compose(&profile, &full_market(), input, now());
        let b = compose(&classify(input), &full_market(), input, now());
        assert_eq!(a, b);
    }

    #[test]
    fn missing_market_data_renders_placeholders() {
        for input in [
            "공격적으로 80% 레버리지 써주세요",
            "안전하게 20%만 레버리지",
            "균형있게 투자하고 싶어요",
        ] {
            let report = compose(&classify(input), &MarketSnapshot::default(), input, now());
            assert!(report.contains("N/A"), "{input}");
            assert!(!report.contains("undefined"));
            assert!(!report.contains("NaN"));
            assert!(report.contains("현재가: N/A원"));
            assert!(report.contains("**혼조**"));
        }

        let input = "공격적으로 80% 레버리지 써주세요";
        let report = compose(&classify(input), &MarketSnapshot::default(), input, now());
        assert!(report.contains("KOSPI N/A (N/A), KOSDAQ N/A (N/A)"));
    }

    #[test]
    fn sentiment_boundary_is_mixed() {
        let input = "균형있게 투자하고 싶어요";
        let market = MarketSnapshot {
            kospi: Some(Quote::new(2600.0, 0.5)),
            kosdaq: Some(Quote::new(800.0, 0.5)),
            ..Default::default()
        };
        let report = compose(&classify(input), &market, input, now());
        assert!(report.contains("**혼조** 장세"));

        let market = MarketSnapshot {
            kospi: Some(Quote::new(2600.0, -0.5)),
            kosdaq: Some(Quote::new(800.0, -0.5)),
            ..Default::default()
        };
        let report = compose(&classify(input), &market, input, now());
        assert!(report.contains("**혼조** 장세"));
        assert!(report.ends_with("**🔔 현재 혼조장 - 신중한 진입**"));
    }

    #[test]
    fn braces_in_input_are_quoted_verbatim() {
        let input = "{date} {cash} 그대로 보여주세요";
        let report = compose(&classify(input), &full_market(), input, now());
        assert!(report.contains("\"{date} {cash} 그대로 보여주세요\""));
    }

    #[test]
    fn quote_text_formats_numbers() {
        assert_eq!(quote_text(None), "N/A");
        assert_eq!(quote_text(Some(2650.0)), "2650");
        assert_eq!(quote_text(Some(-1.25)), "-1.25");
        assert_eq!(quote_text(Some(0.0)), "0");
    }
}

use crate::classify;
use crate::domain::profile::Profile;
use crate::report::resources::{
    self, KEY_POINT_DURATION, KEY_POINT_LEVERAGE, KEY_POINT_RULES, REQUEST_SUMMARY,
};
use crate::report::template::fill;
use regex::Regex;
use std::sync::LazyLock;

static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)(일|주|개월)").expect("duration pattern is valid"));

/// Bullet points restating what the request asked for, in a fixed order.
///
/// Scans the raw text (no case folding). Only the first duration is reported.
pub fn key_points(input: &str, profile: &Profile) -> Vec<String> {
    let mut points = Vec::new();

    if input.contains("레버리지") || classify::extract_leverage(input).is_some() {
        let requested = profile.requested_leverage.to_string();
        points.push(fill(KEY_POINT_LEVERAGE, &[("requested", &requested)]));
    }

    for rule in KEY_POINT_RULES {
        if rule.triggers.iter().any(|t| input.contains(t)) {
            points.push(rule.text.to_string());
        }
    }

    if let Some(caps) = DURATION_RE.captures(input) {
        let amount = caps.get(1).map_or("", |m| m.as_str());
        let unit = caps.get(2).map_or("", |m| m.as_str());
        points.push(fill(KEY_POINT_DURATION, &[("amount", amount), ("unit", unit)]));
    }

    points
}

pub fn render(profile: &Profile, input: &str) -> String {
    let style = resources::style_label(profile.profile_type);

    let points = key_points(input, profile);
    let key_points = if points.is_empty() {
        format!("• {style}")
    } else {
        points
            .iter()
            .map(|p| format!("• {p}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let leverage = profile.leverage_allocation.to_string();
    let cash = profile.cash_allocation.to_string();
    let narrative = fill(
        resources::narrative(profile.profile_type),
        &[("leverage", &leverage), ("cash", &cash)],
    );

    let requested = profile.requested_leverage.to_string();
    fill(
        REQUEST_SUMMARY,
        &[
            ("user_input", input),
            ("style", style),
            ("risk", profile.risk_level.label()),
            ("requested", &requested),
            ("key_points", &key_points),
            ("narrative", &narrative),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn collects_key_points_in_order() {
        let input = "3개월 동안 안전하게 균형 잡힌 20% 레버리지, 장기 관점";
        let points = key_points(input, &classify(input));
        assert_eq!(
            points,
            vec![
                "레버리지 비중 20% 요청",
                "안정성 중시, 리스크 최소화",
                "위험과 수익의 균형 추구",
                "장기 투자 지향",
                "투자 기간: 3개월",
            ]
        );
    }

    #[test]
    fn percentage_alone_triggers_leverage_point() {
        let input = "70% 정도로";
        let points = key_points(input, &classify(input));
        assert_eq!(points, vec!["레버리지 비중 70% 요청"]);
    }

    #[test]
    fn leverage_keyword_reports_default_request() {
        let input = "레버리지 좀 써볼까요";
        let points = key_points(input, &classify(input));
        assert_eq!(points, vec!["레버리지 비중 50% 요청"]);
    }

    #[test]
    fn only_first_duration_is_reported() {
        let input = "2주 아니면 10일";
        let points = key_points(input, &classify(input));
        assert_eq!(points, vec!["투자 기간: 2주"]);
    }

    #[test]
    fn falls_back_to_style_bullet() {
        let input = "알아서 해주세요";
        let out = render(&classify(input), input);
        assert!(out.contains("**핵심 요청사항:**\n• 균형 투자\n"));
    }

    #[test]
    fn quotes_input_and_fills_narrative() {
        let input = "공격적으로 80% 레버리지 써주세요";
        let out = render(&classify(input), input);
        assert!(out.starts_with("📝 **고객님의 요청사항**\n\n\"공격적으로 80% 레버리지 써주세요\"\n"));
        assert!(out.contains("**투자 성향:** 공격적 투자 | **리스크:** 높음 | **레버리지:** 80%"));
        assert!(out.contains("**레버리지 ETF 80% 배분**"));
        assert!(out.contains("✅ 현금 20%는 급락 시 추가 매수 기회로 활용됩니다."));
        assert!(!out.contains('{'));
    }
}

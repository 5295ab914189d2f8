//! Canned Korean copy for every report section.
//!
//! Each table is a `match` on [`ProfileType`], [`Scenario`] or [`Sentiment`], so adding a
//! variant fails to compile until its text exists here.

use crate::domain::market::{Scenario, Sentiment};
use crate::domain::profile::ProfileType;

pub const PLACEHOLDER: &str = "N/A";

pub const HEADER_USER_REQUEST: &str = "USER_REQUEST";
pub const HEADER_EXECUTIVE_SUMMARY: &str = "EXECUTIVE_SUMMARY";
pub const HEADER_PORTFOLIO_STRATEGY: &str = "PORTFOLIO_STRATEGY";
pub const HEADER_ACTION_PLAN: &str = "ACTION_PLAN";

pub fn style_label(profile_type: ProfileType) -> &'static str {
    match profile_type {
        ProfileType::Aggressive => "공격적 투자",
        ProfileType::Conservative => "보수적 투자",
        ProfileType::Moderate => "균형 투자",
    }
}

// ---------------------------------------------------------------------------
// USER_REQUEST
// ---------------------------------------------------------------------------

pub const REQUEST_SUMMARY: &str = r#"📝 **고객님의 요청사항**

"{user_input}"

---

**🎯 AI 분석 결과**

**투자 성향:** {style} | **리스크:** {risk} | **레버리지:** {requested}%

**핵심 요청사항:**
{key_points}

---

**💡 맞춤형 답변**

{narrative}"#;

pub const KEY_POINT_LEVERAGE: &str = "레버리지 비중 {requested}% 요청";
pub const KEY_POINT_DURATION: &str = "투자 기간: {amount}{unit}";

/// A key point shown when any of `triggers` occurs verbatim in the request.
#[derive(Debug, Clone, Copy)]
pub struct KeyPointRule {
    pub triggers: &'static [&'static str],
    pub text: &'static str,
}

/// Checked in order, after the leverage point and before the duration point.
pub const KEY_POINT_RULES: &[KeyPointRule] = &[
    KeyPointRule {
        triggers: &["빠른", "단기", "적극"],
        text: "단기 고수익 추구",
    },
    KeyPointRule {
        triggers: &["안전", "보수", "현금"],
        text: "안정성 중시, 리스크 최소화",
    },
    KeyPointRule {
        triggers: &["균형", "중립", "분산"],
        text: "위험과 수익의 균형 추구",
    },
    KeyPointRule {
        triggers: &["장기", "안정"],
        text: "장기 투자 지향",
    },
];

pub fn narrative(profile_type: ProfileType) -> &'static str {
    match profile_type {
        ProfileType::Aggressive => {
            "고객님의 공격적 투자 성향을 확인했습니다. **레버리지 ETF {leverage}% 배분**으로 단기 고수익을 추구하는 전략을 수립했습니다.

✅ KODEX 200 레버리지와 KOSDAQ 150 레버리지를 활용하여 시장 상승 시 수익을 극대화합니다.
✅ 현금 {cash}%는 급락 시 추가 매수 기회로 활용됩니다.
✅ 목표 수익률 달성 시 부분 익절 전략을 적용합니다."
        }
        ProfileType::Conservative => {
            "고객님의 안정적 투자 성향을 반영했습니다. **현금 {cash}% 보유**로 리스크를 최소화하면서도 수익 기회를 잡는 전략입니다.

✅ 레버리지 비중을 {leverage}%로 제한하여 변동성을 낮췄습니다.
✅ 분할 매수 전략으로 리스크를 분산합니다.
✅ 보수적 손절 기준(-2%)으로 손실을 최소화합니다."
        }
        ProfileType::Moderate => {
            "고객님의 균형잡힌 투자 성향에 맞춰 설계했습니다. **레버리지 {leverage}%, 현금 {cash}%**로 위험과 수익의 조화를 추구합니다.

✅ 레버리지 ETF로 수익 기회를 확보하면서도 현금으로 안정성을 유지합니다.
✅ 주간 리밸런싱으로 포트폴리오를 최적 상태로 유지합니다.
✅ 시장 상황에 따라 유연하게 대응할 수 있는 구조입니다."
        }
    }
}

// ---------------------------------------------------------------------------
// EXECUTIVE_SUMMARY
// ---------------------------------------------------------------------------

pub fn executive_summary(profile_type: ProfileType) -> &'static str {
    match profile_type {
        ProfileType::Aggressive => {
            r#"🚀 **{date} 투자 전략 - 공격적 레버리지 투자**

현재 시장은 **{sentiment}** 흐름을 보이고 있으며, KOSPI {kospi_price} ({kospi_change}), KOSDAQ {kosdaq_price} ({kosdaq_change})로 거래되고 있습니다.

고객님의 요청사항("{user_input}")을 반영하여, **레버리지 ETF 중심의 공격적 포트폴리오**를 제안드립니다.

⚡ **즉각 실행 전략:**
1. **KODEX 200 레버리지 {kodex200_allocation}% 편입** - 현재가 {kodex200_price}원, 단기 모멘텀 활용
2. **KODEX KOSDAQ150 레버리지 {kodex150_allocation}% 편입** - 기술주 강세 수혜
3. **현금 {cash}% 유지** - 급락 시 추가 매수 대기

💰 **목표 수익률:** 3-5일 내 +{target_return}% (레버리지 효과)
⚠️ **손절 기준:** -4% 도달 시 즉시 청산"#
        }
        ProfileType::Conservative => {
            r#"🛡️ **{date} 투자 전략 - 안전 중심 포트폴리오**

현재 시장은 **{sentiment}** 흐름을 보이고 있습니다. 고객님의 보수적 투자 성향("{user_input}")을 고려하여, **안정성과 수익성의 균형**을 맞춘 전략을 제안합니다.

⚡ **즉각 실행 전략:**
1. **현금 비중 {cash}% 유지** - 시장 불확실성 대비
2. **레버리지 ETF {leverage}% 분산 투자** - KODEX 200/KOSDAQ 150 각 50%
3. **단계별 진입** - 일주일에 걸쳐 3회 분할 매수

💰 **목표 수익률:** 1-2주 내 +3-5%
⚠️ **손절 기준:** -2% 도달 시 30% 부분 청산"#
        }
        ProfileType::Moderate => {
            r#"⚖️ **{date} 투자 전략 - 균형 포트폴리오**

현재 KOSPI {kospi_change}, KOSDAQ {kosdaq_change}로 **{sentiment}** 장세입니다. 고객님의 요청("{user_input}")을 반영하여 **위험과 수익의 조화**를 추구합니다.

⚡ **즉각 실행 전략:**
1. **레버리지 ETF 50% 배분** - KODEX 200 30%, KOSDAQ 150 20%
2. **현금 50% 보유** - 기회 포착 및 리스크 관리
3. **주간 리밸런싱** - 매주 금요일 비중 재조정

💰 **목표 수익률:** 1주 내 +4-7%
⚠️ **손절 기준:** -3% 도달 시 50% 청산"#
        }
    }
}

/// Target return band for the aggressive plan, keyed by how much leverage was asked for.
pub fn aggressive_target_return(requested_leverage: u32) -> &'static str {
    if requested_leverage >= 70 {
        "8-12"
    } else {
        "5-8"
    }
}

// ---------------------------------------------------------------------------
// PORTFOLIO_STRATEGY
// ---------------------------------------------------------------------------

pub const PORTFOLIO_STRATEGY: &str = r#"📊 **권장 포트폴리오 비중**

**레버리지 ETF: {leverage}%**
- KODEX 200 레버리지 (122630): {kodex200_allocation}%
  - 현재가: {kodex200_price}원
  - 진입 전략: {entry}
  - 익절 기준: +{kodex200_take_profit}%
  - 손절 기준: -{kodex200_stop_loss}%

- KODEX KOSDAQ150 레버리지 (233740): {kodex150_allocation}%
  - 현재가: {kodex150_price}원
  - 진입 전략: {entry}
  - 익절 기준: +{kodex150_take_profit}%
  - 손절 기준: -{kodex150_stop_loss}%

**현금: {cash}%**
- 용도: {cash_purpose}
- 운용: {cash_vehicle}

⚠️ **리스크 관리 원칙:**
- 보유 기간: {holding_period}
- 일일 손실 한도: 총 자산의 {daily_loss_limit}%
- 레버리지 특성상 변동성 ±{volatility}% 예상"#;

/// Per-profile trading rules shown in the portfolio strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyRules {
    pub entry: &'static str,
    pub kodex200_take_profit: u32,
    pub kodex200_stop_loss: u32,
    pub kodex150_take_profit: u32,
    pub kodex150_stop_loss: u32,
    pub cash_purpose: &'static str,
    pub cash_vehicle: &'static str,
    pub holding_period: &'static str,
    pub daily_loss_limit: u32,
}

pub fn strategy_rules(profile_type: ProfileType) -> StrategyRules {
    match profile_type {
        ProfileType::Aggressive => StrategyRules {
            entry: "즉시 전량 매수",
            kodex200_take_profit: 10,
            kodex200_stop_loss: 4,
            kodex150_take_profit: 12,
            kodex150_stop_loss: 5,
            cash_purpose: "급락 시 추가 매수 (예비 탄약)",
            cash_vehicle: "증권사 RP",
            holding_period: "3-5일",
            daily_loss_limit: 5,
        },
        ProfileType::Conservative => StrategyRules {
            entry: "2회 분할 매수",
            kodex200_take_profit: 5,
            kodex200_stop_loss: 2,
            kodex150_take_profit: 6,
            kodex150_stop_loss: 2,
            cash_purpose: "안전 자산 + 기회 포착",
            cash_vehicle: "CMA/MMF",
            holding_period: "1-2주",
            daily_loss_limit: 2,
        },
        ProfileType::Moderate => StrategyRules {
            entry: "2회 분할 매수",
            kodex200_take_profit: 7,
            kodex200_stop_loss: 3,
            kodex150_take_profit: 8,
            kodex150_stop_loss: 3,
            cash_purpose: "안전 자산 + 기회 포착",
            cash_vehicle: "증권사 RP",
            holding_period: "5-7일",
            daily_loss_limit: 3,
        },
    }
}

/// Expected daily swing for the leveraged sleeve.
pub fn volatility_band(leverage_allocation: u32) -> &'static str {
    if leverage_allocation > 60 {
        "4-6"
    } else {
        "2-4"
    }
}

// ---------------------------------------------------------------------------
// ACTION_PLAN
// ---------------------------------------------------------------------------

pub const ACTION_PLAN: &str = r#"🎯 **시나리오별 대응 전략**

{scenarios}

---

**🔔 {banner}**"#;

pub const SCENARIO_BLOCK: &str = "{heading}
→ {response}
→ {follow_up}";

pub fn scenario_heading(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Bullish => "📈 **강세 시나리오 (KOSPI +2% 이상)**",
        Scenario::Neutral => "📊 **박스권 시나리오 (±1% 내)**",
        Scenario::Bearish => "📉 **조정 시나리오 (KOSPI -2% ~ -4%)**",
        Scenario::Crash => "⚠️ **급락 시나리오 (KOSPI -5% 이상)**",
    }
}

pub fn scenario_response(profile_type: ProfileType, scenario: Scenario) -> &'static str {
    use ProfileType::*;
    use Scenario::*;

    match (profile_type, scenario) {
        (Aggressive, Bullish) => "레버리지 비중 80%로 확대 → 수익 극대화",
        (Aggressive, Neutral) => "레버리지 70% 유지 → 단기 반등 노림",
        (Aggressive, Bearish) => "레버리지 40%로 축소 → 손절 후 재진입 대기",
        (Aggressive, Crash) => "전량 청산 → 현금 100% 전환 후 바닥 확인",

        (Conservative, Bullish) => "레버리지 30%로 소폭 확대 → 안전한 추세 추종",
        (Conservative, Neutral) => "현재 비중 유지 → 관망",
        (Conservative, Bearish) => "레버리지 15%로 축소 → 방어 모드",
        (Conservative, Crash) => "레버리지 0% → 전액 현금 보유",

        (Moderate, Bullish) => "레버리지 60%로 확대 → 반등 수혜",
        (Moderate, Neutral) => "레버리지 50% 유지 → 균형 유지",
        (Moderate, Bearish) => "레버리지 30%로 축소 → 리스크 감소",
        (Moderate, Crash) => "레버리지 20% → 현금 비중 80%",
    }
}

/// Second line under each scenario. The correction follow-up depends on how
/// much leverage is held rather than on the profile.
pub fn scenario_follow_up(
    profile_type: ProfileType,
    scenario: Scenario,
    leverage_allocation: u32,
) -> &'static str {
    let aggressive = profile_type == ProfileType::Aggressive;
    match scenario {
        Scenario::Bullish if aggressive => "목표가 도달 시 50% 부분 익절",
        Scenario::Bullish => "목표가 도달 시 전량 익절",
        Scenario::Neutral if aggressive => "단기 스윙 매매 (데이 트레이딩)",
        Scenario::Neutral => "리밸런싱 관찰",
        Scenario::Bearish if leverage_allocation > 50 => "손절선 엄격 준수",
        Scenario::Bearish => "현금으로 저점 매수 기회 탐색",
        Scenario::Crash if aggressive => "패닉 매도 회피, 계획된 손절만 실행",
        Scenario::Crash => "전면 리스크 회피",
    }
}

pub fn closing_banner(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Bullish => "현재 강세장 - 공격적 진입 타이밍",
        Sentiment::Bearish => "현재 약세장 - 방어 모드 권장",
        Sentiment::Mixed => "현재 혼조장 - 신중한 진입",
    }
}

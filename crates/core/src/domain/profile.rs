use serde::{Deserialize, Serialize};
use std::fmt;

/// Investment style derived from a free-form request.
///
/// Every lookup table in the crate matches on this enum exhaustively, so a new
/// variant does not compile until each table has a row for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Aggressive,
    Conservative,
    Moderate,
}

impl ProfileType {
    pub const ALL: [ProfileType; 3] = [
        ProfileType::Aggressive,
        ProfileType::Conservative,
        ProfileType::Moderate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileType::Aggressive => "aggressive",
            ProfileType::Conservative => "conservative",
            ProfileType::Moderate => "moderate",
        }
    }

    pub fn risk_level(self) -> RiskLevel {
        match self {
            ProfileType::Aggressive => RiskLevel::High,
            ProfileType::Conservative => RiskLevel::Low,
            ProfileType::Moderate => RiskLevel::Medium,
        }
    }
}

impl fmt::Display for ProfileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "높음")]
    High,
    #[serde(rename = "중간")]
    Medium,
    #[serde(rename = "낮음")]
    Low,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::High => "높음",
            RiskLevel::Medium => "중간",
            RiskLevel::Low => "낮음",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "type")]
    pub profile_type: ProfileType,
    pub risk_level: RiskLevel,
    pub requested_leverage: u32,
    pub leverage_allocation: u32,
    pub cash_allocation: u32,
}

impl Profile {
    /// Builds a profile whose cash allocation is the complement of `leverage_allocation`.
    pub fn new(profile_type: ProfileType, requested_leverage: u32, leverage_allocation: u32) -> Self {
        let leverage_allocation = leverage_allocation.min(100);
        Self {
            profile_type,
            risk_level: profile_type.risk_level(),
            requested_leverage,
            leverage_allocation,
            cash_allocation: 100 - leverage_allocation,
        }
    }

    /// Share of the leveraged sleeve put into the KODEX 200 fund.
    pub fn kodex200_allocation(&self) -> u32 {
        split_percent(self.leverage_allocation, 0.6)
    }

    /// Share of the leveraged sleeve put into the KOSDAQ150 fund.
    pub fn kodex150_allocation(&self) -> u32 {
        split_percent(self.leverage_allocation, 0.4)
    }
}

// Rounds half away from zero, which matches half-up for the non-negative inputs here.
fn split_percent(total: u32, ratio: f64) -> u32 {
    (f64::from(total) * ratio).round() as u32
}

//! Keyword scoring that turns a free-form request into a [`Profile`].

pub mod keywords;

use crate::domain::profile::{Profile, ProfileType};
use keywords::{
    HIGH_LEVERAGE_AT_LEAST, HIGH_LEVERAGE_BONUS, LOW_LEVERAGE_AT_MOST, LOW_LEVERAGE_BONUS,
    MID_LEVERAGE_BONUS,
};
use regex::Regex;
use std::sync::LazyLock;

/// Leverage used when the request names no percentage.
pub const DEFAULT_LEVERAGE: u32 = 50;
pub const MAX_AGGRESSIVE_LEVERAGE: u32 = 80;
pub const MIN_CONSERVATIVE_LEVERAGE: u32 = 20;
pub const MODERATE_LEVERAGE: u32 = 50;

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)%").expect("percent pattern is valid"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub aggressive: u32,
    pub conservative: u32,
    pub moderate: u32,
}

impl Scores {
    fn add(&mut self, profile_type: ProfileType, points: u32) {
        match profile_type {
            ProfileType::Aggressive => self.aggressive += points,
            ProfileType::Conservative => self.conservative += points,
            ProfileType::Moderate => self.moderate += points,
        }
    }

    /// Strict comparison; ties fall through to conservative, then moderate.
    pub fn resolve(&self) -> ProfileType {
        if self.aggressive > self.conservative && self.aggressive > self.moderate {
            ProfileType::Aggressive
        } else if self.conservative > self.aggressive {
            ProfileType::Conservative
        } else {
            ProfileType::Moderate
        }
    }
}

/// First `<digits>%` in the raw text, clamped to 0..=100.
///
/// A digit run too long for `u32` is treated as 100.
pub fn extract_leverage(input: &str) -> Option<u32> {
    let caps = PERCENT_RE.captures(input)?;
    let digits = caps.get(1)?.as_str();
    let value = digits.parse::<u32>().unwrap_or(u32::MAX);
    Some(value.min(100))
}

pub fn score(input: &str, requested_leverage: u32) -> Scores {
    let normalized = input.to_lowercase();

    let mut scores = Scores::default();
    for profile_type in ProfileType::ALL {
        let points = keywords::family(profile_type).score(&normalized);
        scores.add(profile_type, points);
    }

    if requested_leverage >= HIGH_LEVERAGE_AT_LEAST {
        scores.add(ProfileType::Aggressive, HIGH_LEVERAGE_BONUS);
    } else if requested_leverage <= LOW_LEVERAGE_AT_MOST {
        scores.add(ProfileType::Conservative, LOW_LEVERAGE_BONUS);
    } else {
        scores.add(ProfileType::Moderate, MID_LEVERAGE_BONUS);
    }

    scores
}

/// Classifies a request. Total over every string, including the empty one.
pub fn classify(input: &str) -> Profile {
    let requested = extract_leverage(input).unwrap_or(DEFAULT_LEVERAGE);
    let scores = score(input, requested);
    let profile_type = scores.resolve();

    tracing::debug!(
        aggressive = scores.aggressive,
        conservative = scores.conservative,
        moderate = scores.moderate,
        requested_leverage = requested,
        profile = %profile_type,
        "classified request"
    );

    Profile::new(profile_type, requested, leverage_allocation(profile_type, requested))
}

fn leverage_allocation(profile_type: ProfileType, requested: u32) -> u32 {
    match profile_type {
        ProfileType::Aggressive => requested.min(MAX_AGGRESSIVE_LEVERAGE),
        // Half the request, rounded half-up, but never below the floor.
        ProfileType::Conservative => MIN_CONSERVATIVE_LEVERAGE.max(requested.div_ceil(2)),
        ProfileType::Moderate => MODERATE_LEVERAGE,
    }
}

use crate::domain::profile::ProfileType;

/// A family of keywords that votes for one profile type.
///
/// Each keyword is a presence test: it contributes `weight` once no matter how
/// many times it occurs.
#[derive(Debug, Clone, Copy)]
pub struct KeywordFamily {
    pub weight: u32,
    pub keywords: &'static [&'static str],
}

const AGGRESSIVE: KeywordFamily = KeywordFamily {
    weight: 2,
    keywords: &["레버리지", "공격적", "적극", "고수익", "고위험", "빠른", "단기"],
};

const CONSERVATIVE: KeywordFamily = KeywordFamily {
    weight: 2,
    keywords: &["안전", "보수적", "현금", "안정", "장기", "리스크 회피", "방어"],
};

const MODERATE: KeywordFamily = KeywordFamily {
    weight: 1,
    keywords: &["균형", "중립", "적당", "분산"],
};

pub fn family(profile_type: ProfileType) -> &'static KeywordFamily {
    match profile_type {
        ProfileType::Aggressive => &AGGRESSIVE,
        ProfileType::Conservative => &CONSERVATIVE,
        ProfileType::Moderate => &MODERATE,
    }
}

impl KeywordFamily {
    pub fn score(&self, normalized: &str) -> u32 {
        let hits = self
            .keywords
            .iter()
            .filter(|kw| normalized.contains(*kw))
            .count() as u32;
        hits * self.weight
    }
}

// Requested leverage bands that add a bonus to one of the scores.
pub const HIGH_LEVERAGE_AT_LEAST: u32 = 70;
pub const LOW_LEVERAGE_AT_MOST: u32 = 30;
pub const HIGH_LEVERAGE_BONUS: u32 = 3;
pub const LOW_LEVERAGE_BONUS: u32 = 3;
pub const MID_LEVERAGE_BONUS: u32 = 2;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Index move (in percent) above which the market counts as bullish, and below
/// whose negation it counts as bearish. Both comparisons are strict.
pub const SENTIMENT_THRESHOLD: f64 = 0.5;

/// Quotes supplied by the caller. Every field is optional at every level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default, deserialize_with = "lenient_object")]
    pub kospi: Option<Quote>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub kosdaq: Option<Quote>,
    /// KODEX 200 레버리지 (122630).
    #[serde(default, deserialize_with = "lenient_object")]
    pub kodex200: Option<Quote>,
    /// KODEX KOSDAQ150 레버리지 (233740).
    #[serde(default, deserialize_with = "lenient_object")]
    pub kodex150: Option<Quote>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub change: Option<f64>,
}

impl Quote {
    pub fn new(price: f64, change: f64) -> Self {
        Self {
            price: Some(price),
            change: Some(change),
        }
    }
}

impl MarketSnapshot {
    pub fn kospi_price(&self) -> Option<f64> {
        self.kospi.and_then(|q| q.price)
    }

    pub fn kospi_change(&self) -> Option<f64> {
        self.kospi.and_then(|q| q.change)
    }

    pub fn kosdaq_price(&self) -> Option<f64> {
        self.kosdaq.and_then(|q| q.price)
    }

    pub fn kosdaq_change(&self) -> Option<f64> {
        self.kosdaq.and_then(|q| q.change)
    }

    pub fn kodex200_price(&self) -> Option<f64> {
        self.kodex200.and_then(|q| q.price)
    }

    pub fn kodex150_price(&self) -> Option<f64> {
        self.kodex150.and_then(|q| q.price)
    }

    /// Average of the two index changes; a missing change counts as 0.
    pub fn trend(&self) -> f64 {
        let kospi = self.kospi_change().unwrap_or(0.0);
        let kosdaq = self.kosdaq_change().unwrap_or(0.0);
        (kospi + kosdaq) / 2.0
    }

    pub fn sentiment(&self) -> Sentiment {
        Sentiment::from_trend(self.trend())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Mixed,
}

impl Sentiment {
    pub fn from_trend(trend: f64) -> Self {
        if trend > SENTIMENT_THRESHOLD {
            Sentiment::Bullish
        } else if trend < -SENTIMENT_THRESHOLD {
            Sentiment::Bearish
        } else {
            Sentiment::Mixed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Bullish => "강세",
            Sentiment::Bearish => "약세",
            Sentiment::Mixed => "혼조",
        }
    }
}

/// Market-movement bucket used to pick action-plan phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Bullish,
    Neutral,
    Bearish,
    Crash,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Bullish,
        Scenario::Neutral,
        Scenario::Bearish,
        Scenario::Crash,
    ];
}

/// Deserializes `T` from a JSON object; any other JSON type is treated as absent.
pub(crate) fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => Ok(serde_json::from_value(value).ok()),
        _ => Ok(None),
    }
}

// Accepts numbers and numeric strings; anything else is treated as absent.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(number.filter(|n| n.is_finite()))
}

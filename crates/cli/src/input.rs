use anyhow::Context;
use chrono::{DateTime, Utc};
use etf_advisor_core::domain::market::MarketSnapshot;
use std::io::Read;
use std::path::Path;

pub fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read request text from stdin failed")?;
    Ok(buf)
}

pub fn load_market(path: &Path) -> anyhow::Result<MarketSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read market file {} failed", path.display()))?;
    parse_market(&raw).with_context(|| format!("invalid market file {}", path.display()))
}

pub fn parse_market(raw: &str) -> anyhow::Result<MarketSnapshot> {
    Ok(serde_json::from_str(raw)?)
}

pub fn resolve_now(now_arg: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match now_arg {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("--now must be RFC 3339 (got {s:?})"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

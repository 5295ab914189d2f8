pub mod advice;
pub mod classify;
pub mod domain;
pub mod error;
pub mod report;
pub mod time;

pub mod config {
    pub const DEFAULT_REPORT_MODEL: &str = "template-ai-v1";
    pub const DEFAULT_PORT: u16 = 3000;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub port: u16,
        pub report_model: String,
        pub sentry_dsn: Option<String>,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                port: DEFAULT_PORT,
                report_model: DEFAULT_REPORT_MODEL.to_string(),
                sentry_dsn: None,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let port = match std::env::var("PORT") {
                Ok(v) => v
                    .trim()
                    .parse::<u16>()
                    .map_err(|e| anyhow::anyhow!("PORT must be a valid port number ({v:?}): {e}"))?,
                Err(_) => DEFAULT_PORT,
            };

            let report_model = std::env::var("REPORT_MODEL")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_REPORT_MODEL.to_string());

            Ok(Self {
                port,
                report_model,
                sentry_dsn: std::env::var("SENTRY_DSN").ok().filter(|s| !s.is_empty()),
            })
        }
    }
}

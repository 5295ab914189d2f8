use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use etf_advisor_core::domain::contract::{AdviceRequest, AdviceResponse};

mod input;

#[derive(Debug, Parser)]
#[command(name = "etf_advisor", about = "Render a leveraged-ETF advisory report")]
struct Args {
    /// Investment request text. Read from stdin when omitted.
    text: Option<String>,

    /// Market snapshot JSON file ({"kospi": {"price": .., "change": ..}, ..}).
    #[arg(long)]
    market: Option<PathBuf>,

    /// Print the JSON response envelope instead of the bare report.
    #[arg(long)]
    json: bool,

    /// Pin the clock (RFC 3339, e.g. 2026-01-05T00:00:00Z) for reproducible output.
    #[arg(long)]
    now: Option<String>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = etf_advisor_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let text = match args.text {
        Some(text) => text,
        None => input::read_stdin()?,
    };
    let market = args.market.as_deref().map(input::load_market).transpose()?;
    let now = input::resolve_now(args.now.as_deref())?;

    let request = AdviceRequest::new(text, market);
    match etf_advisor_core::advice::handle(request, now, &settings.report_model) {
        Ok(advice) => {
            if args.json {
                let response = AdviceResponse::from(advice);
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                println!("{}", advice.report);
            }
            Ok(())
        }
        Err(err) => {
            if args.json {
                let response = AdviceResponse::failure(err.to_string());
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            let err = anyhow::Error::new(err);
            sentry_anyhow::capture_anyhow(&err);
            tracing::error!(error = %err, "report generation failed");
            Err(err)
        }
    }
}

fn init_sentry(settings: &etf_advisor_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

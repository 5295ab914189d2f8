use crate::domain::market::{MarketSnapshot, Sentiment};
use crate::domain::profile::Profile;
use crate::report::quote_text;
use crate::report::resources;
use crate::report::template::fill;

pub fn render(
    profile: &Profile,
    market: &MarketSnapshot,
    sentiment: Sentiment,
    date: &str,
    input: &str,
) -> String {
    let kospi_price = quote_text(market.kospi_price());
    let kospi_change = quote_text(market.kospi_change());
    let kosdaq_price = quote_text(market.kosdaq_price());
    let kosdaq_change = quote_text(market.kosdaq_change());
    let kodex200_price = quote_text(market.kodex200_price());

    let kodex200_allocation = profile.kodex200_allocation().to_string();
    let kodex150_allocation = profile.kodex150_allocation().to_string();
    let leverage = profile.leverage_allocation.to_string();
    let cash = profile.cash_allocation.to_string();

    fill(
        resources::executive_summary(profile.profile_type),
        &[
            ("date", date),
            ("sentiment", sentiment.label()),
            ("kospi_price", &kospi_price),
            ("kospi_change", &kospi_change),
            ("kosdaq_price", &kosdaq_price),
            ("kosdaq_change", &kosdaq_change),
            ("kodex200_price", &kodex200_price),
            ("kodex200_allocation", &kodex200_allocation),
            ("kodex150_allocation", &kodex150_allocation),
            ("leverage", &leverage),
            ("cash", &cash),
            ("user_input", input),
            (
                "target_return",
                resources::aggressive_target_return(profile.requested_leverage),
            ),
        ],
    )
}

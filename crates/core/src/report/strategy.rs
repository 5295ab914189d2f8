use crate::domain::market::MarketSnapshot;
use crate::domain::profile::Profile;
use crate::report::quote_text;
use crate::report::resources::{self, PORTFOLIO_STRATEGY};
use crate::report::template::fill;

pub fn render(profile: &Profile, market: &MarketSnapshot) -> String {
    let rules = resources::strategy_rules(profile.profile_type);

    let leverage = profile.leverage_allocation.to_string();
    let cash = profile.cash_allocation.to_string();
    let kodex200_allocation = profile.kodex200_allocation().to_string();
    let kodex150_allocation = profile.kodex150_allocation().to_string();
    let kodex200_price = quote_text(market.kodex200_price());
    let kodex150_price = quote_text(market.kodex150_price());
    let kodex200_take_profit = rules.kodex200_take_profit.to_string();
    let kodex200_stop_loss = rules.kodex200_stop_loss.to_string();
    let kodex150_take_profit = rules.kodex150_take_profit.to_string();
    let kodex150_stop_loss = rules.kodex150_stop_loss.to_string();
    let daily_loss_limit = rules.daily_loss_limit.to_string();

    fill(
        PORTFOLIO_STRATEGY,
        &[
            ("leverage", &leverage),
            ("cash", &cash),
            ("kodex200_allocation", &kodex200_allocation),
            ("kodex150_allocation", &kodex150_allocation),
            ("kodex200_price", &kodex200_price),
            ("kodex150_price", &kodex150_price),
            ("entry", rules.entry),
            ("kodex200_take_profit", &kodex200_take_profit),
            ("kodex200_stop_loss", &kodex200_stop_loss),
            ("kodex150_take_profit", &kodex150_take_profit),
            ("kodex150_stop_loss", &kodex150_stop_loss),
            ("cash_purpose", rules.cash_purpose),
            ("cash_vehicle", rules.cash_vehicle),
            ("holding_period", rules.holding_period),
            ("daily_loss_limit", &daily_loss_limit),
            (
                "volatility",
                resources::volatility_band(profile.leverage_allocation),
            ),
        ],
    )
}

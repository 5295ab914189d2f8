use crate::domain::market::{Scenario, Sentiment};
use crate::domain::profile::Profile;
use crate::report::resources::{self, ACTION_PLAN, SCENARIO_BLOCK};
use crate::report::template::fill;

pub fn render(profile: &Profile, sentiment: Sentiment) -> String {
    let scenarios = Scenario::ALL
        .iter()
        .map(|&scenario| {
            fill(
                SCENARIO_BLOCK,
                &[
                    ("heading", resources::scenario_heading(scenario)),
                    (
                        "response",
                        resources::scenario_response(profile.profile_type, scenario),
                    ),
                    (
                        "follow_up",
                        resources::scenario_follow_up(
                            profile.profile_type,
                            scenario,
                            profile.leverage_allocation,
                        ),
                    ),
                ],
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    fill(
        ACTION_PLAN,
        &[
            ("scenarios", &scenarios),
            ("banner", resources::closing_banner(sentiment)),
        ],
    )
}

use chrono::{DateTime, Utc};
use shared::countdown;
use shared::CountdownState;
use yew::prelude::*;

use crate::hooks::use_clock;

fn default_heading() -> String {
    "Leaderboard ends in".to_string()
}

#[derive(Properties, PartialEq)]
pub struct CountdownDisplayProps {
    pub end: DateTime<Utc>,
    #[prop_or_else(default_heading)]
    pub heading: String,
}

fn unit(value: String, label: &'static str) -> Html {
    html! {
        <div class="flex flex-col items-center px-3">
            <span class="text-3xl font-bold text-[#E10600] tabular-nums">{ value }</span>
            <span class="text-xs uppercase tracking-wider text-gray-500">{ label }</span>
        </div>
    }
}

/// Re-renders once per second; the state is always recomputed from the clock and `end`.
#[function_component(CountdownDisplay)]
pub fn countdown_display(props: &CountdownDisplayProps) -> Html {
    let now = use_clock();

    let body = match countdown(now, props.end) {
        CountdownState::Remaining {
            days,
            hours,
            minutes,
            seconds,
        } => html! {
            <div class="flex justify-center divide-x divide-gray-200">
                { unit(format!("{:02}", days), "days") }
                { unit(format!("{:02}", hours), "hours") }
                { unit(format!("{:02}", minutes), "minutes") }
                { unit(format!("{:02}", seconds), "seconds") }
            </div>
        },
        ended @ CountdownState::Ended => html! {
            <p class="text-lg font-semibold text-gray-600">{ ended.to_string() }</p>
        },
    };

    html! {
        <div class="p-4 bg-white rounded-lg shadow-lg text-center">
            <h3 class="text-lg font-semibold mb-2 text-gray-900">{ &props.heading }</h3>
            { body }
        </div>
    }
}

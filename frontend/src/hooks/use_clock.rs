use chrono::{DateTime, Utc};
use shared::constants::COUNTDOWN_TICK;
use yew::prelude::*;

use super::PollingHandle;

/// Current time, re-read once per countdown tick. Touches no network resource.
#[hook]
pub fn use_clock() -> DateTime<Utc> {
    let now = use_state(Utc::now);

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let ticker = PollingHandle::start(COUNTDOWN_TICK, move || now.set(Utc::now()));
            move || drop(ticker)
        });
    }

    *now
}

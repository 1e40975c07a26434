use shared::constants::LIVE_STATUS_INTERVAL;
use shared::live_status::LiveStatus;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::PollingHandle;
use crate::api::fetch_live_status;

#[hook]
pub fn use_live_status() -> LiveStatus {
    let status = use_state(LiveStatus::default);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            let alive = Rc::new(Cell::new(true));

            let check = {
                let alive = alive.clone();
                move || {
                    let status = status.clone();
                    let alive = alive.clone();
                    spawn_local(async move {
                        match fetch_live_status().await {
                            Ok(latest) if alive.get() => status.set(latest),
                            Ok(_) => {}
                            Err(e) => log::error!("Error fetching live status: {}", e),
                        }
                    });
                }
            };

            check();
            let poller = PollingHandle::start(LIVE_STATUS_INTERVAL, check);

            move || {
                alive.set(false);
                drop(poller);
            }
        });
    }

    *status
}

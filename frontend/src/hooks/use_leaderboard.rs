use chrono::{DateTime, Utc};
use shared::{
    FeedKind, FeedState, LeaderboardError, LeaderboardSnapshot, RefreshDecision, RefreshPolicy,
    TimeWindow,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::PollingHandle;
use crate::api::fetch_leaderboard;
use crate::storage::{read_last_fetch, write_last_fetch};

/// Which feed and which period a result belongs to.
type FeedKey = (FeedKind, i32);

pub enum FeedAction {
    Begin(FeedKey),
    Finish(FeedKey, Result<LeaderboardSnapshot, LeaderboardError>),
}

#[derive(Clone, PartialEq, Default)]
pub struct LeaderboardModel {
    key: Option<FeedKey>,
    pub state: FeedState<LeaderboardSnapshot>,
}

impl Reducible for LeaderboardModel {
    type Action = FeedAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FeedAction::Begin(key) => {
                // Data from another feed or period is never shown under this one.
                let state = if self.key == Some(key) {
                    self.state.clone().begin_refresh()
                } else {
                    FeedState::Idle.begin_refresh()
                };
                Rc::new(Self {
                    key: Some(key),
                    state,
                })
            }
            FeedAction::Finish(key, result) if self.key == Some(key) => Rc::new(Self {
                key: Some(key),
                state: self.state.clone().finish(result),
            }),
            FeedAction::Finish(..) => self,
        }
    }
}

async fn load_snapshot(
    feed: FeedKind,
    offset: i32,
    now: DateTime<Utc>,
) -> Result<LeaderboardSnapshot, LeaderboardError> {
    let presenter = feed.presenter()?;
    let window = presenter.window(now, offset)?;
    let page = fetch_leaderboard(feed, &window, feed.pagination()).await?;
    presenter.present_with_offset(page.rows, page.disclosure, now, offset)
}

pub struct UseLeaderboardHandle {
    pub state: FeedState<LeaderboardSnapshot>,
    pub refresh: Callback<()>,
}

/// Fetches `feed` for the period `offset` steps from the current one, then keeps it fresh
/// on the feed's refresh interval. Both the timer and in-flight results are released on teardown.
#[hook]
pub fn use_leaderboard(feed: FeedKind, offset: i32) -> UseLeaderboardHandle {
    let model = use_reducer(LeaderboardModel::default);
    let manual_refreshes = use_state(|| 0u32);

    {
        let dispatcher = model.dispatcher();
        use_effect_with((feed, offset, *manual_refreshes), move |&(feed, offset, _)| {
            let key = (feed, offset);
            let policy = feed.refresh_policy();
            let alive = Rc::new(Cell::new(true));
            // Window of the rows on screen. Scoped to this effect run, so a manual
            // refresh or a new period always fetches first.
            let shown: Rc<Cell<Option<TimeWindow>>> = Rc::new(Cell::new(None));

            let refresh = {
                let alive = alive.clone();
                move || {
                    let now = Utc::now();
                    let decision = match feed.presenter().and_then(|p| p.window(now, offset)) {
                        Ok(expected) => policy.decide_for_window(
                            now,
                            read_last_fetch(feed),
                            shown.get().as_ref(),
                            &expected,
                        ),
                        Err(_) => RefreshDecision::Fetch,
                    };
                    if decision == RefreshDecision::Skip {
                        log::debug!("{} still in cooldown, keeping current rows", feed.slug());
                        return;
                    }

                    dispatcher.dispatch(FeedAction::Begin(key));

                    let dispatcher = dispatcher.clone();
                    let alive = alive.clone();
                    let shown = shown.clone();
                    spawn_local(async move {
                        let result = load_snapshot(feed, offset, now).await;
                        if !alive.get() {
                            return;
                        }
                        let previous = read_last_fetch(feed);
                        let last_fetch = RefreshPolicy::after_attempt(now, &result, previous);
                        if let Some(at) = last_fetch.filter(|_| last_fetch != previous) {
                            write_last_fetch(feed, at);
                        }
                        match &result {
                            Ok(snapshot) => shown.set(Some(snapshot.window)),
                            Err(e) => {
                                log::error!("Failed to load {} leaderboard: {}", feed.slug(), e)
                            }
                        }
                        dispatcher.dispatch(FeedAction::Finish(key, result));
                    });
                }
            };

            refresh();
            let poller = PollingHandle::start(policy.interval, refresh);

            move || {
                alive.set(false);
                drop(poller);
            }
        });
    }

    let refresh = {
        let manual_refreshes = manual_refreshes.clone();
        Callback::from(move |_| manual_refreshes.set(manual_refreshes.wrapping_add(1)))
    };

    UseLeaderboardHandle {
        state: model.state.clone(),
        refresh,
    }
}

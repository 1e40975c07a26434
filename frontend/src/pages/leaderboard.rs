use chrono::{DateTime, Utc};
use shared::{FeedKind, FeedState, LeaderboardSnapshot};
use yew::prelude::*;

use crate::components::{CountdownDisplay, Footer, LeaderboardTable, Navbar};
use crate::hooks::use_leaderboard;

#[derive(Properties, PartialEq)]
pub struct LeaderboardPageProps {
    pub feed: String,
}

fn period_label(feed: FeedKind, snapshot: &LeaderboardSnapshot) -> String {
    let day = |instant: DateTime<Utc>| instant.format("%Y-%m-%d").to_string();
    if feed.supports_paging() {
        snapshot.window.start.format("%B %Y").to_string()
    } else {
        format!("{} → {}", day(snapshot.window.start), day(snapshot.window.end))
    }
}

fn snapshot_view(feed: FeedKind, snapshot: &LeaderboardSnapshot) -> Html {
    html! {
        <>
            <p class="text-center text-sm text-gray-500 mb-4">
                { format!("Period: {}", period_label(feed, snapshot)) }
            </p>
            <div class="max-w-xl mx-auto mb-8">
                <CountdownDisplay end={snapshot.window.end} />
            </div>
            if let Some(disclosure) = &snapshot.disclosure {
                <div class="mb-6 p-4 rounded-lg bg-gray-100 text-sm text-gray-700">
                    <h3 class="font-semibold mb-1">{ "Important Information" }</h3>
                    <p>{ disclosure }</p>
                </div>
            }
            if snapshot.total_prize_pool > 0 {
                <p class="text-center text-xl font-bold mb-6">
                    { "Prize pool: " }
                    <span class="text-[#E10600]">{ shared::format::format_currency(snapshot.total_prize_pool as f64) }</span>
                </p>
            }
            <LeaderboardTable {feed} snapshot={snapshot.clone()} />
        </>
    }
}

#[derive(Properties, PartialEq)]
struct FeedLeaderboardProps {
    feed: FeedKind,
}

#[function_component(FeedLeaderboard)]
fn feed_leaderboard(props: &FeedLeaderboardProps) -> Html {
    let feed = props.feed;
    let offset = use_state(|| 0i32);
    let leaderboard = use_leaderboard(feed, *offset);

    let on_previous = {
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| offset.set(*offset - 1))
    };
    let on_next = {
        let offset = offset.clone();
        Callback::from(move |_: MouseEvent| offset.set(*offset + 1))
    };
    let on_retry = {
        let refresh = leaderboard.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let status = match &leaderboard.state {
        FeedState::Idle => html! {},
        FeedState::Loading { .. } => html! {
            <p class="text-center text-gray-500 animate-pulse mb-4">{ "Loading leaderboard..." }</p>
        },
        FeedState::Ready(_) => html! {},
        FeedState::Failed { error, .. } => html! {
            <div class="mb-6 p-4 rounded-lg bg-red-50 border border-[#E10600] text-center">
                <p class="text-[#E10600] font-semibold">{ error.user_message() }</p>
                <button onclick={on_retry} class="mt-2 px-4 py-1 rounded-md bg-black text-white">
                    { "Retry" }
                </button>
            </div>
        },
    };

    html! {
        <main class="container mx-auto px-4 py-12">
            <h1 class="text-4xl font-extrabold mb-2 text-center">{ feed.title() }</h1>
            if feed.supports_paging() {
                <div class="flex justify-center gap-4 my-4">
                    <button onclick={on_previous} class="px-4 py-2 rounded-md bg-black text-white">
                        { "Previous" }
                    </button>
                    <button onclick={on_next} class="px-4 py-2 rounded-md bg-black text-white">
                        { "Next" }
                    </button>
                </div>
            }
            { status }
            if let Some(snapshot) = leaderboard.state.current() {
                { snapshot_view(feed, snapshot) }
            }
        </main>
    }
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page(props: &LeaderboardPageProps) -> Html {
    let body = match FeedKind::from_slug(&props.feed) {
        Some(feed) => html! { <FeedLeaderboard key={feed.slug()} {feed} /> },
        None => html! {
            <main class="container mx-auto px-4 py-12 text-center">
                <h1 class="text-3xl font-bold">{ "Leaderboard not found" }</h1>
            </main>
        },
    };

    html! {
        <div class="min-h-screen bg-white text-black">
            <Navbar />
            { body }
            <Footer />
        </div>
    }
}

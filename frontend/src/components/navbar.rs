use shared::FeedKind;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_live_status;
use crate::Route;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let live = use_live_status();
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let badge = match live.badge() {
        Some(text) => html! {
            <span class="ml-2 px-3 py-0.5 text-xs bg-[#E10600] text-white rounded-full font-semibold animate-pulse select-none">
                { text }
            </span>
        },
        None => html! {
            <span class="ml-2 px-3 py-0.5 text-xs bg-gray-200 text-gray-600 rounded-full select-none">
                { "OFFLINE" }
            </span>
        },
    };

    let feed_links = FeedKind::ALL.iter().map(|feed| {
        html! {
            <Link<Route> to={Route::Leaderboard { feed: feed.slug().to_string() }} classes="px-3 py-2 text-sm font-medium hover:text-[#E10600]">
                { feed.title().trim_end_matches(" Leaderboard") }
            </Link<Route>>
        }
    });

    html! {
        <nav class="sticky top-0 z-50 border-b border-[#D3D3D3] backdrop-blur-md bg-white text-black shadow-md">
            <div class="container flex items-center justify-between py-3 mx-auto">
                <div class="flex items-center gap-3">
                    <Link<Route> to={Route::Home} classes="text-2xl font-bold select-none">
                        { "MisterTee" }
                    </Link<Route>>
                    { badge }
                </div>
                <button class="md:hidden px-2 py-1 border rounded" onclick={toggle}>{ "Menu" }</button>
                <div class={classes!("md:flex", "items-center", "gap-1", (!*is_open).then_some("hidden"))}>
                    <Link<Route> to={Route::Home} classes="px-3 py-2 text-sm font-medium hover:text-[#E10600]">
                        { "Home" }
                    </Link<Route>>
                    { for feed_links }
                    <Link<Route> to={Route::Giveaways} classes="px-3 py-2 text-sm font-medium hover:text-[#E10600]">
                        { "Giveaways" }
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}

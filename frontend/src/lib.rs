pub mod api;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::{
   giveaways::Giveaways,
   home::Home,
   leaderboard::LeaderboardPage,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Home,
   #[at("/leaderboard/:feed")] Leaderboard { feed: String },
   #[at("/giveaways")] Giveaways,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Home | Route::NotFound => html! { <Home /> },
       Route::Leaderboard { feed } => html! { <LeaderboardPage {feed} /> },
       Route::Giveaways => html! { <Giveaways /> },
   }
}

use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = Utc::now().year();

    html! {
        <footer class="border-t border-[#D3D3D3] bg-white text-black">
            <div class="container mx-auto py-8 grid gap-8 md:grid-cols-3">
                <div>
                    <h3 class="font-bold mb-2">{ "MisterTee" }</h3>
                    <p class="text-sm text-gray-600">
                        { "Join MisterTee's community for gambling streams, giveaways, and more. Use affiliate code MisterTee." }
                    </p>
                </div>
                <div class="flex flex-col gap-1 text-sm">
                    <Link<Route> to={Route::Home}>{ "Home" }</Link<Route>>
                    <Link<Route> to={Route::Giveaways}>{ "Giveaways" }</Link<Route>>
                </div>
                <div class="flex gap-3 text-sm">
                    <a href="https://kick.com/MisterTee" target="_blank" rel="noreferrer">{ "Kick" }</a>
                    <a href="https://x.com/Mister7ee" target="_blank" rel="noreferrer">{ "X" }</a>
                    <a href="https://discord.gg/YmvDexVt" target="_blank" rel="noreferrer">{ "Discord" }</a>
                </div>
            </div>
            <div class="text-center text-xs text-gray-500 pb-6">
                { format!("© {} MisterTee. 18+ only. Gamble responsibly.", current_year) }
            </div>
        </footer>
    }
}

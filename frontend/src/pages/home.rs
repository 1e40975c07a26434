use shared::{FeedKind, PeriodConfig};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{CountdownDisplay, Footer, Navbar};
use crate::hooks::use_clock;
use crate::Route;

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    title: &'static str,
    description: &'static str,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="p-6 bg-white rounded-lg shadow-lg border border-[#D3D3D3]">
            <h3 class="text-lg font-bold mb-2">{ props.title }</h3>
            <p class="text-sm text-gray-600">{ props.description }</p>
        </div>
    }
}

/// Headline countdown to the monthly reset shared by most feeds. The window is
/// re-resolved on every tick so it rolls into the next month on its own.
#[function_component(MonthlyCountdown)]
fn monthly_countdown() -> Html {
    let now = use_clock();

    match PeriodConfig::monthly().window_at(now) {
        Ok(window) => html! { <CountdownDisplay end={window.end} heading="Leaderboard Ends In" /> },
        Err(e) => {
            log::error!("Could not resolve the monthly window: {}", e);
            html! {}
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="min-h-screen bg-white text-black">
            <Navbar />
            <main class="container mx-auto px-4 py-12 space-y-16">
                <section class="text-center space-y-6">
                    <h1 class="text-4xl md:text-6xl font-extrabold">
                        { "Welcome to MisterTee's " }
                        <span class="text-[#E10600]">{ "Official Website" }</span>
                    </h1>
                    <p class="max-w-2xl mx-auto text-gray-600">
                        { "Join the community for gambling streams, giveaways, slot calls, and leaderboard competitions with affiliate code MisterTee." }
                    </p>
                    <div class="flex flex-wrap justify-center gap-4">
                        <a href="https://kick.com/MisterTee" target="_blank" rel="noreferrer"
                            class="px-6 py-3 rounded-md bg-[#E10600] text-white font-semibold">
                            { "Watch Stream" }
                        </a>
                        <a href="https://rainbet.com/?r=MisterTee" target="_blank" rel="noreferrer"
                            class="px-6 py-3 rounded-md border border-black font-semibold">
                            { "Join Rainbet with Code: MisterTee" }
                        </a>
                    </div>
                </section>

                <section class="max-w-xl mx-auto">
                    <MonthlyCountdown />
                    <p class="mt-2 text-center text-sm text-gray-500">{ "Keep playing to secure your rank!" }</p>
                </section>

                <section>
                    <h2 class="text-2xl font-bold mb-4">{ "Leaderboards" }</h2>
                    <div class="grid gap-4 md:grid-cols-3">
                        { for FeedKind::ALL.iter().map(|feed| html! {
                            <Link<Route> to={Route::Leaderboard { feed: feed.slug().to_string() }}
                                classes="block p-6 rounded-lg bg-black text-white hover:bg-[#E10600] transition-colors">
                                <span class="text-lg font-bold">{ feed.title() }</span>
                            </Link<Route>>
                        }) }
                    </div>
                </section>

                <section>
                    <h2 class="text-2xl font-bold mb-4">{ "What We Offer" }</h2>
                    <div class="grid gap-4 md:grid-cols-3">
                        <FeatureCard title="Exciting Gambling Streams"
                            description="Watch slot sessions, casino games, and big win moments live on Kick." />
                        <FeatureCard title="Leaderboard Competitions"
                            description="Wager with the affiliate code and climb the monthly, weekly and biweekly boards." />
                        <FeatureCard title="Regular Giveaways"
                            description="Participate in frequent giveaways for a chance to win cash, gaming gear, and more." />
                    </div>
                </section>
            </main>
            <Footer />
        </div>
    }
}

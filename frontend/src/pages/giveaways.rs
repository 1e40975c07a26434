use shared::giveaway::{Giveaway, GiveawayStatus};
use shared::constants::DEFAULT_GIVEAWAY_MAX_PARTICIPANTS;
use yew::prelude::*;

use crate::components::{Footer, GiveawayCard, Navbar};

fn current_giveaways() -> Vec<Giveaway> {
    vec![
        Giveaway {
            id: "weekly-cash".to_string(),
            title: "Weekly Cash Drop".to_string(),
            prize: "$100 Cash".to_string(),
            end_time: "Ends Sunday 23:59 UTC".to_string(),
            participants: 0,
            max_participants: DEFAULT_GIVEAWAY_MAX_PARTICIPANTS,
            status: GiveawayStatus::Active,
            is_entered: false,
        },
        Giveaway {
            id: "stream-milestone".to_string(),
            title: "Stream Milestone".to_string(),
            prize: "$250 Cash".to_string(),
            end_time: "Starts next stream".to_string(),
            participants: 0,
            max_participants: 250,
            status: GiveawayStatus::Upcoming,
            is_entered: false,
        },
    ]
}

#[function_component(Giveaways)]
pub fn giveaways() -> Html {
    let giveaways = use_state(current_giveaways);

    let on_enter = {
        let giveaways = giveaways.clone();
        Callback::from(move |id: String| {
            let updated = giveaways
                .iter()
                .cloned()
                .map(|mut giveaway| {
                    if giveaway.id == id && giveaway.can_enter() {
                        giveaway.is_entered = true;
                        giveaway.participants += 1;
                        log::info!("Entered giveaway {}", id);
                    }
                    giveaway
                })
                .collect();
            giveaways.set(updated);
        })
    };

    html! {
        <div class="min-h-screen bg-white text-black">
            <Navbar />
            <main class="container mx-auto px-4 py-12">
                <h1 class="text-4xl font-extrabold mb-8 text-center">{ "Giveaways" }</h1>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    { for giveaways.iter().map(|giveaway| html! {
                        <GiveawayCard giveaway={giveaway.clone()} on_enter={on_enter.clone()} />
                    }) }
                </div>
            </main>
            <Footer />
        </div>
    }
}

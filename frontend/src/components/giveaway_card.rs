use shared::giveaway::{Giveaway, GiveawayStatus};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GiveawayCardProps {
    pub giveaway: Giveaway,
    #[prop_or_default]
    pub on_enter: Option<Callback<String>>,
}

fn status_pill(status: GiveawayStatus) -> Html {
    let color = match status {
        GiveawayStatus::Active => "bg-[#E10600] text-white",
        GiveawayStatus::Upcoming => "bg-gray-200 text-gray-800",
        GiveawayStatus::Completed => "bg-gray-800 text-gray-200",
    };
    html! {
        <span class={classes!("px-2", "py-0.5", "rounded-full", "text-xs", "font-semibold", color)}>
            { status.label() }
        </span>
    }
}

#[function_component(GiveawayCard)]
pub fn giveaway_card(props: &GiveawayCardProps) -> Html {
    let giveaway = &props.giveaway;
    let percentage = giveaway.participation_percentage();

    let onclick = {
        let on_enter = props.on_enter.clone();
        let id = giveaway.id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(on_enter) = &on_enter {
                on_enter.emit(id.clone());
            }
        })
    };

    let action = match giveaway.status {
        GiveawayStatus::Active if giveaway.can_enter() => html! {
            <button {onclick} class="w-full py-2 rounded-md bg-[#E10600] text-white font-semibold hover:bg-black">
                { "Enter Giveaway" }
            </button>
        },
        GiveawayStatus::Active => html! {
            <button disabled=true class="w-full py-2 rounded-md border border-gray-300 text-gray-500">
                { "Entered" }
            </button>
        },
        GiveawayStatus::Completed => html! {
            <button disabled=true class="w-full py-2 rounded-md border border-gray-300 text-gray-500">
                { "Giveaway Ended" }
            </button>
        },
        GiveawayStatus::Upcoming => html! {
            <button disabled=true class="w-full py-2 rounded-md border border-gray-300 text-gray-500">
                { "Coming Soon" }
            </button>
        },
    };

    html! {
        <div class="bg-white rounded-lg shadow-lg overflow-hidden">
            <div class="h-1 bg-[#E10600]"></div>
            <div class="p-5 space-y-3">
                <div class="flex items-center justify-between">
                    <h3 class="text-lg font-bold text-gray-900">{ &giveaway.title }</h3>
                    { status_pill(giveaway.status) }
                </div>
                <p class="text-2xl font-bold text-[#E10600]">{ &giveaway.prize }</p>
                <div class="flex justify-between text-sm text-gray-600">
                    <span>{ format!("{} participants", giveaway.participants) }</span>
                    <span>{ &giveaway.end_time }</span>
                </div>
                <div class="w-full h-2 bg-gray-200 rounded-full">
                    <div class="h-2 bg-[#E10600] rounded-full" style={format!("width: {}%", percentage)}></div>
                </div>
                <div class="text-xs text-gray-500">
                    { format!("{} / {} entries", giveaway.participants, giveaway.max_participants) }
                </div>
                { action }
            </div>
        </div>
    }
}

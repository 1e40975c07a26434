use shared::feeds::{MetricColumn, METRIC_WAGERED, METRIC_WEIGHTED_WAGERED};
use shared::format::{format_amount, format_currency, RtpClass};
use shared::{FeedKind, LeaderboardSnapshot, RankedRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LeaderboardTableProps {
    pub feed: FeedKind,
    pub snapshot: LeaderboardSnapshot,
}

fn rank_style(rank: u32) -> &'static str {
    match rank {
        1 => "bg-black text-white",
        2 => "bg-[#666666] text-white",
        3 => "bg-[#999999] text-white",
        _ => "bg-gray-100 text-gray-800",
    }
}

fn prize_label(ranked: &RankedRow) -> String {
    ranked
        .prize
        .as_ref()
        .map(|prize| prize.display())
        .unwrap_or_else(|| "-".to_string())
}

fn metric_cell(ranked: &RankedRow, column: &MetricColumn) -> Html {
    let value = ranked.row.metric(column.key);
    let text = match value {
        Some(v) if column.currency => format_currency(v),
        Some(v) => format_amount(v),
        None => "-".to_string(),
    };

    // Weighted wager is tinted by how much of the raw wager it retains.
    let rtp = (column.key == METRIC_WEIGHTED_WAGERED)
        .then(|| {
            let weighted = value?;
            let wagered = ranked.row.metric(METRIC_WAGERED)?;
            Some(RtpClass::from_wagers(weighted, wagered).css_class())
        })
        .flatten();

    html! {
        <td class={classes!("px-4", "py-2", "text-center", "font-bold", rtp)}>{ text }</td>
    }
}

#[function_component(LeaderboardTable)]
pub fn leaderboard_table(props: &LeaderboardTableProps) -> Html {
    let columns = props.feed.columns();
    let show_prizes = props
        .snapshot
        .ranked_rows
        .iter()
        .any(|ranked| ranked.prize.is_some());

    if props.snapshot.ranked_rows.is_empty() {
        return html! {
            <div class="p-6 text-center text-gray-500">
                { "No leaderboard data available for this period." }
            </div>
        };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="w-full border-collapse bg-white">
                <thead>
                    <tr class="bg-black text-white">
                        <th class="px-4 py-2 text-center text-xs font-semibold uppercase">{ "Rank" }</th>
                        <th class="px-4 py-2 text-left text-xs font-semibold uppercase">{ "Player" }</th>
                        { for columns.iter().map(|column| html! {
                            <th class="px-4 py-2 text-center text-xs font-semibold uppercase">{ column.label }</th>
                        }) }
                        if show_prizes {
                            <th class="px-4 py-2 text-center text-xs font-semibold uppercase">{ "Prize" }</th>
                        }
                    </tr>
                </thead>
                <tbody class="divide-y divide-gray-200">
                    { for props.snapshot.ranked_rows.iter().map(|ranked| html! {
                        <tr class="hover:bg-[#E10600]/10 transition-colors duration-150">
                            <td class="px-4 py-2 text-center">
                                <span class={classes!(
                                    "inline-flex", "items-center", "justify-center",
                                    "w-7", "h-7", "rounded-full", "text-sm", "font-semibold",
                                    rank_style(ranked.row.rank)
                                )}>
                                    { ranked.row.rank }
                                </span>
                            </td>
                            <td class="px-4 py-2 text-left font-medium">{ &ranked.row.display_name }</td>
                            { for columns.iter().map(|column| metric_cell(ranked, column)) }
                            if show_prizes {
                                <td class="px-4 py-2 text-center font-bold text-[#E10600]">
                                    { prize_label(ranked) }
                                </td>
                            }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

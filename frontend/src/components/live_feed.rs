use shared::constants::MAX_LIVE_DROPS;
use yew::prelude::*;

use crate::hooks::use_live_drops;
use crate::styles;

// Placeholder drops shown until real spins have filled the strip.
const SEED_DROPS: [char; 5] = ['🎮', '💎', '🐸', '🧪', '🌈'];

/// Horizontal strip of the latest landed prizes.
#[function_component(LiveFeed)]
pub fn live_feed() -> Html {
    let drops = use_live_drops();

    let icons: Vec<char> = drops
        .iter()
        .map(|prize| prize.icon)
        .chain(SEED_DROPS.iter().copied())
        .take(MAX_LIVE_DROPS)
        .collect();

    html! {
        <div class={styles::LIVE_STRIP}>
            <div class={styles::LIVE_LABEL}>{"LIVE"}</div>
            { for icons.iter().copied().enumerate().map(|(index, icon)| html! {
                <div key={index} class={styles::LIVE_CARD}>
                    { icon }
                </div>
            }) }
        </div>
    }
}

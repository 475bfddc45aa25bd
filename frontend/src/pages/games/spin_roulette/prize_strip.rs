use shared::shared_roulette_game::Prize;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct PrizeStripProps {
    pub strip: Vec<Prize>,
    pub scroll_ref: NodeRef,
}

/// The scrollable strip of prize cards. The w-40 card plus the gap-4 spacing
/// make each cell exactly ITEM_WIDTH wide; the side padding lines a cell's
/// center up with the pointer when the scroll offset targets it.
#[function_component(PrizeStrip)]
pub fn prize_strip(props: &PrizeStripProps) -> Html {
    html! {
        <div
            ref={props.scroll_ref.clone()}
            class="w-full overflow-x-scroll mb-8"
            style="scrollbar-width: none; scroll-behavior: auto;"
        >
            <div class="flex gap-4 py-8" style="padding-left: calc(50vw - 80px); padding-right: calc(50vw - 80px);">
                { for props.strip.iter().enumerate().map(|(index, prize)| html! {
                    <div key={format!("{}-{}", prize.id, index)} class="flex-shrink-0 w-40">
                        <div class={styles::PRIZE_CARD}>
                            <div class={styles::PRIZE_IMAGE}>
                                <span class="text-7xl">{ prize.icon }</span>
                            </div>
                            <div class={styles::PRIZE_VALUE}>
                                <span class="text-amber-400">{"⭐"}</span>
                                <span class="font-bold text-white">{ prize.stars }</span>
                            </div>
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}

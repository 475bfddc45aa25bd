use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::{HeaderIcon, ScreenHeader};
use crate::pages::games::spin_roulette::SpinRoulette;
use crate::styles;

#[derive(Clone, Copy, PartialEq)]
struct RoulettePool {
    id: u32,
    name: &'static str,
    stars: u32,
    image: char,
    locked: bool,
}

const POOLS: [RoulettePool; 6] = [
    RoulettePool { id: 1, name: "Player", stars: 119, image: '🎮', locked: false },
    RoulettePool { id: 2, name: "Bear", stars: 149, image: '🧸', locked: false },
    RoulettePool { id: 3, name: "Skull", stars: 199, image: '💀', locked: false },
    RoulettePool { id: 4, name: "Lamp", stars: 249, image: '🪔', locked: false },
    RoulettePool { id: 5, name: "Sha...", stars: 499, image: '🎪', locked: true },
    RoulettePool { id: 6, name: "Bra...", stars: 999, image: '🎁', locked: true },
];

#[derive(Properties, PartialEq)]
pub struct RouletteCaseModalProps {
    pub on_close: Callback<MouseEvent>,
}

/// Full-screen overlay listing the selectable roulette pools. Picking an
/// unlocked pool opens the spin screen; locked pools only show their badge.
#[function_component(RouletteCaseModal)]
pub fn roulette_case_modal(props: &RouletteCaseModalProps) -> Html {
    let selected = use_state(|| None::<u32>);

    if (*selected).is_some() {
        let on_back = {
            let selected = selected.clone();
            Callback::from(move |_| selected.set(None))
        };
        return html! { <SpinRoulette {on_back} /> };
    }

    html! {
        <div class={styles::MODAL_OVERLAY}>
            <div class="h-full flex flex-col">
                <header class="border-b border-white/10">
                    <ScreenHeader title="Close" icon={HeaderIcon::Close} on_leave={props.on_close.clone()} />
                </header>

                <div class="flex-1 overflow-y-auto">
                    <div class="max-w-2xl mx-auto px-4 py-6">
                        <div class={styles::MODAL_PANEL}>
                            <div class="flex items-center justify-between mb-4">
                                <h2 class="font-bold text-3xl">{"Roulette"}</h2>
                                <button onclick={props.on_close.clone()} class={styles::HEADER_BUTTON}>
                                    <svg xmlns="http://www.w3.org/2000/svg" width="28" height="28" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                        <path d="M18 6 6 18" />
                                        <path d="m6 6 12 12" />
                                    </svg>
                                </button>
                            </div>

                            <div class={styles::POOL_GRID}>
                                { for POOLS.iter().map(|pool| {
                                    let pool = *pool;
                                    let onclick = {
                                        let selected = selected.clone();
                                        Callback::from(move |_| {
                                            if !pool.locked {
                                                selected.set(Some(pool.id));
                                            }
                                        })
                                    };

                                    html! {
                                        <div key={pool.id} {onclick} class={styles::POOL_CARD}>
                                            <div class={styles::POOL_IMAGE}>
                                                if pool.locked {
                                                    <div class={styles::POOL_LOCK}>
                                                        <svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-gray-400">
                                                            <rect x="3" y="11" width="18" height="11" rx="2" />
                                                            <path d="M7 11V7a5 5 0 0 1 10 0v4" />
                                                        </svg>
                                                    </div>
                                                } else {
                                                    { pool.image }
                                                }
                                            </div>

                                            <div class="space-y-2">
                                                <h3 class="font-bold text-xl">
                                                    { pool.name }
                                                </h3>

                                                if pool.locked {
                                                    <div class={styles::POOL_BADGE}>
                                                        {"No-lose..."}
                                                    </div>
                                                } else {
                                                    <div class="flex items-center gap-1 text-amber-400">
                                                        <span class="text-lg">{"⭐"}</span>
                                                        <span class="font-bold text-lg">
                                                            { pool.stars }
                                                        </span>
                                                    </div>
                                                }
                                            </div>
                                        </div>
                                    }
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

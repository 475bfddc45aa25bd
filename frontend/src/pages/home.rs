use yew::prelude::*;

use crate::components::{BottomNav, CaseCard, CurrencyBar, HeaderIcon, LiveFeed, ScreenHeader};
use crate::models::{case_items, NavTab};
use crate::pages::games::roulette_case_modal::RouletteCaseModal;
use crate::styles;

/// The cases home screen: currency header, LIVE strip, reward categories and
/// the bottom navigation. Opening the roulette category brings up the pool
/// selection modal.
#[function_component(Home)]
pub fn home() -> Html {
    let active_tab = use_state(|| NavTab::Cases);
    let show_roulette = use_state(|| false);

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: NavTab| active_tab.set(tab))
    };

    let on_open_case = {
        let show_roulette = show_roulette.clone();
        Callback::from(move |id: &'static str| {
            // Only the roulette category has a playable flow so far.
            if id == "roulette" {
                show_roulette.set(true);
            }
        })
    };

    let on_close_modal = {
        let show_roulette = show_roulette.clone();
        Callback::from(move |_| show_roulette.set(false))
    };

    html! {
        <div class={styles::SCREEN}>
            <div class={styles::SCREEN_INNER}>
                <header class={styles::HEADER}>
                    <ScreenHeader title="Close" icon={HeaderIcon::Close} />
                    <CurrencyBar />
                </header>

                <div class="px-4 py-6 space-y-6">
                    <LiveFeed />

                    <div class="space-y-4">
                        { for case_items().into_iter().map(|item| {
                            let key = item.id;
                            html! {
                                <CaseCard {key} {item} on_open={on_open_case.clone()} />
                            }
                        }) }
                    </div>
                </div>

                <BottomNav active={*active_tab} on_select={on_select_tab} />
            </div>

            if *show_roulette {
                <RouletteCaseModal on_close={on_close_modal} />
            }
        </div>
    }
}

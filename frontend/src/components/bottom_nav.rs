use yew::prelude::*;

use crate::models::NavTab;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BottomNavProps {
    pub active: NavTab,
    pub on_select: Callback<NavTab>,
}

fn tab_icon(tab: NavTab) -> Html {
    match tab {
        NavTab::Cases => html! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z" />
                <path d="m3.3 7 8.7 5 8.7-5" />
                <path d="M12 22V12" />
            </svg>
        },
        NavTab::Contests => html! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6" />
                <path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18" />
                <path d="M4 22h16" />
                <path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22" />
                <path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22" />
                <path d="M18 2H6v7a6 6 0 0 0 12 0V2Z" />
            </svg>
        },
        NavTab::Tasks => html! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <rect x="3" y="5" width="6" height="6" rx="1" />
                <path d="m3 17 2 2 4-4" />
                <path d="M13 6h8" />
                <path d="M13 12h8" />
                <path d="M13 18h8" />
            </svg>
        },
        NavTab::Leaders => html! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M11.562 3.266a.5.5 0 0 1 .876 0L15.39 8.87a1 1 0 0 0 1.516.294L21.183 5.5a.5.5 0 0 1 .798.519l-2.834 10.246a1 1 0 0 1-.956.735H5.81a1 1 0 0 1-.957-.735L2.02 6.02a.5.5 0 0 1 .798-.519l4.276 3.664a1 1 0 0 0 1.516-.294z" />
                <path d="M5 21h14" />
            </svg>
        },
        NavTab::Profile => html! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
                <circle cx="12" cy="7" r="4" />
            </svg>
        },
    }
}

/// Fixed bottom navigation with badge counts.
#[function_component(BottomNav)]
pub fn bottom_nav(props: &BottomNavProps) -> Html {
    html! {
        <nav class={styles::NAV}>
            <div class={styles::NAV_INNER}>
                { for NavTab::ALL.iter().map(|tab| {
                    let tab = *tab;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_| on_select.emit(tab))
                    };
                    let class = if props.active == tab {
                        styles::NAV_ITEM_ACTIVE
                    } else {
                        styles::NAV_ITEM
                    };

                    html! {
                        <button {onclick} {class}>
                            <div class="relative">
                                { tab_icon(tab) }
                                if let Some(badge) = tab.badge() {
                                    <div class={styles::NAV_BADGE}>
                                        { badge }
                                    </div>
                                }
                            </div>
                            <span class="text-xs font-medium">{ tab.label() }</span>
                        </button>
                    }
                }) }
            </div>
        </nav>
    }
}

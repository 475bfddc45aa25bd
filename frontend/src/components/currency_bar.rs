use yew::prelude::*;

use crate::base::{
    dispatch_balance_event, STARS_STORAGE_KEY, STARS_UPDATE_EVENT, TICKETS_STORAGE_KEY,
    TICKETS_UPDATE_EVENT,
};
use crate::hooks::use_balance;
use crate::styles;

const STARS_TOP_UP: i32 = 25;

fn plus_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M5 12h14" />
            <path d="M12 5v14" />
        </svg>
    }
}

/// Star and ticket pills with top-up buttons.
#[function_component(CurrencyBar)]
pub fn currency_bar() -> Html {
    let stars = use_balance(STARS_STORAGE_KEY, STARS_UPDATE_EVENT);
    let tickets = use_balance(TICKETS_STORAGE_KEY, TICKETS_UPDATE_EVENT);

    let on_add_stars = {
        let stars = stars.clone();
        Callback::from(move |_| dispatch_balance_event(STARS_UPDATE_EVENT, *stars + STARS_TOP_UP))
    };

    let on_add_tickets = {
        let tickets = tickets.clone();
        Callback::from(move |_| dispatch_balance_event(TICKETS_UPDATE_EVENT, *tickets + 1))
    };

    html! {
        <div class={styles::CURRENCY_ROW}>
            <div class={styles::PILL}>
                <span class="text-2xl">{"⭐"}</span>
                <span class={styles::PILL_VALUE}>{ *stars }</span>
                <button onclick={on_add_stars} class={styles::PILL_ADD_BUTTON}>
                    { plus_icon() }
                </button>
            </div>

            <div class={styles::PILL}>
                <span class="text-2xl">{"🎫"}</span>
                <span class={styles::PILL_VALUE}>{ *tickets }</span>
                <button onclick={on_add_tickets} class={styles::PILL_ADD_BUTTON}>
                    { plus_icon() }
                </button>
            </div>
        </div>
    }
}

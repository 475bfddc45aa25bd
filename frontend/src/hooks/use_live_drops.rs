use shared::shared_roulette_game::Prize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent};
use yew::prelude::*;

use crate::base::{read_live_drops, LIVE_DROPS_UPDATE_EVENT};

/// Recent landed prizes, re-read from localStorage whenever a spin records a
/// new drop.
#[hook]
pub fn use_live_drops() -> UseStateHandle<Vec<Prize>> {
    let drops = use_state(read_live_drops);

    {
        let drops = drops.clone();
        use_effect_with((), move |_| {
            let cb = drops.clone();

            let listener = Closure::wrap(Box::new(move |_: CustomEvent| {
                cb.set(read_live_drops());
            }) as Box<dyn FnMut(CustomEvent)>);

            if let Some(window) = window() {
                let _ = window.add_event_listener_with_callback(
                    LIVE_DROPS_UPDATE_EVENT,
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window() {
                    let _ = window.remove_event_listener_with_callback(
                        LIVE_DROPS_UPDATE_EVENT,
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    drops
}

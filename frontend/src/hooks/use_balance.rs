use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, CustomEvent};
use yew::prelude::*;

/// localStorage-backed balance that follows `event_name` CustomEvents whose
/// detail carries the new total.
#[hook]
pub fn use_balance(storage_key: &'static str, event_name: &'static str) -> UseStateHandle<i32> {
    let balance = use_state(|| {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(storage_key).ok().flatten())
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(0)
    });

    {
        let balance = balance.clone();
        use_effect_with((), move |_| {
            let cb = balance.clone();

            let listener = Closure::wrap(Box::new(move |e: CustomEvent| {
                if let Some(new_total) = e.detail().as_f64() {
                    cb.set(new_total as i32);

                    if let Some(w) = window() {
                        if let Ok(Some(storage)) = w.local_storage() {
                            let _ = storage.set_item(storage_key, &new_total.to_string());
                        }
                    }
                }
            }) as Box<dyn FnMut(CustomEvent)>);

            if let Some(window) = window() {
                let _ = window.add_event_listener_with_callback(
                    event_name,
                    listener.as_ref().unchecked_ref(),
                );
            }

            move || {
                if let Some(window) = window() {
                    let _ = window.remove_event_listener_with_callback(
                        event_name,
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    balance
}

use shared::constants::MAX_LIVE_DROPS;
use shared::shared_roulette_game::Prize;
use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit};

pub const STARS_UPDATE_EVENT: &str = "starsUpdate";
pub const TICKETS_UPDATE_EVENT: &str = "ticketsUpdate";
pub const LIVE_DROPS_UPDATE_EVENT: &str = "liveDropsUpdate";

pub const STARS_STORAGE_KEY: &str = "stars";
pub const TICKETS_STORAGE_KEY: &str = "tickets";
pub const LIVE_DROPS_STORAGE_KEY: &str = "live_drops";

pub fn dispatch_balance_event(event_name: &str, new_total: i32) {
    if let Some(window) = window() {
        let event_init = CustomEventInit::new();
        event_init.set_detail(&JsValue::from_f64(new_total as f64));
        if let Ok(event) = CustomEvent::new_with_event_init_dict(event_name, &event_init) {
            let _ = window.dispatch_event(&event);
        }
    }
}

pub fn dispatch_live_drops_event() {
    if let Some(window) = window() {
        if let Ok(event) = CustomEvent::new(LIVE_DROPS_UPDATE_EVENT) {
            let _ = window.dispatch_event(&event);
        }
    }
}

pub fn read_live_drops() -> Vec<Prize> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(LIVE_DROPS_STORAGE_KEY).ok().flatten())
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Prepends a landed prize to the persisted LIVE strip and notifies any
/// mounted feed.
pub fn record_live_drop(prize: Prize) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let mut drops = read_live_drops();
        drops.insert(0, prize);
        drops.truncate(MAX_LIVE_DROPS);
        if let Ok(raw) = serde_json::to_string(&drops) {
            let _ = storage.set_item(LIVE_DROPS_STORAGE_KEY, &raw);
        }
    }
    dispatch_live_drops_event();
}

mod prize_strip;
mod roulette_utils;

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use shared::constants::SPIN_COST_STARS;
use shared::shared_roulette_game::{
    ease_out_quart, SpinEngine, ROULETTE_CATALOG, SETTLE_DELAY_MS, SPIN_DURATION_MS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::base::record_live_drop;
use crate::components::{CurrencyBar, HeaderIcon, LiveFeed, ScreenHeader};
use crate::styles;

use prize_strip::PrizeStrip;
use roulette_utils::{viewport_width, SpinButton};

#[derive(Properties, PartialEq)]
pub struct SpinRouletteProps {
    pub on_back: Callback<MouseEvent>,
}

/// The spin screen: a horizontally scrolling prize strip under a fixed
/// centered pointer. One click starts a spin; the engine picks the prize and
/// this component drives the scroll position frame by frame until the strip
/// settles on it.
#[function_component(SpinRoulette)]
pub fn spin_roulette(props: &SpinRouletteProps) -> Html {
    let engine = use_mut_ref(|| SpinEngine::new(ROULETTE_CATALOG.to_vec()));
    let spinning = use_state(|| false);
    let scroll_ref = use_node_ref();

    let strip = engine.borrow().strip();

    let on_spin = {
        let engine = engine.clone();
        let spinning = spinning.clone();
        let scroll_ref = scroll_ref.clone();

        Callback::from(move |_: MouseEvent| {
            if *spinning {
                return;
            }

            // Without a mounted strip there is nothing to animate; leave the
            // engine idle.
            let container = match scroll_ref.cast::<HtmlElement>() {
                Some(container) => container,
                None => return,
            };

            let session = match engine
                .borrow_mut()
                .begin_spin(viewport_width(), &mut rand::thread_rng())
            {
                Ok(session) => session,
                Err(err) => {
                    log::debug!("spin not started: {}", err);
                    return;
                }
            };
            let prize = engine.borrow().catalog()[session.chosen_index];

            spinning.set(true);

            // Jump back to the strip's start so every spin plays out from the
            // same visual state.
            container.set_scroll_left(0);

            let start_time = js_sys::Date::now();
            let target = session.target_offset;

            let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
            let g = f.clone();

            let engine = engine.clone();
            let spinning = spinning.clone();
            let scroll_ref = scroll_ref.clone();

            *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                let elapsed = js_sys::Date::now() - start_time;
                let progress = (elapsed / SPIN_DURATION_MS).min(1.0);

                // A container that detached mid-spin just skips the write;
                // the spin still runs to completion so busy always clears.
                if let Some(container) = scroll_ref.cast::<HtmlElement>() {
                    container.set_scroll_left((target * ease_out_quart(progress)) as i32);
                }

                if progress < 1.0 {
                    if let Some(window) = web_sys::window() {
                        let _ = window.request_animation_frame(
                            f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                        );
                    }
                } else {
                    // Hold the spinning affordance briefly after the strip
                    // stops moving, then open up for the next spin.
                    engine.borrow_mut().begin_settle();

                    let engine = engine.clone();
                    let spinning = spinning.clone();
                    spawn_local(async move {
                        TimeoutFuture::new(SETTLE_DELAY_MS).await;
                        engine.borrow_mut().finish_spin();
                        spinning.set(false);
                        record_live_drop(prize);
                    });
                }
            }) as Box<dyn FnMut()>));

            if let Some(window) = web_sys::window() {
                let _ = window.request_animation_frame(
                    g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        })
    };

    html! {
        <div class={styles::SPIN_SCREEN}>
            <div class="h-full flex flex-col">
                <ScreenHeader title="Back" icon={HeaderIcon::Back} on_leave={props.on_back.clone()} />

                <CurrencyBar />

                <div class="mx-4 mb-6">
                    <LiveFeed />
                </div>

                <div class="flex-1 flex flex-col items-center justify-center relative px-4">
                    <div class={styles::SPIN_POINTER}></div>

                    <div class="mb-8 text-center">
                        <svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-white/60 mx-auto animate-bounce">
                            <path d="m6 9 6 6 6-6" />
                        </svg>
                    </div>

                    <PrizeStrip strip={strip} scroll_ref={scroll_ref.clone()} />

                    <div class="mb-8 text-center">
                        <svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="text-white/60 mx-auto animate-bounce">
                            <path d="m18 15-6-6-6 6" />
                        </svg>
                    </div>
                </div>

                <div class="p-4 space-y-3">
                    <div class="flex gap-3">
                        <button class={styles::SPIN_SIDE_BUTTON}>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" />
                                <circle cx="12" cy="12" r="3" />
                            </svg>
                            {"Settings"}
                        </button>
                        <button class={styles::SPIN_SIDE_BUTTON}>
                            <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <rect x="3" y="8" width="18" height="4" rx="1" />
                                <path d="M12 8v13" />
                                <path d="M19 12v7a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2v-7" />
                                <path d="M7.5 8a2.5 2.5 0 0 1 0-5A4.8 8 0 0 1 12 8a4.8 8 0 0 1 4.5-5 2.5 2.5 0 0 1 0 5" />
                            </svg>
                            {"Prizes"}
                        </button>
                    </div>

                    <SpinButton spinning={*spinning} cost={SPIN_COST_STARS} onclick={on_spin} />
                </div>
            </div>
        </div>
    }
}

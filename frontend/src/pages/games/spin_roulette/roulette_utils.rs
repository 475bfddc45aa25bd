use web_sys::{window, MouseEvent};
use yew::prelude::*;

// Viewport width at spin start. Read once per spin; resizes mid-animation
// are intentionally not re-targeted.
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub spinning: bool,
    pub cost: u32,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_class = if props.spinning {
        "w-full h-16 bg-blue-500 text-white text-xl font-bold rounded-2xl shadow-lg opacity-50 cursor-not-allowed"
    } else {
        "w-full h-16 bg-blue-500 hover:bg-blue-600 text-white text-xl font-bold rounded-2xl shadow-lg transition-colors"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.spinning}
            class={button_class}
        >
            if props.spinning {
                { "Spinning..." }
            } else {
                <>
                    { "Spin for" }
                    <span class="text-amber-300 ml-2">{ format!("⭐ {}", props.cost) }</span>
                </>
            }
        </button>
    }
}

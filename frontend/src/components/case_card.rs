use yew::prelude::*;

use crate::models::CaseItem;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct CaseCardProps {
    pub item: CaseItem,
    pub on_open: Callback<&'static str>,
}

/// Gradient card for one reward category on the home screen.
#[function_component(CaseCard)]
pub fn case_card(props: &CaseCardProps) -> Html {
    let item = &props.item;

    let onclick = {
        let on_open = props.on_open.clone();
        let id = item.id;
        Callback::from(move |_| on_open.emit(id))
    };

    html! {
        <div {onclick} class={classes!(styles::CASE_CARD, item.gradient)}>
            <div class="flex items-center gap-4">
                <div class={styles::CASE_ICON}>
                    { item.icon }
                </div>
                <div class="flex-1">
                    <h3 class="font-bold text-2xl mb-1 text-white">
                        { item.title }
                    </h3>
                    <p class="text-white/80 text-sm font-medium">
                        { item.description }
                    </p>
                </div>
                if let Some(price) = item.price_badge {
                    <div class={styles::CASE_BADGE}>
                        <span class="text-yellow-300">{"⭐"}</span>
                        { price }
                    </div>
                }
            </div>
        </div>
    }
}

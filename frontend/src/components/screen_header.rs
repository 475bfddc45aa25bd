use web_sys::MouseEvent;
use yew::prelude::*;

use crate::styles;

#[derive(Clone, Copy, PartialEq)]
pub enum HeaderIcon {
    Close,
    Back,
}

#[derive(Properties, PartialEq)]
pub struct ScreenHeaderProps {
    pub title: AttrValue,
    pub icon: HeaderIcon,
    #[prop_or_default]
    pub on_leave: Callback<MouseEvent>,
}

/// The header row every screen shares: a leave button on the left, the
/// centered title, check and overflow buttons on the right.
#[function_component(ScreenHeader)]
pub fn screen_header(props: &ScreenHeaderProps) -> Html {
    let leave_icon = match props.icon {
        HeaderIcon::Close => html! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="M18 6 6 18" />
                <path d="m6 6 12 12" />
            </svg>
        },
        HeaderIcon::Back => html! {
            <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                <path d="m12 19-7-7 7-7" />
                <path d="M19 12H5" />
            </svg>
        },
    };

    html! {
        <div class={styles::HEADER_ROW}>
            <button onclick={props.on_leave.clone()} class={styles::HEADER_BUTTON}>
                { leave_icon }
            </button>

            <h1 class={styles::HEADER_TITLE}>{ props.title.clone() }</h1>

            <div class="flex items-center gap-2">
                <button class={styles::HEADER_BUTTON}>
                    <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M20 6 9 17l-5-5" />
                    </svg>
                </button>
                <button class={styles::HEADER_BUTTON}>
                    <svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <circle cx="12" cy="12" r="1" />
                        <circle cx="12" cy="5" r="1" />
                        <circle cx="12" cy="19" r="1" />
                    </svg>
                </button>
            </div>
        </div>
    }
}

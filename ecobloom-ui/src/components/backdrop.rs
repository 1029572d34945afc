//! Modal Backdrop
//!
//! Dimmed overlay behind a modal. Clicks that land on the overlay itself,
//! not on the modal surface, close the modal.

use leptos::*;

use ecobloom::view::ClickTarget;

use crate::state::global::GlobalState;

/// Classify a click by comparing the event target with the overlay
pub fn click_target(ev: &web_sys::MouseEvent) -> ClickTarget {
    if ev.target() == ev.current_target() {
        ClickTarget::Backdrop
    } else {
        ClickTarget::Surface
    }
}

#[component]
pub fn Backdrop(children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_click = move |ev: web_sys::MouseEvent| {
        let target = click_target(&ev);
        state.modal.update(|modal| {
            modal.on_click(target);
        });
    };

    view! {
        <div
            on:click=on_click
            class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center p-4"
        >
            <div class="bg-white text-gray-900 rounded-xl shadow-xl w-full max-w-2xl max-h-[90vh] overflow-y-auto relative">
                {children()}
            </div>
        </div>
    }
}

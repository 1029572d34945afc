//! Toast Notification Component
//!
//! Shows the current success or error notice.

use leptos::*;

use ecobloom::notice::{Notice, NoticeLevel};

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50">
            {move || state.notice.get().map(|notice| view! { <ToastMessage notice=notice /> })}
        </div>
    }
}

#[component]
fn ToastMessage(notice: Notice) -> impl IntoView {
    let bg_class = match notice.level {
        NoticeLevel::Success => "bg-green-600",
        NoticeLevel::Error => "bg-red-600",
    };

    view! {
        <div class=format!(
            "{} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-sm font-medium">{notice.message}</span>
        </div>
    }
}

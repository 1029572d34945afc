//! Home Page
//!
//! Catalog grid with search and plant photo lookup.

use leptos::*;
use wasm_bindgen::JsCast;

use ecobloom::view::modal::{IDENTIFY_PROMPT, NOT_IDENTIFIED_MESSAGE};
use ecobloom::view::{identify, render_catalog, Identification};

use crate::components::{Loading, PlantCard};
use crate::state::global::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (store, search, loading) = (state.store, state.search, state.loading);

    let cards = create_memo(move |_| {
        let filter = search.get();
        store.with(|store| render_catalog(store, &filter))
    });

    view! {
        <div class="space-y-8">
            // Header
            <div class="text-center">
                <h1 class="text-3xl font-bold text-green-900">"Discover Plants"</h1>
                <p class="text-gray-600 mt-1">"Find the right care for every plant in your home"</p>
            </div>

            <div class="flex flex-col md:flex-row gap-4">
                <input
                    type="search"
                    placeholder="🔍 Search plants..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                    class="flex-1 rounded-lg px-4 py-3 border border-gray-300 focus:border-green-500 focus:outline-none"
                />
                <PhotoUpload />
            </div>

            {move || if loading.get() {
                view! { <Loading /> }.into_view()
            } else {
                view! {
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                        {cards.get().into_iter().map(|card| view! { <PlantCard card=card /> }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Photo picker. There is no image recognition: the user is asked for the
/// name and the catalog is searched for it.
#[component]
fn PhotoUpload() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let has_file = input.files().map(|files| files.length() > 0).unwrap_or(false);
        if !has_file {
            return;
        }

        let Some(window) = web_sys::window() else {
            return;
        };
        let entered = window
            .prompt_with_message(IDENTIFY_PROMPT)
            .ok()
            .flatten()
            .unwrap_or_default();

        let found = state.store.with_untracked(|store| identify(store, &entered));
        match found {
            Some(Identification::Found(id)) => state.modal.update(|m| m.open_detail(id)),
            Some(Identification::NotFound) => {
                let _ = window.alert_with_message(NOT_IDENTIFIED_MESSAGE);
                state.modal.update(|m| m.open_add_plant());
            }
            None => {}
        }

        // Allow picking the same file again
        input.set_value("");
    };

    view! {
        <label class="px-4 py-3 rounded-lg bg-green-600 hover:bg-green-700 text-white font-medium cursor-pointer text-center transition-colors">
            "📷 Identify from Photo"
            <input type="file" accept="image/*" class="hidden" on:change=on_change />
        </label>
    }
}

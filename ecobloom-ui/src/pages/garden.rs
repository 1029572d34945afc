//! My Garden Page

use leptos::*;

use ecobloom::view::{render_garden, GardenView};

use crate::components::GardenCardView;
use crate::state::global::GlobalState;

#[component]
pub fn Garden() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let store = state.store;
    let garden = create_memo(move |_| store.with(render_garden));

    let reset = move |_| {
        let state = state.clone();
        spawn_local(async move { state.reset_watering().await });
    };

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-green-900">"🌿 My Garden"</h1>
                    <p class="text-gray-600 mt-1">"Track today's watering for your saved plants"</p>
                </div>
                <button
                    on:click=reset
                    class="px-4 py-2 rounded-lg border border-gray-300 hover:bg-gray-100 transition-colors"
                >
                    "↺ Start New Day"
                </button>
            </div>

            {move || match garden.get() {
                GardenView::Empty { message } => view! {
                    <div class="text-center text-gray-500 py-16">
                        <div class="text-6xl mb-4">"🪴"</div>
                        <p>{message}</p>
                    </div>
                }.into_view(),
                GardenView::Grid { cards } => view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {cards.into_iter().map(|card| view! { <GardenCardView card=card /> }).collect_view()}
                    </div>
                }.into_view(),
            }}
        </div>
    }
}

//! Garden Card
//!
//! Saved plant with today's watering buttons.

use leptos::*;

use ecobloom::view::{GardenCard, WateringButton};

use crate::components::plant_card::set_image_src;
use crate::state::global::GlobalState;

#[component]
pub fn GardenCardView(card: GardenCard) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = card.id;
    let fallback = card.image.fallback.clone();

    let remove = {
        let state = state.clone();
        move |_| {
            let state = state.clone();
            spawn_local(async move { state.toggle_save(id).await });
        }
    };

    view! {
        <div class="bg-white rounded-xl shadow p-4 space-y-4">
            <div class="flex items-center space-x-4">
                <img
                    src=card.image.src
                    alt=card.image.alt
                    class="w-20 h-20 rounded-lg object-cover"
                    on:error=move |ev| set_image_src(&ev, &fallback)
                />
                <div>
                    <h3 class="text-lg font-semibold">{card.name}</h3>
                    <p class="text-sm text-gray-500">{card.watering_frequency}</p>
                </div>
            </div>

            <div>
                <h4 class="text-sm font-medium mb-2">"🌊 Today's Watering Schedule"</h4>
                <div class="flex space-x-2">
                    {card
                        .buttons
                        .into_iter()
                        .map(|button| view! { <WateringButtonView plant=id button=button /> })
                        .collect_view()}
                </div>
            </div>

            <button
                on:click=remove
                class="w-full py-2 rounded-lg border border-red-300 text-red-600 hover:bg-red-50 transition-colors"
            >
                {card.remove_label}
            </button>
        </div>
    }
}

#[component]
fn WateringButtonView(plant: ecobloom::model::PlantId, button: WateringButton) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let time = button.time;

    let on_click = move |_| {
        let state = state.clone();
        spawn_local(async move { state.mark_watering(plant, time).await });
    };

    let class = if button.completed {
        "flex-1 py-2 rounded-lg bg-green-100 text-green-700 cursor-not-allowed"
    } else {
        "flex-1 py-2 rounded-lg bg-blue-100 text-blue-700 hover:bg-blue-200 transition-colors"
    };

    view! {
        <button on:click=on_click disabled=button.disabled class=class>
            {format!("{} {}", button.icon, button.label)}
        </button>
    }
}

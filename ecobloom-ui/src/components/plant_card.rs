//! Catalog Plant Card

use leptos::*;

use ecobloom::view::CatalogCard;

use crate::state::global::GlobalState;

/// Catalog card; clicking opens the plant detail
#[component]
pub fn PlantCard(card: CatalogCard) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = card.id;
    let fallback = card.image.fallback.clone();

    view! {
        <div
            on:click=move |_| state.modal.update(|m| m.open_detail(id))
            class="bg-white rounded-xl shadow hover:shadow-lg transition-shadow cursor-pointer overflow-hidden relative"
        >
            <img
                src=card.image.src
                alt=card.image.alt
                class="w-full h-48 object-cover"
                on:error=move |ev| set_image_src(&ev, &fallback)
            />
            {card.saved.then(|| view! {
                <span class="absolute top-2 right-2 bg-green-600 text-white text-xs px-2 py-1 rounded-full">
                    "✓ Saved"
                </span>
            })}
            <div class="p-4">
                <h3 class="text-lg font-semibold text-gray-900">{card.name}</h3>
                <p class="text-sm italic text-gray-500">{card.scientific_name}</p>
                <span class="inline-block mt-2 text-xs bg-yellow-100 text-yellow-800 px-2 py-1 rounded-full">
                    {card.sunlight_badge}
                </span>
            </div>
        </div>
    }
}

/// Swap a broken image for its placeholder
pub fn set_image_src(ev: &web_sys::Event, src: &str) {
    use wasm_bindgen::JsCast;

    if let Some(img) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
    {
        if img.src() != src {
            img.set_src(src);
        }
    }
}

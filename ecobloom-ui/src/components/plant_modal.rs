//! Plant Detail Modal

use leptos::*;

use ecobloom::model::PlantId;
use ecobloom::view::{render_detail, DetailView};

use crate::components::plant_card::set_image_src;
use crate::components::Backdrop;
use crate::state::global::GlobalState;

/// Detail modal for the plant selected in [`ModalState::Detail`]
///
/// [`ModalState::Detail`]: ecobloom::view::ModalState::Detail
#[component]
pub fn PlantModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let detail = create_memo(move |_| {
        let id = state.modal.get().detail_id()?;
        state.store.with(|store| store.get(id).map(render_detail))
    });

    view! {
        {move || detail.get().map(|view| view! {
            <Backdrop>
                <DetailBody detail=view />
            </Backdrop>
        })}
    }
}

#[component]
fn DetailBody(detail: DetailView) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id: PlantId = detail.id;
    let fallback = detail.image.fallback.clone();

    let close = {
        let state = state.clone();
        move |_| state.modal.update(|m| m.close())
    };

    let toggle = move |_| {
        let state = state.clone();
        spawn_local(async move { state.toggle_save(id).await });
    };

    let toggle_class = if detail.toggle.saved {
        "w-full py-3 rounded-lg bg-green-100 text-green-700 font-semibold"
    } else {
        "w-full py-3 rounded-lg bg-green-600 hover:bg-green-700 text-white font-semibold transition-colors"
    };

    view! {
        <button on:click=close class="absolute top-3 right-4 text-2xl text-white drop-shadow">"×"</button>
        <img
            src=detail.image.src
            alt=detail.image.alt
            class="w-full h-64 object-cover rounded-t-xl"
            on:error=move |ev| set_image_src(&ev, &fallback)
        />
        <div class="p-6 space-y-6">
            <div>
                <h2 class="text-2xl font-bold">{detail.name}</h2>
                <p class="italic text-gray-500">{detail.scientific_name}</p>
            </div>

            <div class="grid grid-cols-2 gap-4">
                {detail.info.into_iter().map(|item| view! {
                    <div class="bg-gray-50 rounded-lg p-3">
                        <div class="text-xs text-gray-500">{item.label}</div>
                        <div class="font-medium">{item.value}</div>
                    </div>
                }).collect_view()}
            </div>

            {detail.sections.into_iter().map(|section| view! {
                <section>
                    <h3 class="font-semibold mb-1">{section.title}</h3>
                    <p class="text-gray-700">{section.body}</p>
                </section>
            }).collect_view()}

            <button on:click=toggle class=toggle_class>
                {detail.toggle.label}
            </button>
        </div>
    }
}

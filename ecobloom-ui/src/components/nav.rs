//! Navigation Component
//!
//! Header navigation bar with logo, page links and the add-plant button.

use leptos::*;
use leptos_router::*;

use ecobloom::view::Page;

use crate::state::global::GlobalState;

/// Route for each page
pub fn page_href(page: Page) -> &'static str {
    match page {
        Page::Home => "/",
        Page::Garden => "/garden",
    }
}

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-green-800 text-white shadow">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🌱"</span>
                        <span class="text-xl font-bold">"EcoBloom"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        {Page::ALL
                            .into_iter()
                            .map(|page| view! { <NavLink page=page /> })
                            .collect_view()}
                        <button
                            on:click=move |_| state.modal.update(|m| m.open_add_plant())
                            class="ml-2 px-4 py-2 rounded-lg bg-green-600 hover:bg-green-500 transition-colors"
                        >
                            "+ Add Plant"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(page: Page) -> impl IntoView {
    view! {
        <A
            href=page_href(page)
            exact=true
            class="px-4 py-2 rounded-lg text-green-100 hover:text-white hover:bg-green-700 transition-colors"
            active_class="bg-green-700 text-white"
        >
            {format!("{} {}", page.icon(), page.label())}
        </A>
    }
}

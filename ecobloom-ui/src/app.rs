//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{AddPlantModal, Nav, PlantModal, Toast};
use crate::pages::{Garden, Home};
use crate::state::{provide_global_state, start_reminders, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    let state = provide_global_state();

    // Fetch the catalog once, then start the reminder timer
    {
        let state = state.clone();
        spawn_local(async move {
            state.load_catalog().await;
            start_reminders(state);
        });
    }

    view! {
        <Router>
            <div class="min-h-screen bg-green-50 text-gray-900 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/garden" view=Garden />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Modals
                <PlantModal />
                <AddPlantModal />

                // Backend URL setting
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer with the backend URL, stored in local storage
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (api_url, set_api_url) = create_signal(api::get_api_base());

    let save_url = move |_| {
        api::set_api_base(&api_url.get_untracked());
        let state = state.clone();
        spawn_local(async move { state.load_catalog().await });
    };

    view! {
        <footer class="bg-white border-t border-gray-200 py-3 px-4">
            <div class="container mx-auto flex items-center space-x-2 text-sm text-gray-500">
                <span>"Backend:"</span>
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 max-w-sm rounded px-2 py-1 border border-gray-300"
                />
                <button on:click=save_url class="px-3 py-1 rounded bg-gray-100 hover:bg-gray-200">
                    "Save & Reload"
                </button>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🥀"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-green-600 hover:bg-green-700 text-white rounded-lg font-medium transition-colors"
            >
                "Back to Plants"
            </A>
        </div>
    }
}

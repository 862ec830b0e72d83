use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use tarjuma_api::client;

use crate::components::file_panel::FilePanel;
use crate::components::header::Header;
use crate::components::language_selector::LanguageSelector;
use crate::components::notification::NotificationLayer;
use crate::components::text_panel::TextPanel;
use crate::services::speech;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    spawn_local(load_languages(state));
    speech::init(state);

    view! {
        <div class="min-h-screen flex flex-col">
            <Header />
            <NotificationLayer />

            <main class="flex-1 max-w-7xl mx-auto w-full px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                <LanguageSelector />
                <TextPanel />
                <FilePanel />
            </main>

            <footer class="text-center py-4 text-xs text-gray-500 dark:text-gray-600">
                "Translations are produced by the connected server. Nothing is stored in the browser."
            </footer>
        </div>
    }
}

/// One-shot catalog load; on failure the selectors stay unpopulated until
/// the page is reloaded.
async fn load_languages(state: AppState) {
    match client::get_languages().await {
        Ok(languages) => {
            log::debug!("loaded {} languages", languages.len());
            state.languages.set(languages);
        }
        Err(e) => {
            log::error!("failed to load languages: {e}");
            state.notify_error(
                "Language Load Error",
                "Unable to fetch language list. Please try again later.",
            );
        }
    }
}

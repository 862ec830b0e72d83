use leptos::prelude::*;
use leptos::ev;

use tarjuma_api::Language;

use crate::services::translation;
use crate::state::{AppState, AUTO_LANG};

const SELECT_CLASS: &str = "w-full px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm focus:ring-2 focus:ring-indigo-500 focus:border-transparent";

/// Source/target pair with the swap control between them. Only the source
/// selector carries the synthetic auto-detect entry.
#[component]
pub fn LanguageSelector() -> impl IntoView {
    let state = expect_context::<AppState>();
    let languages = state.languages;
    let source_lang = state.source_lang;
    let target_lang = state.target_lang;

    // Language changes re-translate immediately, without the debounce.
    let on_source_change = move |ev: ev::Event| {
        source_lang.set(event_target_value(&ev));
        translation::trigger_translation(state);
    };
    let on_target_change = move |ev: ev::Event| {
        target_lang.set(event_target_value(&ev));
        translation::trigger_translation(state);
    };
    let on_swap = move |_| translation::swap_languages(state);

    view! {
        <div class="card">
            <div class="flex flex-col sm:flex-row items-center gap-4">
                <div class="flex-1 w-full">
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Source Language"
                    </label>
                    <select class=SELECT_CLASS on:change=on_source_change>
                        <option value=AUTO_LANG selected=move || source_lang.get() == AUTO_LANG>
                            "Auto Detect"
                        </option>
                        {move || language_options(&languages.get(), source_lang)}
                    </select>
                </div>

                <div class="hidden sm:flex items-center pt-6">
                    <button
                        class="btn-secondary text-lg px-3"
                        on:click=on_swap
                        title="Swap languages"
                    >
                        "\u{21C4}"
                    </button>
                </div>

                <div class="flex-1 w-full">
                    <label class="block text-sm font-medium text-gray-700 dark:text-gray-300 mb-1">
                        "Target Language"
                    </label>
                    <select class=SELECT_CLASS on:change=on_target_change>
                        {move || language_options(&languages.get(), target_lang)}
                    </select>
                </div>
            </div>
        </div>
    }
}

/// Option list for one selector, marking the current selection.
pub(crate) fn language_options(
    languages: &[Language],
    selected: RwSignal<String>,
) -> Vec<impl IntoView> {
    languages
        .iter()
        .map(|lang| {
            let value = lang.code.clone();
            let code = lang.code.clone();
            view! {
                <option value=value selected=move || selected.get() == code>
                    {lang.name.clone()}
                </option>
            }
        })
        .collect()
}

use leptos::prelude::*;
use leptos::ev;
use leptos::html;

use tarjuma_api::client;

use crate::components::language_selector::language_options;
use crate::services::translation;
use crate::state::AppState;

const SELECT_CLASS: &str = "px-3 py-2 bg-gray-100 dark:bg-gray-800 border border-gray-300 dark:border-gray-700 rounded-lg text-sm focus:ring-2 focus:ring-indigo-500 focus:border-transparent";

/// File upload, target selection, result pane and the two backend-generated
/// download links.
#[component]
pub fn FilePanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let languages = state.languages;
    let file_target_lang = state.file_target_lang;
    let file_result = state.file_result;
    let file_detected_lang = state.file_detected_lang;
    let downloads_visible = state.downloads_visible;
    let file_loading = state.file_loading;

    let file_input: NodeRef<html::Input> = NodeRef::new();

    let selected_file = move || {
        file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
    };

    // A new selection invalidates the previous result; no auto-translate.
    let on_file_change = move |_| {
        file_result.set(String::new());
        file_detected_lang.set(None);
        downloads_visible.set(false);
    };

    let on_target_change = move |ev: ev::Event| {
        file_target_lang.set(event_target_value(&ev));
    };

    let on_translate = move |_| {
        translation::trigger_file_translation(state, selected_file());
    };

    let on_clear = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
        file_result.set(String::new());
        file_detected_lang.set(None);
        downloads_visible.set(false);
    };

    view! {
        <div class="card space-y-4">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold">"File Translation"</h2>
                {move || {
                    file_detected_lang.get().map(|lang| {
                        view! {
                            <span class="badge-ready">{format!("Detected: {lang}")}</span>
                        }
                    })
                }}
            </div>

            <div class="flex flex-col sm:flex-row items-stretch sm:items-center gap-3">
                <input
                    type="file"
                    accept=".pdf,.docx"
                    class="flex-1 text-sm text-gray-600 dark:text-gray-400"
                    node_ref=file_input
                    on:change=on_file_change
                />
                <select class=SELECT_CLASS on:change=on_target_change>
                    {move || language_options(&languages.get(), file_target_lang)}
                </select>
                <button class="btn-primary text-sm" on:click=on_translate>
                    "Translate File"
                </button>
                <button class="btn-secondary text-sm" on:click=on_clear>
                    "Clear"
                </button>
            </div>

            {move || {
                file_loading.get().then(|| {
                    view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400 animate-pulse">
                            "Translating file\u{2026}"
                        </p>
                    }
                })
            }}

            <textarea
                class="text-panel w-full"
                rows=8
                readonly=true
                placeholder="Translated file text will appear here\u{2026}"
                prop:value=move || file_result.get()
            ></textarea>

            {move || {
                downloads_visible.get().then(|| {
                    let text = file_result.get();
                    view! {
                        <div class="flex items-center gap-3">
                            <a
                                class="btn-primary text-sm"
                                href=client::download_pdf_url(&text)
                                download="translated.pdf"
                            >
                                "Download PDF"
                            </a>
                            <a
                                class="btn-primary text-sm"
                                href=client::download_docx_url(&text)
                                download="translated.docx"
                            >
                                "Download DOCX"
                            </a>
                        </div>
                    }
                })
            }}
        </div>
    }
}

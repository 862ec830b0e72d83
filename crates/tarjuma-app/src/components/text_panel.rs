use leptos::prelude::*;
use leptos::ev;
use wasm_bindgen_futures::spawn_local;

use crate::services::{clipboard, speech, translation};
use crate::state::{AppState, MicState};

/// Input/output pair for text translation, with mic, copy and clear
/// controls on the input side.
#[component]
pub fn TextPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let input_text = state.input_text;
    let output_text = state.output_text;
    let mic_state = state.mic_state;

    let on_input = move |ev: ev::Event| {
        input_text.set(event_target_value(&ev));
        translation::schedule_translation(state);
    };

    let on_clear = move |_| {
        input_text.set(String::new());
        output_text.set(String::new());
    };

    let on_copy = move |_| {
        spawn_local(clipboard::copy_input_text(state));
    };

    let on_mic = move |_| speech::toggle(state);

    let mic_label = move || match mic_state.get() {
        MicState::Listening => "\u{1F6D1}",
        _ => "\u{1F3A4}",
    };
    let mic_class = move || {
        let base = "btn-secondary text-sm";
        if mic_state.get() == MicState::Listening {
            format!("{base} bg-red-600 hover:bg-red-700 text-white animate-pulse")
        } else {
            base.to_string()
        }
    };

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card space-y-3">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold">"Input"</h2>
                    <div class="flex items-center gap-2">
                        <button
                            class=mic_class
                            on:click=on_mic
                            disabled=move || mic_state.get() == MicState::Unsupported
                            title="Voice input"
                        >
                            {mic_label}
                        </button>
                        <button class="btn-secondary text-xs" on:click=on_copy title="Copy to clipboard">
                            "Copy"
                        </button>
                        <button class="btn-secondary text-xs" on:click=on_clear>
                            "Clear"
                        </button>
                    </div>
                </div>
                <textarea
                    class="text-panel w-full"
                    rows=6
                    placeholder="Type or dictate text to translate\u{2026}"
                    prop:value=move || input_text.get()
                    on:input=on_input
                ></textarea>
            </div>

            <div class="card space-y-3">
                <h2 class="text-lg font-semibold">"Translation"</h2>
                <textarea
                    class="text-panel w-full"
                    rows=6
                    readonly=true
                    placeholder="Translation will appear here\u{2026}"
                    prop:value=move || output_text.get()
                ></textarea>
            </div>
        </div>
    }
}

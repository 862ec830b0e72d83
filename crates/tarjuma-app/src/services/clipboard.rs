use leptos::prelude::GetUntracked;
use wasm_bindgen_futures::JsFuture;

use crate::state::AppState;

/// Writes the current input text to the system clipboard and reports the
/// outcome: a timed toast on success, a blocking notice with the raw
/// browser error on failure.
pub async fn copy_input_text(state: AppState) {
    let text = state.input_text.get_untracked();
    let Some(window) = web_sys::window() else {
        return;
    };
    let clipboard = window.navigator().clipboard();

    match JsFuture::from(clipboard.write_text(&text)).await {
        Ok(_) => state.notify_success("Copied!", "Text has been copied to clipboard."),
        Err(e) => {
            log::error!("clipboard write failed: {e:?}");
            state.notify_error("Failed to copy", format!("{e:?}"));
        }
    }
}

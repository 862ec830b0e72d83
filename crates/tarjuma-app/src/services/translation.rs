use leptos::prelude::{GetUntracked, Set};
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use tarjuma_api::{client, TranslateRequest};

use crate::services::timer::Debouncer;
use crate::state::{AppState, AUTO_LANG, DEBOUNCE_MS};

thread_local! {
    static DEBOUNCER: Debouncer = Debouncer::new(DEBOUNCE_MS);
}

/// Trailing-edge trigger for keystroke bursts; each new keystroke restarts
/// the quiet-period window.
pub fn schedule_translation(state: AppState) {
    DEBOUNCER.with(|d| d.schedule(move || trigger_translation(state)));
}

/// Immediate trigger, used by language changes, swap and recognized speech.
///
/// Empty input clears the output synchronously and never reaches the
/// network. Concurrent triggers are not sequenced; the later response wins.
pub fn trigger_translation(state: AppState) {
    let text = state.input_text.get_untracked();
    let Some(trimmed) = translatable_text(&text) else {
        state.output_text.set(String::new());
        return;
    };

    let request = TranslateRequest {
        text: trimmed.to_string(),
        src_lang: state.source_lang.get_untracked(),
        tgt_lang: state.target_lang.get_untracked(),
    };

    spawn_local(async move {
        match client::translate(&request).await {
            Ok(response) => {
                state.output_text.set(
                    response
                        .translation
                        .unwrap_or_else(|| "Translation failed.".to_string()),
                );
            }
            Err(e) => {
                log::error!("translation request failed: {e}");
                state.output_text.set("Server error.".to_string());
            }
        }
    });
}

/// Validates the selection and submits the file; a missing file is a
/// blocking warning, not a request.
pub fn trigger_file_translation(state: AppState, file: Option<File>) {
    let Some(file) = file else {
        state.notify_warning(
            "No File Uploaded",
            "Please select a PDF or Word file to translate.",
        );
        return;
    };
    spawn_local(run_file_translation(state, file));
}

async fn run_file_translation(state: AppState, file: File) {
    state.file_loading.set(true);
    state.file_result.set(String::new());
    state.file_detected_lang.set(None);
    state.downloads_visible.set(false);

    let target = state.file_target_lang.get_untracked();
    let result = client::translate_file(&file, &target).await;
    // The indicator comes down before any outcome is rendered.
    state.file_loading.set(false);

    match result {
        Ok(response) => match response.translation {
            Some(translation) => {
                state.file_result.set(translation);
                state.file_detected_lang.set(response.detected_lang);
                state.downloads_visible.set(true);
            }
            None => {
                state.file_result.set("No translation found.".to_string());
                state.notify_error(
                    "File Translation Error",
                    "The server returned no translation for this file.",
                );
            }
        },
        Err(e) => {
            log::error!("file translation request failed: {e}");
            state.notify_error(
                "File Translation Error",
                "File translation failed. Please try again.",
            );
        }
    }
}

/// Exchanges the two selections and re-translates with the swapped pair.
pub fn swap_languages(state: AppState) {
    let source = state.source_lang.get_untracked();
    let target = state.target_lang.get_untracked();
    if let Some((new_source, new_target)) = swapped_languages(&source, &target) {
        state.source_lang.set(new_source);
        state.target_lang.set(new_target);
        trigger_translation(state);
    }
}

/// Swapped `(source, target)` pair, or `None` when the source is the
/// auto-detect sentinel, which must never enter the target selector.
pub fn swapped_languages(source: &str, target: &str) -> Option<(String, String)> {
    if source == AUTO_LANG {
        return None;
    }
    Some((target.to_string(), source.to_string()))
}

/// Trimmed input, or `None` when there is nothing to send.
fn translatable_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_the_pair() {
        assert_eq!(
            swapped_languages("en", "ur"),
            Some(("ur".to_string(), "en".to_string()))
        );
    }

    #[test]
    fn swap_is_a_noop_for_auto_detect() {
        assert_eq!(swapped_languages(AUTO_LANG, "ur"), None);
    }

    #[test]
    fn whitespace_only_input_has_nothing_to_send() {
        assert_eq!(translatable_text(""), None);
        assert_eq!(translatable_text("  \n\t"), None);
        assert_eq!(translatable_text(" hello "), Some("hello"));
    }
}

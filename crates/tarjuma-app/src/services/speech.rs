//! Voice input over the browser speech-recognition engine.
//!
//! The engine handle lives in a page-session `thread_local`; the Idle /
//! Listening flag lives on [`AppState`] so the mic button can react to it.
//! Transitions are wired through the engine's `onstart` / `onresult` /
//! `onerror` / `onend` callbacks.

use std::cell::RefCell;

use js_sys::Reflect;
use leptos::prelude::{GetUntracked, Set, Update};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{SpeechRecognition, SpeechRecognitionError, SpeechRecognitionEvent};

use crate::services::translation;
use crate::state::{AppState, MicState, AUTO_LANG, FALLBACK_SPEECH_LANG};

thread_local! {
    static RECOGNIZER: RefCell<Option<SpeechRecognition>> = RefCell::new(None);
}

/// Probes the browser engine and wires the transition handlers.
///
/// Returns `false` when the session has no speech capability; the mic
/// control is then permanently disabled and the user told once.
pub fn init(state: AppState) -> bool {
    let Some(ctor) = recognition_ctor() else {
        disable(state);
        return false;
    };

    let recognition = match Reflect::construct(&ctor, &js_sys::Array::new()) {
        Ok(value) => value.unchecked_into::<SpeechRecognition>(),
        Err(e) => {
            log::error!("speech recognition construction failed: {e:?}");
            disable(state);
            return false;
        }
    };
    recognition.set_continuous(false);
    recognition.set_interim_results(false);

    // Idle -> Listening once the engine actually starts.
    let onstart = Closure::wrap(Box::new(move |_: web_sys::Event| {
        state.mic_state.set(MicState::Listening);
    }) as Box<dyn FnMut(web_sys::Event)>);
    recognition.set_onstart(Some(onstart.as_ref().unchecked_ref()));
    onstart.forget();

    // Listening -> Idle on natural completion.
    let onend = Closure::wrap(Box::new(move |_: web_sys::Event| {
        state.mic_state.set(MicState::Idle);
    }) as Box<dyn FnMut(web_sys::Event)>);
    recognition.set_onend(Some(onend.as_ref().unchecked_ref()));
    onend.forget();

    // Listening -> Idle on engine error, surfaced to the user.
    let onerror = Closure::wrap(Box::new(move |event: SpeechRecognitionError| {
        log::error!("speech recognition error: {:?}", event.error());
        state.notify_error("Speech Recognition Error", format!("{:?}", event.error()));
        state.mic_state.set(MicState::Idle);
    }) as Box<dyn FnMut(SpeechRecognitionError)>);
    recognition.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    // A recognized transcript feeds the input and translates immediately,
    // bypassing the debounce window.
    let onresult = Closure::wrap(Box::new(move |event: SpeechRecognitionEvent| {
        let Some(transcript) = first_transcript(&event) else {
            return;
        };
        state
            .input_text
            .update(|text| *text = append_transcript(text, &transcript));
        translation::trigger_translation(state);
    }) as Box<dyn FnMut(SpeechRecognitionEvent)>);
    recognition.set_onresult(Some(onresult.as_ref().unchecked_ref()));
    onresult.forget();

    RECOGNIZER.with(|r| *r.borrow_mut() = Some(recognition));
    true
}

/// User activation: starts listening from Idle, or explicitly stops.
pub fn toggle(state: AppState) {
    RECOGNIZER.with(|r| {
        let recognizer = r.borrow();
        let Some(recognition) = recognizer.as_ref() else {
            return;
        };
        match state.mic_state.get_untracked() {
            MicState::Listening => {
                recognition.stop();
            }
            MicState::Idle => {
                recognition.set_lang(recognition_locale(&state.source_lang.get_untracked()));
                if let Err(e) = recognition.start() {
                    log::error!("speech recognition start failed: {e:?}");
                    state.notify_error("Speech Recognition Error", format!("{e:?}"));
                }
            }
            MicState::Unsupported => {}
        }
    });
}

/// Joins a recognized transcript onto the existing input with one space.
pub fn append_transcript(existing: &str, transcript: &str) -> String {
    let existing = existing.trim_end();
    if existing.is_empty() {
        transcript.to_string()
    } else {
        format!("{existing} {transcript}")
    }
}

/// Engine locale for a source selection; auto-detect cannot be expressed
/// to the engine and falls back to a fixed locale.
pub fn recognition_locale(source_lang: &str) -> &str {
    if source_lang == AUTO_LANG {
        FALLBACK_SPEECH_LANG
    } else {
        source_lang
    }
}

fn disable(state: AppState) {
    state.mic_state.set(MicState::Unsupported);
    state.notify_error(
        "Speech Recognition Not Supported",
        "Your browser does not support speech recognition. Please use Chrome or Edge.",
    );
}

/// The engine constructor, standard or vendor-prefixed.
fn recognition_ctor() -> Option<js_sys::Function> {
    let window = web_sys::window()?;
    for name in ["SpeechRecognition", "webkitSpeechRecognition"] {
        if let Ok(value) = Reflect::get(&window, &JsValue::from_str(name)) {
            if let Ok(ctor) = value.dyn_into::<js_sys::Function>() {
                return Some(ctor);
            }
        }
    }
    None
}

fn first_transcript(event: &SpeechRecognitionEvent) -> Option<String> {
    let result = event.results()?.get(0)?;
    let alternative = result.get(0)?;
    Some(alternative.transcript())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_appends_with_one_space() {
        assert_eq!(append_transcript("", "hello"), "hello");
        assert_eq!(append_transcript("hi", "hello"), "hi hello");
        assert_eq!(append_transcript("hi ", "hello"), "hi hello");
    }

    #[test]
    fn locale_falls_back_for_auto_detect() {
        assert_eq!(recognition_locale("en"), "en");
        assert_eq!(recognition_locale(AUTO_LANG), FALLBACK_SPEECH_LANG);
    }
}

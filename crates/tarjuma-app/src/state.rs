use leptos::prelude::*;

use tarjuma_api::Language;

use crate::services::timer;

/// Sentinel code for the synthetic entry in the source selector only.
pub const AUTO_LANG: &str = "auto";
pub const DEFAULT_SOURCE_LANG: &str = "en";
pub const DEFAULT_TARGET_LANG: &str = "ur";
/// Quiet period before a keystroke burst becomes one translate call.
pub const DEBOUNCE_MS: i32 = 500;
/// Recognition locale used while the source selector sits on auto-detect.
pub const FALLBACK_SPEECH_LANG: &str = "en-US";

const TOAST_MS: i32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicState {
    /// The browser has no speech engine; the control stays disabled.
    Unsupported,
    Idle,
    Listening,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// One modal notification. `auto_dismiss` notices close themselves;
/// everything else waits for the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub kind: NoticeKind,
    pub auto_dismiss: bool,
}

#[derive(Clone, Copy)]
pub struct AppState {
    /// Catalog fetched once at startup; empty until the load succeeds.
    pub languages: RwSignal<Vec<Language>>,
    pub source_lang: RwSignal<String>,
    pub target_lang: RwSignal<String>,
    pub file_target_lang: RwSignal<String>,
    pub input_text: RwSignal<String>,
    pub output_text: RwSignal<String>,
    pub file_result: RwSignal<String>,
    pub file_detected_lang: RwSignal<Option<String>>,
    pub downloads_visible: RwSignal<bool>,
    pub file_loading: RwSignal<bool>,
    pub mic_state: RwSignal<MicState>,
    pub notice: RwSignal<Option<Notice>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            languages: RwSignal::new(Vec::new()),
            source_lang: RwSignal::new(DEFAULT_SOURCE_LANG.to_string()),
            target_lang: RwSignal::new(DEFAULT_TARGET_LANG.to_string()),
            file_target_lang: RwSignal::new(DEFAULT_TARGET_LANG.to_string()),
            input_text: RwSignal::new(String::new()),
            output_text: RwSignal::new(String::new()),
            file_result: RwSignal::new(String::new()),
            file_detected_lang: RwSignal::new(None),
            downloads_visible: RwSignal::new(false),
            file_loading: RwSignal::new(false),
            mic_state: RwSignal::new(MicState::Idle),
            notice: RwSignal::new(None),
        }
    }

    pub fn notify_error(&self, title: &str, text: impl Into<String>) {
        self.notice.set(Some(Notice {
            title: title.to_string(),
            text: text.into(),
            kind: NoticeKind::Error,
            auto_dismiss: false,
        }));
    }

    pub fn notify_warning(&self, title: &str, text: impl Into<String>) {
        self.notice.set(Some(Notice {
            title: title.to_string(),
            text: text.into(),
            kind: NoticeKind::Warning,
            auto_dismiss: false,
        }));
    }

    /// Timed confirmation; closes itself unless a later notice replaced it.
    pub fn notify_success(&self, title: &str, text: impl Into<String>) {
        self.notice.set(Some(Notice {
            title: title.to_string(),
            text: text.into(),
            kind: NoticeKind::Success,
            auto_dismiss: true,
        }));
        let notice = self.notice;
        timer::after(TOAST_MS, move || {
            notice.update(|n| {
                if n.as_ref().is_some_and(|n| n.auto_dismiss) {
                    *n = None;
                }
            });
        });
    }
}

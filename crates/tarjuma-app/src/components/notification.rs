use leptos::prelude::*;

use crate::state::{AppState, NoticeKind};

/// Modal notification layer. Blocking notices wait for the user; timed
/// success toasts carry no button and dismiss themselves.
#[component]
pub fn NotificationLayer() -> impl IntoView {
    let state = expect_context::<AppState>();
    let notice = state.notice;

    view! {
        {move || {
            notice.get().map(|current| {
                let (icon, accent) = match current.kind {
                    NoticeKind::Success => ("\u{2714}", "text-green-600"),
                    NoticeKind::Warning => ("\u{26A0}", "text-yellow-600"),
                    NoticeKind::Error => ("\u{2716}", "text-red-600"),
                };
                view! {
                    <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/40">
                        <div class="card max-w-sm w-full mx-4 text-center space-y-3">
                            <p class=format!("text-3xl {accent}")>{icon}</p>
                            <h3 class="text-lg font-semibold">{current.title.clone()}</h3>
                            <p class="text-sm text-gray-600 dark:text-gray-400">{current.text.clone()}</p>
                            {(!current.auto_dismiss).then(|| view! {
                                <button
                                    class="btn-primary text-sm"
                                    on:click=move |_| notice.set(None)
                                >
                                    "OK"
                                </button>
                            })}
                        </div>
                    </div>
                }
            })
        }}
    }
}

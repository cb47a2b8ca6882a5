//! Transient notice stack.

use fyp_supervisor::notify::{Notice, NoticeQueue};
use leptos::prelude::*;

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeQueue>>();

    view! {
        <div
            class="toasts"
            class:toasts--empty=move || notices.with(NoticeQueue::is_empty)
            aria-live="polite"
            data-count=move || notices.with(NoticeQueue::len).to_string()
        >
            <For
                each=move || notices.with(|queue| queue.iter().cloned().collect::<Vec<_>>())
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class=format!("toast toast--{}", notice.level.class_suffix()) role="status">
                            <span class="toast__message">{notice.message}</span>
                            <button
                                class="toast__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    notices.update(|queue| {
                                        queue.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

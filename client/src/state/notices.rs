//! Toast notices rendered by the `Toasts` component.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use std::time::Duration;

use fyp_supervisor::notify::{Notice, NoticeQueue, Notifier};
use leptos::prelude::*;

/// `Notifier` that appends to the shared notice signal and schedules
/// auto-dismissal.
#[derive(Clone, Copy)]
pub struct SignalNotifier {
    notices: RwSignal<NoticeQueue>,
    timeout: Duration,
}

impl SignalNotifier {
    pub fn new(notices: RwSignal<NoticeQueue>, timeout: Duration) -> Self {
        Self { notices, timeout }
    }
}

impl Notifier for SignalNotifier {
    fn notify(&self, notice: Notice) {
        log::info!("notice [{}] {}", notice.level.class_suffix(), notice.message);
        let Some(id) = self.notices.try_update(|queue| queue.push(notice)) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let notices = self.notices;
            let timeout = self.timeout;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(timeout).await;
                notices.try_update(|queue| queue.dismiss(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, self.timeout);
        }
    }
}

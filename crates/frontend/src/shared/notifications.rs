//! Toast notifications shown in the top-right corner.
//!
//! `Notifications` is provided once in `App`; pages call `success`/`error`
//! and each toast disappears after `DISMISS_AFTER_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

pub const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Очередь уведомлений без привязки к DOM
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            kind,
            text: text.into(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<NotificationQueue>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NotificationKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NotificationKind::Error, text.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn show(&self, kind: NotificationKind, text: String) {
        log::debug!("notification {:?}: {}", kind, text);
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, text));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            this.dismiss(id);
        });
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications context not found")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || notifications.queue.get().items().to_vec()
                key=|n| n.id
                children=move |n: Notification| {
                    let (class, color) = match n.kind {
                        NotificationKind::Success => ("notification notification--success", BadgeColor::Success),
                        NotificationKind::Error => ("notification notification--error", BadgeColor::Danger),
                    };
                    let id = n.id;
                    let mark = if n.kind == NotificationKind::Success { "✓" } else { "!" };
                    view! {
                        <div class=class on:click=move |_| notifications.dismiss(id)>
                            <Badge appearance=BadgeAppearance::Filled color=color>
                                {mark}
                            </Badge>
                            <span>{n.text}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Success, "a");
        let b = q.push(NotificationKind::Error, "b");
        assert!(b > a);
        assert_eq!(q.items().len(), 2);
        assert_eq!(q.items()[1].kind, NotificationKind::Error);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Success, "a");
        q.push(NotificationKind::Success, "b");
        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].text, "b");

        // unknown ids are ignored
        q.dismiss(999);
        assert_eq!(q.items().len(), 1);
    }
}

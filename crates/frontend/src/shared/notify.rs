//! Transient success/error toasts.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    id: u64,
    notification: Notification,
}

#[derive(Clone, Copy)]
pub struct Notifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.toasts.update(|list| list.push(Toast { id, notification }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toasts.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Notification::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Notification::error(message));
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not found in component tree")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="toast-host">
            <For
                each=move || notifier.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.notification.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Error => "toast toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status" on:click=move |_| notifier.dismiss(id)>
                            {toast.notification.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

//! Transient toast queue with per-toast expiry timers.
//!
//! # Responsibility
//! - Assign ids to toast requests and keep visible toasts in display order.
//! - Schedule one cancellable removal task per finite-duration toast.
//!
//! # Invariants
//! - A dismissed toast's timer is cancelled in the same call.
//! - `ToastDuration::Infinite` toasts are never scheduled.
//! - Without a tokio runtime in context, toasts are shown but never expire.

use crate::model::notification::{Toast, ToastDuration, ToastId, ToastRequest};
use crate::service::events::{Collection, StoreEvent};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[derive(Default)]
struct ToastState {
    visible: Vec<Toast>,
    timers: HashMap<ToastId, CancellationToken>,
}

impl ToastState {
    fn take(&mut self, id: ToastId) -> bool {
        if let Some(token) = self.timers.remove(&id) {
            token.cancel();
        }
        let before = self.visible.len();
        self.visible.retain(|toast| toast.id != id);
        self.visible.len() != before
    }
}

fn lock(state: &Mutex<ToastState>) -> MutexGuard<'_, ToastState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct ToastCenter {
    state: Arc<Mutex<ToastState>>,
    default_duration: Duration,
    events: broadcast::Sender<StoreEvent>,
}

impl ToastCenter {
    pub fn new(default_duration: Duration, events: broadcast::Sender<StoreEvent>) -> Self {
        Self {
            state: Arc::default(),
            default_duration,
            events,
        }
    }

    /// Shows a toast and returns its generated id.
    ///
    /// A missing or zero duration falls back to the default duration.
    pub fn show(&self, request: ToastRequest) -> ToastId {
        let duration = match request.duration {
            Some(ToastDuration::Millis(0)) | None => ToastDuration::Millis(
                u64::try_from(self.default_duration.as_millis()).unwrap_or(u64::MAX),
            ),
            Some(duration) => duration,
        };
        let toast = Toast {
            id: Uuid::new_v4(),
            kind: request.kind,
            title: request.title,
            message: request.message,
            duration,
        };
        let id = toast.id;
        debug!(
            "event=toast_show module=toast status=ok id={id} kind={:?} title={}",
            toast.kind, toast.title
        );
        lock(&self.state).visible.push(toast);

        if let ToastDuration::Millis(ms) = duration {
            if let Some(token) = self.schedule_expiry(id, Duration::from_millis(ms)) {
                let mut state = lock(&self.state);
                if state.visible.iter().any(|toast| toast.id == id) {
                    state.timers.insert(id, token);
                } else {
                    token.cancel();
                }
            }
        }

        self.publish();
        id
    }

    /// Removes a toast and cancels its timer. Returns `false` for unknown ids.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let removed = lock(&self.state).take(id);
        if removed {
            debug!("event=toast_dismiss module=toast status=ok id={id}");
            self.publish();
        } else {
            debug!("event=toast_dismiss module=toast status=noop id={id}");
        }
        removed
    }

    /// Visible toasts in the order they were shown.
    pub fn snapshot(&self) -> Vec<Toast> {
        lock(&self.state).visible.clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.state).visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of expiry timers still armed.
    pub fn pending_timers(&self) -> usize {
        lock(&self.state).timers.len()
    }

    fn schedule_expiry(&self, id: ToastId, after: Duration) -> Option<CancellationToken> {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                warn!("event=toast_schedule module=toast status=error reason=no_runtime id={id}");
                return None;
            }
        };

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let state = Arc::clone(&self.state);
        let events = self.events.clone();
        runtime.spawn(async move {
            tokio::select! {
                () = cancelled.cancelled() => {}
                () = tokio::time::sleep(after) => {
                    let mut guard = lock(&state);
                    guard.timers.remove(&id);
                    let before = guard.visible.len();
                    guard.visible.retain(|toast| toast.id != id);
                    let expired = guard.visible.len() != before;
                    drop(guard);
                    if expired {
                        debug!("event=toast_expire module=toast status=ok id={id}");
                        let _ = events.send(StoreEvent::Changed(Collection::Toasts));
                    }
                }
            }
        });
        Some(token)
    }

    fn publish(&self) {
        let _ = self.events.send(StoreEvent::Changed(Collection::Toasts));
    }
}

impl Drop for ToastCenter {
    fn drop(&mut self) {
        let mut state = lock(&self.state);
        for (_, token) in state.timers.drain() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ToastCenter;
    use crate::model::notification::{ToastDuration, ToastRequest};
    use std::time::Duration;
    use tokio::sync::broadcast;

    fn center() -> ToastCenter {
        let (events, _) = broadcast::channel(16);
        ToastCenter::new(Duration::from_millis(4_000), events)
    }

    #[test]
    fn without_runtime_toast_is_shown_but_not_scheduled() {
        let toasts = center();
        let id = toasts.show(ToastRequest::info("Offline"));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.pending_timers(), 0);
        assert!(toasts.dismiss(id));
        assert!(toasts.is_empty());
    }

    #[test]
    fn missing_duration_uses_default() {
        let toasts = center();
        toasts.show(ToastRequest::success("Saved"));
        let shown = toasts.snapshot();
        assert_eq!(shown[0].duration, ToastDuration::Millis(4_000));
    }

    #[test]
    fn zero_duration_uses_default() {
        let toasts = center();
        toasts.show(ToastRequest::info("Blink").with_duration(ToastDuration::Millis(0)));
        assert_eq!(toasts.snapshot()[0].duration, ToastDuration::Millis(4_000));
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_cancels_the_timer() {
        let toasts = center();
        let id = toasts.show(ToastRequest::info("Bye"));
        assert_eq!(toasts.pending_timers(), 1);
        assert!(toasts.dismiss(id));
        assert_eq!(toasts.pending_timers(), 0);
        assert!(!toasts.dismiss(id));
    }
}

//! Routing of component interactions to live pagination sessions.

use std::{
    collections::HashMap,
    sync::{
        Arc, OnceLock,
        atomic::{AtomicU64, Ordering},
    },
    time::{SystemTime, UNIX_EPOCH},
};

use tokio::sync::{Mutex, mpsc};
use tracing::debug;
use twilight_model::application::interaction::Interaction;

use super::interaction::{ComponentEvent, component_event};

type SessionMap = HashMap<u64, mpsc::UnboundedSender<ComponentEvent>>;

/// Low bits left free for sessions started within one millisecond of startup.
const SESSION_ID_SHIFT: u32 = 16;

/// Process-wide session counter, seeded from the startup time.
///
/// Custom IDs outlive the process on messages that were never stripped, so a
/// restarted bot must not hand the same IDs out again.
fn session_ids() -> &'static AtomicU64 {
    static IDS: OnceLock<AtomicU64> = OnceLock::new();
    IDS.get_or_init(|| AtomicU64::new(process_epoch()))
}

fn process_epoch() -> u64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64);

    millis << SESSION_ID_SHIFT
}

/// Shared table of live sessions, cheap to clone.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<SessionMap>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a session ID and the receiver its event loop will consume.
    pub async fn register(&self) -> (u64, mpsc::UnboundedReceiver<ComponentEvent>) {
        let session_id = session_ids().fetch_add(1, Ordering::Relaxed) + 1;
        let (sender, receiver) = mpsc::unbounded_channel();

        self.sessions.lock().await.insert(session_id, sender);

        (session_id, receiver)
    }

    /// Drop a session so later interactions for it are ignored.
    pub async fn remove(&self, session_id: u64) {
        self.sessions.lock().await.remove(&session_id);
    }

    /// Number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Forward a decoded event to its session.
    ///
    /// Returns `false` when the session is unknown or already finished.
    pub async fn route(&self, event: ComponentEvent) -> bool {
        let mut sessions = self.sessions.lock().await;
        let session_id = event.session_id;

        let Some(sender) = sessions.get(&session_id) else {
            debug!(session_id, "interaction for unknown pagination session");
            return false;
        };

        if sender.send(event).is_err() {
            sessions.remove(&session_id);
            return false;
        }

        true
    }

    /// Decode a gateway interaction and forward it if it targets a paginator.
    pub async fn dispatch(&self, interaction: &Interaction) -> bool {
        match component_event(interaction) {
            Some(event) => self.route(event).await,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::interaction::{ComponentAction, ReplyHandle};
    use twilight_model::id::Id;

    fn event(session_id: u64) -> ComponentEvent {
        ComponentEvent {
            session_id,
            action: ComponentAction::Button {
                control: "next".to_owned(),
            },
            user_id: Some(Id::new(1)),
            reply: ReplyHandle {
                application_id: Id::new(2),
                interaction_id: Id::new(3),
                token: "token".to_owned(),
            },
        }
    }

    #[tokio::test]
    async fn fresh_registries_never_share_session_ids() {
        let earlier = SessionRegistry::new();
        let (old_id, _old_rx) = earlier.register().await;

        let later = SessionRegistry::new();
        let (new_id, _new_rx) = later.register().await;

        assert_ne!(old_id, new_id);
        assert!(new_id > old_id);
        assert!(old_id > 1 << SESSION_ID_SHIFT);
        assert!(!later.route(event(old_id)).await);
    }

    #[tokio::test]
    async fn routes_only_to_live_sessions() {
        let registry = SessionRegistry::new();
        let (first, mut first_rx) = registry.register().await;
        let (second, second_rx) = registry.register().await;
        assert_ne!(first, second);

        assert!(registry.route(event(first)).await);
        assert_eq!(first_rx.recv().await.map(|e| e.session_id), Some(first));

        assert!(!registry.route(event(999)).await);

        drop(second_rx);
        assert!(!registry.route(event(second)).await);
        assert_eq!(registry.len().await, 1);

        registry.remove(first).await;
        assert!(registry.is_empty().await);
        assert!(!registry.route(event(first)).await);
    }
}

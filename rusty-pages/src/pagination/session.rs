//! Event loop for one live paginated message.

use std::{future, time::Duration};

use tokio::{sync::mpsc, time::Instant};
use tracing::{debug, info};
use twilight_model::{
    channel::message::{component::Component, embed::Embed},
    id::{Id, marker::UserMarker},
};

use super::interaction::{ComponentEvent, ReplyHandle};
use super::navigation::{Navigator, Transition};
use super::respond::{Delivery, PAGINATION_WRONG_USER_MESSAGE};
use crate::page::render_embeds;
use crate::paginator::BuiltPaginator;

/// Session behavior taken from the paginator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Lifetime from the first send; `None` never expires.
    pub expiration: Option<Duration>,
    /// Delete the message on end instead of stripping its components.
    pub delete_on_end: bool,
    /// When set, only this user may navigate.
    pub owner: Option<Id<UserMarker>>,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// A close action was received.
    Closed,
    /// The expiration timer fired.
    Expired,
    /// The event feed was dropped.
    Disconnected,
}

/// Final state of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    pub end: SessionEnd,
    /// Page shown when the session ended.
    pub last_page: usize,
}

/// A sent paginator waiting for interactions.
pub struct Session<D> {
    session_id: u64,
    delivery: D,
    embeds: Vec<Embed>,
    components: Vec<Component>,
    navigator: Navigator,
    options: SessionOptions,
    deadline: Option<Instant>,
}

impl<D: Delivery> Session<D> {
    /// Render every page and send the first one.
    pub async fn start(
        mut delivery: D,
        built: BuiltPaginator,
        session_id: u64,
        options: SessionOptions,
    ) -> anyhow::Result<Self> {
        let embeds = render_embeds(built.pages())?;
        let components = built.layout().to_components(session_id);
        let navigator = built.navigator();

        delivery.send(&embeds[0], &components).await?;

        Ok(Self {
            session_id,
            delivery,
            embeds,
            components,
            navigator,
            deadline: options.expiration.map(|lifetime| Instant::now() + lifetime),
            options,
        })
    }

    pub fn current_page(&self) -> usize {
        self.navigator.current()
    }

    /// Process events until a close action, expiration, or a dropped feed,
    /// then apply the end-of-session effect.
    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<ComponentEvent>) -> SessionOutcome {
        let deadline = self.deadline;
        let expiry = async move {
            match deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => future::pending::<()>().await,
            }
        };
        tokio::pin!(expiry);

        let end = loop {
            tokio::select! {
                () = &mut expiry => break SessionEnd::Expired,
                event = events.recv() => match event {
                    Some(event) => {
                        if let Some(end) = self.handle(event).await {
                            break end;
                        }
                    }
                    None => break SessionEnd::Disconnected,
                },
            }
        };

        events.close();
        self.finish().await;

        info!(
            session_id = self.session_id,
            ?end,
            last_page = self.current_page(),
            "pagination session ended"
        );

        SessionOutcome {
            end,
            last_page: self.current_page(),
        }
    }

    async fn handle(&mut self, event: ComponentEvent) -> Option<SessionEnd> {
        if let Some(owner) = self.options.owner
            && event.user_id != Some(owner)
        {
            self.best_effort(
                "reject",
                self.delivery.reject(&event.reply, PAGINATION_WRONG_USER_MESSAGE),
            )
            .await;
            return None;
        }

        let Some(action) = event.action.nav_action() else {
            debug!(
                session_id = self.session_id,
                action = ?event.action,
                "ignoring unknown pagination action"
            );
            self.acknowledge(&event.reply).await;
            return None;
        };

        match self.navigator.apply(action) {
            Transition::Moved(page) => {
                let embed = &self.embeds[page - 1];
                self.best_effort(
                    "update",
                    self.delivery.update(&event.reply, embed, &self.components),
                )
                .await;
                None
            }
            Transition::Unchanged => {
                self.acknowledge(&event.reply).await;
                None
            }
            Transition::Close => {
                self.acknowledge(&event.reply).await;
                Some(SessionEnd::Closed)
            }
        }
    }

    async fn acknowledge(&self, reply: &ReplyHandle) {
        self.best_effort("acknowledge", self.delivery.acknowledge(reply)).await;
    }

    async fn finish(&self) {
        if self.options.delete_on_end {
            self.best_effort("delete", self.delivery.delete()).await;
        } else {
            let embed = &self.embeds[self.navigator.current() - 1];
            self.best_effort("strip", self.delivery.strip(embed)).await;
        }
    }

    // The message may already be gone; failures here are expected and dropped.
    async fn best_effort(
        &self,
        operation: &'static str,
        call: impl Future<Output = anyhow::Result<()>>,
    ) {
        if let Err(source) = call.await {
            debug!(
                session_id = self.session_id,
                operation,
                ?source,
                "pagination delivery failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::page::Page;
    use crate::pagination::interaction::ComponentAction;
    use crate::pagination::render::ContentType;
    use crate::paginator::Paginator;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Send(String),
        Update(String),
        Acknowledge,
        Reject,
        Strip(String),
        Delete,
    }

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<Call>>>,
        fail_updates: bool,
    }

    impl Recorder {
        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn footer(embed: &Embed) -> String {
        embed
            .footer
            .as_ref()
            .map(|footer| footer.text.clone())
            .unwrap_or_default()
    }

    impl Delivery for Recorder {
        async fn send(&mut self, embed: &Embed, _components: &[Component]) -> anyhow::Result<()> {
            self.record(Call::Send(footer(embed)));
            Ok(())
        }

        async fn update(
            &self,
            _reply: &ReplyHandle,
            embed: &Embed,
            _components: &[Component],
        ) -> anyhow::Result<()> {
            self.record(Call::Update(footer(embed)));
            if self.fail_updates {
                anyhow::bail!("Unknown Message");
            }
            Ok(())
        }

        async fn acknowledge(&self, _reply: &ReplyHandle) -> anyhow::Result<()> {
            self.record(Call::Acknowledge);
            Ok(())
        }

        async fn reject(&self, _reply: &ReplyHandle, _notice: &str) -> anyhow::Result<()> {
            self.record(Call::Reject);
            Ok(())
        }

        async fn strip(&self, embed: &Embed) -> anyhow::Result<()> {
            self.record(Call::Strip(footer(embed)));
            Ok(())
        }

        async fn delete(&self) -> anyhow::Result<()> {
            self.record(Call::Delete);
            Ok(())
        }
    }

    fn built(items: u32) -> BuiltPaginator {
        let mut paginator = Paginator::default();
        paginator
            .set_per_page(1)
            .unwrap()
            .set_content_type(ContentType::InlineText)
            .add_pages([Page::new().title("Test")])
            .set_contents(1..=items);
        paginator.build().unwrap()
    }

    fn press(control: &str, user: u64) -> ComponentEvent {
        ComponentEvent {
            session_id: 1,
            action: ComponentAction::Button {
                control: control.to_owned(),
            },
            user_id: Some(Id::new(user)),
            reply: ReplyHandle {
                application_id: Id::new(1),
                interaction_id: Id::new(2),
                token: "token".to_owned(),
            },
        }
    }

    async fn run_with(
        recorder: Recorder,
        options: SessionOptions,
        events: Vec<ComponentEvent>,
    ) -> SessionOutcome {
        let session = Session::start(recorder, built(3), 1, options).await.unwrap();
        let (sender, receiver) = mpsc::unbounded_channel();
        for event in events {
            sender.send(event).unwrap();
        }
        drop(sender);
        session.run(receiver).await
    }

    #[tokio::test]
    async fn navigates_and_strips_on_close() {
        let recorder = Recorder::default();
        let outcome = run_with(
            recorder.clone(),
            SessionOptions::default(),
            vec![press("next", 1), press("next", 1), press("next", 1), press("stop", 1)],
        )
        .await;

        assert_eq!(
            outcome,
            SessionOutcome {
                end: SessionEnd::Closed,
                last_page: 3,
            }
        );
        assert_eq!(
            recorder.calls(),
            vec![
                Call::Send("Page 1 of 3".to_owned()),
                Call::Update("Page 2 of 3".to_owned()),
                Call::Update("Page 3 of 3".to_owned()),
                Call::Acknowledge,
                Call::Acknowledge,
                Call::Strip("Page 3 of 3".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn close_deletes_when_configured() {
        let recorder = Recorder::default();
        let options = SessionOptions {
            delete_on_end: true,
            ..SessionOptions::default()
        };
        let outcome = run_with(recorder.clone(), options, vec![press("Close", 1)]).await;

        assert_eq!(outcome.end, SessionEnd::Closed);
        assert_eq!(recorder.calls().last(), Some(&Call::Delete));
        assert!(!recorder.calls().iter().any(|call| matches!(call, Call::Strip(_))));
    }

    #[tokio::test]
    async fn filtered_session_rejects_other_users() {
        let recorder = Recorder::default();
        let options = SessionOptions {
            owner: Some(Id::new(1)),
            ..SessionOptions::default()
        };
        let outcome = run_with(
            recorder.clone(),
            options,
            vec![press("next", 2), press("stop", 2), press("next", 1)],
        )
        .await;

        assert_eq!(outcome.end, SessionEnd::Disconnected);
        assert_eq!(outcome.last_page, 2);
        assert_eq!(
            recorder.calls(),
            vec![
                Call::Send("Page 1 of 3".to_owned()),
                Call::Reject,
                Call::Reject,
                Call::Update("Page 2 of 3".to_owned()),
                Call::Strip("Page 2 of 3".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn unknown_actions_do_not_move() {
        let recorder = Recorder::default();
        let outcome = run_with(
            recorder.clone(),
            SessionOptions::default(),
            vec![press("bookmark", 1)],
        )
        .await;

        assert_eq!(outcome.last_page, 1);
        assert!(!recorder.calls().iter().any(|call| matches!(call, Call::Update(_))));
    }

    #[tokio::test]
    async fn delivery_failures_are_swallowed() {
        let recorder = Recorder {
            fail_updates: true,
            ..Recorder::default()
        };
        let outcome = run_with(
            recorder.clone(),
            SessionOptions::default(),
            vec![press("last", 1), press("first", 1), press("close", 1)],
        )
        .await;

        assert_eq!(outcome.end, SessionEnd::Closed);
        assert_eq!(outcome.last_page, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn expiration_ends_with_close_effect() {
        let recorder = Recorder::default();
        let options = SessionOptions {
            expiration: Some(Duration::from_secs(300)),
            ..SessionOptions::default()
        };
        let session = Session::start(recorder.clone(), built(3), 1, options)
            .await
            .unwrap();
        let (sender, receiver) = mpsc::unbounded_channel();
        sender.send(press("next", 1)).unwrap();

        let outcome = session.run(receiver).await;
        drop(sender);

        assert_eq!(outcome.end, SessionEnd::Expired);
        assert_eq!(
            recorder.calls().last(),
            Some(&Call::Strip("Page 2 of 3".to_owned()))
        );
    }
}

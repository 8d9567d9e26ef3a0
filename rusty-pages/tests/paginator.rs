use std::sync::{Arc, Mutex};

use rusty_pages::pagination::{
    ComponentAction, ComponentEvent, ComponentLayout, ControlStyle, Delivery, ReplyHandle,
    SessionEnd,
};
use rusty_pages::{
    ComponentType, ContentType, EmojiSet, Page, Paginator, PaginatorConfig, SessionRegistry,
};
use twilight_model::{
    channel::message::{component::Component, embed::Embed},
    id::Id,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Effect {
    Shown(String),
    Stripped(String),
    Deleted,
}

#[derive(Clone, Default)]
struct FakeChannel {
    effects: Arc<Mutex<Vec<Effect>>>,
}

impl FakeChannel {
    fn push(&self, effect: Effect) {
        self.effects.lock().unwrap().push(effect);
    }

    fn effects(&self) -> Vec<Effect> {
        self.effects.lock().unwrap().clone()
    }
}

fn footer_text(embed: &Embed) -> String {
    embed
        .footer
        .as_ref()
        .map(|footer| footer.text.clone())
        .unwrap_or_default()
}

impl Delivery for FakeChannel {
    async fn send(&mut self, embed: &Embed, _components: &[Component]) -> anyhow::Result<()> {
        self.push(Effect::Shown(footer_text(embed)));
        Ok(())
    }

    async fn update(
        &self,
        _reply: &ReplyHandle,
        embed: &Embed,
        _components: &[Component],
    ) -> anyhow::Result<()> {
        self.push(Effect::Shown(footer_text(embed)));
        Ok(())
    }

    async fn acknowledge(&self, _reply: &ReplyHandle) -> anyhow::Result<()> {
        Ok(())
    }

    async fn reject(&self, _reply: &ReplyHandle, _notice: &str) -> anyhow::Result<()> {
        Ok(())
    }

    async fn strip(&self, embed: &Embed) -> anyhow::Result<()> {
        self.push(Effect::Stripped(footer_text(embed)));
        Ok(())
    }

    async fn delete(&self) -> anyhow::Result<()> {
        self.push(Effect::Deleted);
        Ok(())
    }
}

fn press(session_id: u64, control: &str) -> ComponentEvent {
    ComponentEvent {
        session_id,
        action: ComponentAction::Button {
            control: control.to_owned(),
        },
        user_id: Some(Id::new(100)),
        reply: ReplyHandle {
            application_id: Id::new(1),
            interaction_id: Id::new(2),
            token: "interaction-token".to_owned(),
        },
    }
}

fn seven_numbers() -> Paginator<u32> {
    let config = PaginatorConfig {
        per_page: 3,
        content_type: ContentType::InlineText,
        expiration: None,
        ..PaginatorConfig::default()
    };
    let mut paginator = Paginator::new(config).unwrap();
    paginator
        .add_pages([Page::new().title("Numbers")])
        .set_contents(1..=7);
    paginator
}

#[test]
fn seven_items_three_per_page() {
    let built = seven_numbers().build().unwrap();
    assert_eq!(built.total_pages(), 3);

    let footers: Vec<_> = built
        .pages()
        .iter()
        .map(|page| page.footer.clone().unwrap_or_default())
        .collect();
    assert_eq!(footers, ["Page 1 of 3", "Page 2 of 3", "Page 3 of 3"]);

    let last = &built.pages()[2];
    assert_eq!(last.fields.len(), 1);
    assert_eq!(last.fields[0].value, "7");
    assert_eq!(built.pages()[0].fields[0].value, "1\n2\n3");
}

#[test]
fn named_emoji_map_drives_button_ids() {
    let mut paginator = seven_numbers();
    paginator.set_emojis(
        EmojiSet::named([
            ("first", "⏮️"),
            ("previous", "◀️"),
            ("next", "▶️"),
            ("last", "⏭️"),
            ("stop", "⏹️"),
        ])
        .unwrap(),
    );

    let built = paginator.build().unwrap();
    let ComponentLayout::Buttons(controls) = built.layout() else {
        panic!("expected buttons");
    };

    let ids: Vec<_> = controls.iter().map(|control| control.id.as_str()).collect();
    assert_eq!(ids, ["first", "previous", "next", "last", "stop"]);
    for control in controls {
        let expected = if control.id == "stop" {
            ControlStyle::Destructive
        } else {
            ControlStyle::Neutral
        };
        assert_eq!(control.style, expected, "{}", control.id);
    }
}

#[test]
fn select_menu_with_many_pages_uses_actions() {
    let mut paginator = Paginator::default();
    paginator
        .set_per_page(1)
        .unwrap()
        .set_component_type(ComponentType::SelectMenu)
        .set_contents((1..=30).map(|n| format!("Entry {n}")));

    let built = paginator.build().unwrap();
    assert_eq!(built.total_pages(), 30);
    assert!(built.layout().is_action_menu());
}

#[tokio::test]
async fn close_strips_components_and_keeps_current_page() {
    let registry = SessionRegistry::new();
    let channel = FakeChannel::default();

    let running = seven_numbers()
        .start(channel.clone(), None, &registry)
        .await
        .unwrap();
    assert_eq!(registry.len().await, 1);

    assert!(registry.route(press(running.session_id, "next")).await);
    assert!(registry.route(press(running.session_id, "close")).await);

    let outcome = running.task.await.unwrap();
    assert_eq!(outcome.end, SessionEnd::Closed);
    assert_eq!(outcome.last_page, 2);
    assert_eq!(
        channel.effects(),
        [
            Effect::Shown("Page 1 of 3".to_owned()),
            Effect::Shown("Page 2 of 3".to_owned()),
            Effect::Stripped("Page 2 of 3".to_owned()),
        ]
    );
    assert!(registry.is_empty().await);
}

#[tokio::test]
async fn close_deletes_when_delete_on_end() {
    let registry = SessionRegistry::new();
    let channel = FakeChannel::default();

    let mut paginator = seven_numbers();
    paginator.set_delete_on_end(true);
    let running = paginator
        .start(channel.clone(), None, &registry)
        .await
        .unwrap();

    assert!(registry.route(press(running.session_id, "stop")).await);

    let outcome = running.task.await.unwrap();
    assert_eq!(outcome.end, SessionEnd::Closed);
    assert_eq!(
        channel.effects(),
        [Effect::Shown("Page 1 of 3".to_owned()), Effect::Deleted]
    );
}

#[tokio::test]
async fn stale_session_ids_do_not_reach_new_sessions() {
    let registry = SessionRegistry::new();
    let channel = FakeChannel::default();

    let running = seven_numbers()
        .start(channel.clone(), None, &registry)
        .await
        .unwrap();

    // A leftover button from an earlier process used the first low ID.
    assert_ne!(running.session_id, 1);
    assert!(!registry.route(press(1, "next")).await);

    assert!(registry.route(press(running.session_id, "close")).await);
    let outcome = running.task.await.unwrap();
    assert_eq!(outcome.last_page, 1);
    assert_eq!(
        channel.effects(),
        [
            Effect::Shown("Page 1 of 3".to_owned()),
            Effect::Stripped("Page 1 of 3".to_owned()),
        ]
    );
}

#[tokio::test]
async fn filtered_paginator_needs_an_owner() {
    let registry = SessionRegistry::new();
    let mut paginator = seven_numbers();
    paginator.set_filtered(true);

    let err = paginator
        .start(FakeChannel::default(), None, &registry)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("owning user"));
    assert!(registry.is_empty().await);
}

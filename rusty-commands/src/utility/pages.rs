use tracing::{debug, info, warn};
use twilight_model::{channel::Message, gateway::payload::incoming::MessageCreate};

use crate::CommandMeta;
use rusty_core::Context;
use rusty_pages::{
    ComponentType, ContentType, Page, Paginator, PaginatorConfig, PaginatorError, SendTarget,
};

pub const META: CommandMeta = CommandMeta {
    name: "pages",
    desc: "Paginate sample items in this channel.",
    category: "utility",
    usage: "!pages [per_page]",
};

pub const DM_META: CommandMeta = CommandMeta {
    name: "pagesdm",
    desc: "Paginate sample items in a direct message.",
    category: "utility",
    usage: "!pagesdm [per_page]",
};

pub const MENU_META: CommandMeta = CommandMeta {
    name: "pagesmenu",
    desc: "Paginate sample items with a select menu.",
    category: "utility",
    usage: "!pagesmenu [per_page]",
};

const SAMPLE_ITEMS: usize = 24;

/// Paginate the sample items in the invoking channel with buttons.
pub async fn run(ctx: Context, msg: Box<MessageCreate>, arg1: Option<&str>) -> anyhow::Result<()> {
    let target = SendTarget::from_message(&msg);
    start(&ctx, &msg, &META, target, arg1, |_| {}).await
}

/// Same as [`run`], delivered to the author's DMs.
pub async fn run_dm(
    ctx: Context,
    msg: Box<MessageCreate>,
    arg1: Option<&str>,
) -> anyhow::Result<()> {
    let target = SendTarget::User(msg.author.id);
    start(&ctx, &msg, &DM_META, target, arg1, |_| {}).await
}

/// Paginate the sample items as two columns behind a select menu.
pub async fn run_menu(
    ctx: Context,
    msg: Box<MessageCreate>,
    arg1: Option<&str>,
) -> anyhow::Result<()> {
    let target = SendTarget::from_message(&msg);
    start(&ctx, &msg, &MENU_META, target, arg1, |paginator| {
        paginator
            .set_component_type(ComponentType::SelectMenu)
            .set_content_type(ContentType::TwoColumn);
    })
    .await
}

async fn start(
    ctx: &Context,
    msg: &Message,
    meta: &CommandMeta,
    target: SendTarget,
    arg1: Option<&str>,
    customize: impl FnOnce(&mut Paginator<String>),
) -> anyhow::Result<()> {
    let http = &ctx.http;

    let config = match PaginatorConfig::from_env() {
        Ok(config) => config,
        Err(source) => {
            warn!(%source, "ignoring invalid paginator environment");
            PaginatorConfig::default()
        }
    };
    let mut paginator = Paginator::new(config)?;

    if let Some(raw) = arg1 {
        let applied = raw
            .parse::<usize>()
            .ok()
            .and_then(|per_page| paginator.set_per_page(per_page).ok())
            .is_some();
        if !applied {
            let usage = format!("Usage: `{}` (per_page starts at 1)", meta.usage);
            http.create_message(msg.channel_id).content(&usage).await?;
            return Ok(());
        }
    }

    paginator
        .add_pages([Page::new()
            .title("Pagination Demo")
            .description(format!("Requested by <@{}>", msg.author.id))])
        .set_contents(sample_items());
    customize(&mut paginator);
    debug!(command = meta.name, pages = paginator.total_pages(), "sending pagination demo");

    match paginator.send(ctx.http.clone(), target, &ctx.sessions).await {
        Ok(running) => {
            info!(
                command = meta.name,
                session_id = running.session_id,
                user_id = %msg.author.id,
                "pagination demo sent"
            );
        }
        Err(source) if source.is::<PaginatorError>() => {
            let out = format!("Could not paginate: {source}");
            http.create_message(msg.channel_id).content(&out).await?;
        }
        Err(source) => return Err(source),
    }

    Ok(())
}

fn sample_items() -> Vec<String> {
    (1..=SAMPLE_ITEMS)
        .map(|index| format!("Sample pagination item #{index}"))
        .collect()
}

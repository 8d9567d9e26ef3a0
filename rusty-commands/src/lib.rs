pub mod utility;

use tracing::debug;
use twilight_model::gateway::payload::incoming::{InteractionCreate, MessageCreate};

use rusty_core::Context;

/// Prefix every message command starts with.
pub const COMMAND_PREFIX: char = '!';

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::pages::META,
    utility::pages::DM_META,
    utility::pages::MENU_META,
    // Add new commands here
];

/// Split a message into its lower-cased command name and first argument.
fn parse_command(content: &str) -> Option<(String, Option<&str>)> {
    let content = content.trim().strip_prefix(COMMAND_PREFIX)?.trim();
    let mut parts = content.split_whitespace();
    let cmd = parts.next()?.to_ascii_lowercase();

    Some((cmd, parts.next()))
}

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.clone();
    let Some((cmd, arg1)) = parse_command(&content) else {
        return Ok(());
    };

    match cmd.as_str() {
        "help" => utility::help::run(ctx, msg).await?,
        "pages" => utility::pages::run(ctx, msg, arg1).await?,
        "pagesdm" => utility::pages::run_dm(ctx, msg, arg1).await?,
        "pagesmenu" => utility::pages::run_menu(ctx, msg, arg1).await?,
        // Add new commands here
        _ => {}
    }

    Ok(())
}

/// Forward component interactions to the pagination session they belong to.
pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    if !ctx.sessions.dispatch(&interaction).await {
        debug!(interaction_id = %interaction.id, "interaction not routed to a paginator");
    }

    Ok(())
}

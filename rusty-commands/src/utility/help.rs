use tracing::info;
use twilight_model::gateway::payload::incoming::MessageCreate;

use crate::{COMMANDS, CommandMeta};
use rusty_core::Context;
use rusty_pages::{Field, Page, Paginator, PaginatorConfig, SendTarget};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help",
};

const HELP_COMMANDS_PER_PAGE: usize = 5;

/// Page through the command catalog, one field per command.
pub async fn run(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    let config = PaginatorConfig {
        per_page: HELP_COMMANDS_PER_PAGE,
        filtered: true,
        ..PaginatorConfig::default()
    };

    let mut paginator = Paginator::new(config)?;
    paginator
        .add_pages([Page::new()
            .title("Rusty Commands")
            .description("Use the buttons below to browse.")])
        .set_contents(command_fields());

    paginator
        .send(ctx.http.clone(), SendTarget::from_message(&msg), &ctx.sessions)
        .await?;
    info!(user_id = %msg.author.id, "help catalog sent");

    Ok(())
}

fn command_fields() -> Vec<Field> {
    let mut commands: Vec<&CommandMeta> = COMMANDS.iter().collect();
    commands.sort_unstable_by_key(|meta| (meta.category, meta.name));

    commands
        .into_iter()
        .map(|meta| Field::new(format!("`{}`", meta.usage), meta.desc, false))
        .collect()
}

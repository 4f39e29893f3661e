use crate::XkcdError;
use serenity::all::{
    Command, CommandOptionType, Context, CreateCommand, CreateCommandOption, GuildId, Permissions,
};

/// Name of the top-level slash command
pub const COMMAND_NAME: &str = "xkcd";

/// Builds the `/xkcd` command with all of its subcommands
pub fn xkcd_command() -> CreateCommand {
    CreateCommand::new(COMMAND_NAME)
        .description("xkcd related commands")
        .default_member_permissions(Permissions::EMBED_LINKS)
        .add_option(subcommand("latest", "Gets the latest xkcd"))
        .add_option(subcommand("random", "Get a random xkcd"))
        .add_option(
            subcommand("range", "Gets a range of xkcd comics")
                .add_sub_option(integer("first", "The first comic to get"))
                .add_sub_option(integer("last", "The last comic to get"))
                .add_sub_option(buttons()),
        )
        .add_option(
            subcommand("get", "Get a specific xkcd comic")
                .add_sub_option(integer("num", "The comic to get"))
                .add_sub_option(buttons()),
        )
        .add_option(
            subcommand("lookup", "Get a comic by its name")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::String,
                        "name",
                        "The name of the comic to get",
                    )
                    .required(true),
                )
                .add_sub_option(buttons()),
        )
        .add_option(subcommand("help", "Bot information and help"))
}

/// Registers `/xkcd` in `guild`, or globally when no guild is given
///
/// Guild commands show up immediately, which is what testing needs; global
/// commands can take a while to propagate.
pub async fn register_commands(ctx: &Context, guild: Option<u64>) -> Result<(), XkcdError> {
    match guild {
        Some(guild_id) => {
            GuildId::new(guild_id)
                .set_commands(&ctx.http, vec![xkcd_command()])
                .await?;
            tracing::info!("Registered /{} in guild {}", COMMAND_NAME, guild_id);
        }
        None => {
            Command::set_global_commands(&ctx.http, vec![xkcd_command()]).await?;
            tracing::info!("Registered /{} globally", COMMAND_NAME);
        }
    }
    Ok(())
}

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

fn integer(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description).required(true)
}

fn buttons() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::Boolean,
        "buttons",
        "Whether to show navigation buttons",
    )
    .required(false)
}

use crate::commands::{ArgValue, CommandArgs};
use crate::CommandError;
use serenity::all::{CommandDataOption, CommandDataOptionValue, CommandInteraction};

/// Splits an `/xkcd` interaction into its subcommand name and options
pub fn decode(command: &CommandInteraction) -> Result<(String, CommandArgs), CommandError> {
    decode_options(&command.data.options)
}

fn decode_options(options: &[CommandDataOption]) -> Result<(String, CommandArgs), CommandError> {
    let Some(subcommand) = options.first() else {
        return Err(CommandError::UnknownSubcommand(String::new()));
    };

    let CommandDataOptionValue::SubCommand(sub_options) = &subcommand.value else {
        return Err(CommandError::UnknownSubcommand(subcommand.name.clone()));
    };

    let mut args = CommandArgs::new();
    for option in sub_options {
        let value = match &option.value {
            CommandDataOptionValue::Integer(value) => ArgValue::Integer(*value),
            CommandDataOptionValue::Boolean(value) => ArgValue::Boolean(*value),
            CommandDataOptionValue::String(value) => ArgValue::String(value.clone()),
            other => {
                tracing::debug!("Ignoring unexpected option {}: {:?}", option.name, other);
                continue;
            }
        };
        args.insert(option.name.clone(), value);
    }

    Ok((subcommand.name.clone(), args))
}

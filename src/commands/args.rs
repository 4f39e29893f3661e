use crate::CommandError;
use std::collections::HashMap;

/// A decoded slash command option value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Integer(i64),
    Boolean(bool),
    String(String),
}

/// Option values of one subcommand invocation, by option name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    values: HashMap<String, ArgValue>,
}

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        self.values.insert(name.into(), value);
    }

    /// Builder-style `insert`
    pub fn with(mut self, name: impl Into<String>, value: ArgValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Required integer option, narrowed to a comic number
    fn comic_number(&self, name: &'static str) -> Result<i32, CommandError> {
        match self.values.get(name) {
            Some(ArgValue::Integer(value)) => {
                i32::try_from(*value).map_err(|_| CommandError::InvalidArgument {
                    name,
                    reason: format!("{} is out of range", value),
                })
            }
            Some(other) => Err(CommandError::InvalidArgument {
                name,
                reason: format!("expected an integer, got {:?}", other),
            }),
            None => Err(CommandError::MissingArgument(name)),
        }
    }

    fn string(&self, name: &'static str) -> Result<String, CommandError> {
        match self.values.get(name) {
            Some(ArgValue::String(value)) => Ok(value.clone()),
            Some(other) => Err(CommandError::InvalidArgument {
                name,
                reason: format!("expected a string, got {:?}", other),
            }),
            None => Err(CommandError::MissingArgument(name)),
        }
    }

    /// Optional boolean option; absent means `false`
    fn flag(&self, name: &'static str) -> Result<bool, CommandError> {
        match self.values.get(name) {
            Some(ArgValue::Boolean(value)) => Ok(*value),
            Some(other) => Err(CommandError::InvalidArgument {
                name,
                reason: format!("expected a boolean, got {:?}", other),
            }),
            None => Ok(false),
        }
    }
}

/// A fully decoded `/xkcd` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XkcdCommand {
    Latest,
    Random,
    Range { first: i32, last: i32, buttons: bool },
    Get { num: i32, buttons: bool },
    Lookup { name: String, buttons: bool },
    Help,
}

impl XkcdCommand {
    /// Decodes a subcommand name and its options
    pub fn parse(subcommand: &str, args: &CommandArgs) -> Result<Self, CommandError> {
        match subcommand {
            "latest" => Ok(XkcdCommand::Latest),
            "random" => Ok(XkcdCommand::Random),
            "range" => Ok(XkcdCommand::Range {
                first: args.comic_number("first")?,
                last: args.comic_number("last")?,
                buttons: args.flag("buttons")?,
            }),
            "get" => Ok(XkcdCommand::Get {
                num: args.comic_number("num")?,
                buttons: args.flag("buttons")?,
            }),
            "lookup" => Ok(XkcdCommand::Lookup {
                name: args.string("name")?,
                buttons: args.flag("buttons")?,
            }),
            "help" => Ok(XkcdCommand::Help),
            other => Err(CommandError::UnknownSubcommand(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            XkcdCommand::Latest => "latest",
            XkcdCommand::Random => "random",
            XkcdCommand::Range { .. } => "range",
            XkcdCommand::Get { .. } => "get",
            XkcdCommand::Lookup { .. } => "lookup",
            XkcdCommand::Help => "help",
        }
    }

    /// Whether replies are only shown to the invoking user
    pub fn is_ephemeral(&self) -> bool {
        matches!(self, XkcdCommand::Help)
    }
}

//! The `/xkcd` subcommands
//!
//! This module contains the platform-independent side of the slash command:
//! - Argument decoding into `XkcdCommand`
//! - Validation and subcommand behavior in `CommandRouter`
//! - The `Responder` trait through which replies are posted
//! - The static help page

mod args;
mod help;
mod responder;
mod router;

pub use args::{ArgValue, CommandArgs, XkcdCommand};
pub use help::HelpPage;
pub use responder::Responder;
pub use router::CommandRouter;

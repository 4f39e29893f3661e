//! Discord integration
//!
//! This module adapts the platform-independent pieces to serenity:
//! - Client startup and the index refresh task
//! - The event handler (ready, slash commands, button clicks)
//! - Slash command definition and registration
//! - Embed and button rendering
//! - The `Responder` implementation that posts interaction followups

mod components;
mod handler;
mod options;
mod register;
mod render;
mod responder;
mod start;

pub use handler::Handler;
pub use register::{register_commands, xkcd_command, COMMAND_NAME};
pub use render::{comic_embed, help_message, navigation_rows};
pub use responder::SerenityResponder;
pub use start::start_bot;

//! Discord gateway integration.
//!
//! The bot connects with a single guild in mind: the guild id from the
//! configuration. Events from other guilds are ignored by the handlers.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability and channel data
//! - `GUILD_MESSAGES` - Messages for the auto-reply matcher
//! - `MESSAGE_CONTENT` - Message text (privileged intent)
//! - `GUILD_MEMBERS` - Join, leave and member updates (privileged intent)
//! - `GUILD_MESSAGE_REACTIONS` - Reaction roles
//!
//! Both privileged intents must be enabled in the Discord Developer Portal.

pub mod command;
pub mod handler;
pub mod start;

//! Domain models and typed configuration tables.
//!
//! Configuration tables are deserialized from the JSON asset files once at startup
//! (and again on extension reload) and validated eagerly. Domain values such as
//! `IncomingMessage` are converted from serenity types at the handler boundary so
//! the service layer never depends on gateway payloads.

pub mod command;
pub mod extension;
pub mod keyword;
pub mod member;
pub mod message;
pub mod messages;
pub mod reaction_role;
pub mod report;
pub mod template;
pub mod vip;

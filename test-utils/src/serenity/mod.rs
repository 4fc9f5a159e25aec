//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! let author = create_test_user(1001, "alice");
//! let message = create_test_message(1, 2001, &author, "hello world", &[]);
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `message::create_test_message` - Create guild Message objects

pub mod message;
pub mod user;

pub use message::create_test_message;
pub use user::create_test_user;

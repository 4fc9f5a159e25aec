//! Guild Bot Test Utils
//!
//! Shared helpers for the bot's unit tests: serenity object factories and JSON
//! fixture builders for the asset tables and report payloads.
//!
//! # Overview
//!
//! - **serenity**: `User` and `Message` structs built by deserializing JSON the
//!   way Discord would send it
//! - **builder**: Fluent builders for keyword and VIP table JSON
//! - **fixture**: Report API payloads and rows
//!
//! Builders return `serde_json::Value`; tests deserialize them into the bot's
//! own types so the fixtures go through the same parsing as real files.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::KeywordTableBuilder;
//!
//! let table: KeywordTable = serde_json::from_value(
//!     KeywordTableBuilder::new()
//!         .topic("greeting", &["hello", "world"], 100, &["hi"])
//!         .build(),
//! )
//! .unwrap();
//! ```

pub mod builder;
pub mod fixture;
pub mod serenity;

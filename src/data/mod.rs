//! Access to everything outside the process: JSON asset files on disk and the
//! market report HTTP API.

pub mod asset;
pub mod report;

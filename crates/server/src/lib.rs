//! Playwright recording server.
//!
//! Exposes one browser session as a fixed set of MCP tools over stdio and
//! records the actions performed while recording is active.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod recorder;
pub mod recording;
pub mod session;
pub mod tools;
pub mod transport;
pub mod types;

pub use recorder::Recorder;

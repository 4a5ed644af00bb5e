//! vntranslate - Vietnamese translation server
//!
//! Accepts free-form text over HTTP, sends it to a hosted chat-completion model
//! with a mode-specific instruction prompt and returns the Vietnamese result.

pub mod cli;
pub mod config;
pub mod controllers;
pub mod document;
pub mod error;
pub mod modes;
pub mod server;
pub mod translate;

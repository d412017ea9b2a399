pub mod config;
pub mod document;
pub mod inference;
pub mod languages;
pub mod qa;
pub mod retry;
pub mod server;
pub mod summarize;
pub mod translation;
pub mod ui;

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod display;
pub mod formatter;
pub mod input;
pub mod providers;
pub mod render;
pub mod session;

//! Urlshort library - path-to-URL redirect handlers.

pub mod cli;
pub mod colors;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod redirect;
pub mod state;

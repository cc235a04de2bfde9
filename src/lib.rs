//! shorten - terminal client for a URL shortener service
//!
//! # Architecture
//! - `client`: API client for the shortener service and redirect URL derivation
//! - `models`: wire types (`ShortUrl`, `ShortUrlWithStats`, request bodies)
//! - `interfaces`: CLI views (create, list, edit, stats, delete, link)
//! - `config`: configuration loading (file, environment, flags)
//! - `runtime`: startup and command dispatch
//! - `system`: logging setup

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod models;
pub mod runtime;
pub mod system;
pub mod utils;

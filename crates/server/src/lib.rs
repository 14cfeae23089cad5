//! Folio server library.
//!
//! The JSON API behind the portfolio site: contact messages, projects, tech
//! stack entries, page visit analytics, and a resume download proxy, all
//! backed by `PostgreSQL`. Exposed as a library so the CLI and integration
//! tests reuse the same repositories and router.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

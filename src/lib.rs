//! In-memory CSV referral sheet: upload a file, edit cells, validate required
//! fields and contact formats, and report results in a console panel.

pub mod app;
pub mod config;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod platform;
pub mod ui;
pub mod usecase;

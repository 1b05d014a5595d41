//! May Pasok Ba? - weather advisory TUI
//!
//! Locates the user, fetches current weather, and derives whether there is
//! likely school/work today from wind and rainfall thresholds.

pub mod action;
pub mod advisory;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod share;
pub mod state;

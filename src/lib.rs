// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod art;
pub mod file;
pub mod filter;
pub mod generate;
pub mod progress;
pub mod render;
pub mod roster;
pub mod ui;

#[cfg(feature = "web")]
pub mod web;

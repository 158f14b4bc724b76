// src/lib.rs

#[macro_use]
pub mod macros;

pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod model;

pub mod dashboard;
pub mod data;
pub mod extract;
pub mod file;
pub mod gui;
pub mod progress;
pub mod store;

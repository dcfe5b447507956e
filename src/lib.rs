//! # RustMorseInput
//!
//! Firmware core for a Morse input device.
//!
//! ## Architecture
//!
//! The application loop decodes operator input into a [`MenuIntent`] and hands
//! it to the [`Menu`] cursor. The cursor walks a static [`MenuGraph`] and tells
//! the application what happened through two handlers (change, use). Settings
//! live in an explicitly passed [`ConfigStore`] backed by byte-addressable
//! persistent storage.
//!
//! - No heap allocation
//! - No globals except the log ring
//! - Everything but the ESP-IDF glue is testable on the host

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod console;
pub mod log_globals;
pub mod logging;
pub mod menu;
pub mod serial_log;

pub use config::{Config, ConfigHost, ConfigStore, Language, LoadOutcome};
pub use log_globals::LOG_STREAM;
pub use menu::{DeviceMenu, Menu, MenuAction, MenuGraph, MenuIntent, MenuItem};

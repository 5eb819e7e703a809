//! # fy - Cached Translation CLI
//!
//! `fy` translates short pieces of text through the Baidu Fanyi API and
//! keeps every result in a local JSON cache, so repeated lookups never hit
//! the network.
//!
//! ## Quick Start
//!
//! ```bash
//! export TRANSLATE_APPID=your-app-id
//! export TRANSLATE_SECRET=your-secret
//!
//! # Translate into Chinese
//! fy hello world
//!
//! # Translate into English
//! fy -c 你好
//! ```
//!
//! ## Configuration
//!
//! Optional settings are read from `~/.config/fy/config.toml`:
//!
//! ```toml
//! [fy]
//! endpoint = "https://api.fanyi.baidu.com/api/trans/vip/translate"
//! salt = "baidu"
//! cache_file = "/home/me/translate.json"
//! timeout_secs = 10
//! ```
//!
//! `TRANSLATE_APPID` and `TRANSLATE_SECRET` take precedence over `app_id`
//! and `secret` in the file.

/// Local JSON translation cache.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file loading and resolution.
pub mod config;

/// File system utilities.
pub mod fs;

/// Global output configuration and diagnostics.
pub mod output;

/// Path utilities for configuration and cache.
pub mod paths;

/// Translation client, request signing and the cache-backed translator.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

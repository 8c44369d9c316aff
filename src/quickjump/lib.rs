//! # QuickJump Architecture
//!
//! QuickJump bookmarks directories under short keys so a shell wrapper can
//! `cd` back to them: `qj k3x` prints the directory stored under `k3x`, and
//! the wrapper feeds that line to `cd`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs, browse.rs)          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! │  - stdout carries nothing but the jump target               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per file, returns CmdResult                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - BookmarkStore over a StorageBackend                      │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Keys
//!
//! Keys are short base36 prefixes of a hash of the directory path, see
//! [`keygen`]. Re-bookmarking a directory yields the key it already has.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: The bookmark store and its backends
//! - [`model`]: `Bookmark` and the ordered `Bookmarks` mapping
//! - [`keygen`]: Key derivation and collision policy
//! - [`config`]: Configuration and database location
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod keygen;
pub mod model;
pub mod store;

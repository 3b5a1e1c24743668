//! # Imgmigrate Architecture
//!
//! Imgmigrate moves the lead image of static-site posts into front matter. Given a
//! content tree of markdown files with TOML front matter (`+++` fences), it finds the
//! first `![alt](path)` in each body. It adds `image = '<path>'` to the front matter
//! and comments the original reference out so it is not rendered twice.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, prompts, prints the per-file report        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
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
//! │  - transform: one file, read → decide → splice → write      │
//! │  - migrate: walk a root, tally affected / skipped           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContentStore trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The text work itself (`document`, `image`, `commands::transform::transform_content`)
//! is pure and runs against in-memory strings.
//!
//! ## Outcomes
//!
//! Every visited file ends in exactly one [`commands::Outcome`]. Skips and per-file I/O
//! errors never stop a run; only a missing root, a declined confirmation or an
//! interrupt do.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Transform and traversal logic, outcome and report types
//! - [`document`]: Front-matter fences and key scanning
//! - [`image`]: Markdown image reference lookup and commenting
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Run mode and extension selection
//! - [`error`]: Error types
//! - `cli`: Flags, prompts and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod image;
pub mod store;

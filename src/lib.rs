//! # Guideline Harness
//!
//! A local-first search tool for mobile UI/UX design guidelines.
//!
//! Guideline data lives in plain CSV tables, one per logical domain (color,
//! typography, components, ...) plus one per technology stack (SwiftUI,
//! Jetpack Compose, ...). Each query loads the relevant table, ranks its
//! rows with BM25, and returns the top matches. There is no persistent
//! index: the corpus is small enough that a fresh load-and-score pass per
//! query is cheaper than keeping an index consistent.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────┐   ┌──────────┐
//! │  table   │──▶│  tokenize  │──▶│   bm25   │
//! │ (CSV)    │   │           │   │ (rank)   │
//! └──────────┘   └───────────┘   └────┬─────┘
//!                                     │
//!       ┌──────────┐   ┌──────────┐   │
//!       │  router  │──▶│  search  │◀──┘
//!       │ (domain) │   │ (orches.)│
//!       └──────────┘   └────┬─────┘
//!                           ▼
//!                      ┌──────────┐
//!                      │  render  │
//!                      │ (output) │
//!                      └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! gdl "bottom sheet dialog"                   # auto-routed domain search
//! gdl "elevation" --domain component          # pinned domain
//! gdl "primary" --domain color,typography     # multi-domain
//! gdl "state handling" --stack swiftui        # stack guidelines
//! gdl "navigation" --platform ios --json      # filtered, machine-readable
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML runtime configuration |
//! | [`catalog`] | Static domain/stack/platform tables |
//! | [`models`] | Row and response-envelope types |
//! | [`tokenize`] | Text normalization |
//! | [`bm25`] | BM25 ranking |
//! | [`table`] | CSV table loading |
//! | [`router`] | Query-to-domain routing |
//! | [`search`] | Search orchestration |
//! | [`render`] | Output formatting |

pub mod bm25;
pub mod catalog;
pub mod config;
pub mod models;
pub mod render;
pub mod router;
pub mod search;
pub mod table;
pub mod tokenize;

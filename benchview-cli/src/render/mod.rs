//! Report Rendering
//!
//! Turns loaded result data into a [`Report`](benchview_report::Report) and
//! then into the requested output format.
//!
//! ## Pipeline Overview
//!
//! ```text
//! JSON input (search / macro / compare / status / prs / refs)
//!       │
//!       ▼
//! ┌─────────────┐
//! │   planner   │  Select and order macro benchmarks
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │    cards    │  Render macro cards (parallel)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  metadata   │  Stamp version, time, repository
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cards`] - Parallel macro card rendering
//! - [`metadata`] - Report metadata
//! - [`formatting`] - Human-readable output formatting

mod cards;
mod formatting;
mod metadata;

pub use cards::{CardOutcome, render_cards};
pub use formatting::format_human_output;
pub use metadata::build_report_meta;

#![warn(missing_docs)]
//! Benchview Core - Result Data Contract
//!
//! Typed shapes of the JSON documents served by the benchmark-results API:
//! - `MetricValue` / `Range` for a single measured quantity and its uncertainty
//! - `MacroData` / `SearchData` for macro benchmark results of one git ref
//! - `CompareData` for old-vs-new comparisons (statistics computed upstream)
//! - `StatusEntry`, `PullRequest`, `ReleaseRef` for run, PR and release listings
//!
//! All types are plain data: deserialized per render, compared structurally,
//! never mutated.

mod compare;
mod macrobench;
mod metric;
mod status;

pub use compare::{CompareData, CompareResult, ComparedValue};
pub use macrobench::{ComponentStats, MacroData, SearchData};
pub use metric::{Center, MetricValue, Range};
pub use status::{PullRequest, ReleaseRef, StatusEntry, Version};

//! CodeSentry Analysis - Tool Output Post-Processing
//!
//! Everything between raw analyzer text and the finished report:
//! - `normalize`: strip presentation noise from issue lines
//! - `categorize`: bucket issue lines into fixed quality dimensions
//! - `report`: assemble summary + buckets + raw output into one report
//! - `pipeline`: orchestrate a single request end-to-end
//!
//! All stages are pure functions of their input (idempotent, no state
//! across calls); only the pipeline touches the filesystem and the
//! summarization backend.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod categorize;
pub mod normalize;
pub mod pipeline;
pub mod report;

pub use categorize::{categorize, Category, CategoryBuckets};
pub use normalize::normalize;
pub use pipeline::AnalysisPipeline;
pub use report::Report;

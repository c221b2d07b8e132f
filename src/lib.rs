//! Byte, line, word, character and longest-line statistics for text files.
//!
//! [`metrics`] holds the pure functions; [`reader`] obtains text and sizes
//! from files and [`report`] collects the results.

pub mod logging;
pub mod metrics;
pub mod reader;
pub mod report;

pub use metrics::{Metric, MetricValue, byte_size, char_count, line_count, longest_line, word_count};
pub use reader::{Resource, ResourceId};
pub use report::{FileStats, Summary};

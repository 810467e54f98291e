pub mod analysis;
pub mod archive;
pub mod discover;
pub mod error;
pub mod rules;
pub mod summary;

pub use analysis::{Encoding, PlayerRecord, SaveAnalysis, analyze_save};
pub use error::ScanError;
pub use summary::{BatchSummary, FormatVerdict};

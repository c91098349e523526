pub mod analysis;
pub mod history;
pub mod sequence;

pub use analysis::{AnalysisSession, SaveOutcome};
pub use history::{DailyView, DateOptions, HistorySession};

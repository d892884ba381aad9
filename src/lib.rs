pub mod config;
pub mod error;
pub mod estimate;
pub mod ladder;
pub mod locator;
pub mod logging;
pub mod models;
pub mod processor;
pub mod rounding;
pub mod snapshot;
pub mod spread;

// Re-exports for convenience
pub use error::AnalyzerError;
pub use ladder::{InvestmentBasis, LegLadder};
pub use models::{OptionQuote, OptionSide, SideQuote};
pub use spread::Spread;

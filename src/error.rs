use std::fmt;

#[derive(Debug)]
pub enum AnalyzerError {
    Io(String),
    Csv(String),
    InvalidSharePrice { symbol: String, share_price: f64 },
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnalyzerError::Io(msg) => write!(f, "I/O error: {}", msg),
            AnalyzerError::Csv(msg) => write!(f, "CSV error: {}", msg),
            AnalyzerError::InvalidSharePrice { symbol, share_price } => write!(
                f,
                "Invalid share price for {}: {} (must be positive)",
                symbol, share_price
            ),
        }
    }
}

impl std::error::Error for AnalyzerError {}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        AnalyzerError::Io(err.to_string())
    }
}

impl From<csv::Error> for AnalyzerError {
    fn from(err: csv::Error) -> Self {
        AnalyzerError::Csv(err.to_string())
    }
}

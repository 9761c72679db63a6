use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("complaint and classification counts differ: {complaints} vs {results}")]
    InputMismatch { complaints: usize, results: usize },

    #[error("nothing to summarize: no standardized complaints")]
    Empty,
}

pub type SummaryResult<T> = Result<T, SummaryError>;

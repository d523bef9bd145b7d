use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid padding: {side}={value}")]
    InvalidPadding { side: &'static str, value: f64 },

    #[error("invalid scale: {0}")]
    InvalidScale(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

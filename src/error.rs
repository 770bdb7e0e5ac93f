use thiserror::Error;

pub type PolarChartResult<T> = Result<T, PolarChartError>;

#[derive(Debug, Error)]
pub enum PolarChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("animation progress must be finite and within [0, 1], got {0}")]
    InvalidProgress(f64),
}

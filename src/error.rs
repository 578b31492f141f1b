use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no convergence after {sweeps} sweeps, max delta {delta}")]
    ConvergenceFailure { sweeps: usize, delta: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

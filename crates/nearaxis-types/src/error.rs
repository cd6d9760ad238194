use thiserror::Error;

#[derive(Error, Debug)]
pub enum NearAxisError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Interpolation error: {0}")]
    Interpolation(String),

    #[error("Root finding error: {0}")]
    RootFinding(String),

    #[error("Root solve failed at theta index {j_theta}, phi index {j_phi}: {message}")]
    RootSolve {
        j_theta: usize,
        j_phi: usize,
        message: String,
    },

    #[error("VMEC format error: {0}")]
    VmecFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type NearAxisResult<T> = Result<T, NearAxisError>;

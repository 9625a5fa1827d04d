use thiserror::Error;
use vidtrend_core::{ConfigError, CoreError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Record(#[from] CoreError),
}

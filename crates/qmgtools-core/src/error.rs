use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("command interpreter not found: {program}")]
    InterpreterNotFound {
        program: String,
        #[source]
        source: which::Error,
    },

    #[error("failed to spawn '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UpdateError>;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ochre operations
#[derive(Error, Diagnostic, Debug)]
pub enum OchreError {
    #[error("IO error: {0}")]
    #[diagnostic(code(ochre::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(ochre::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(ochre::invalid_argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown tool: {name}")]
    #[diagnostic(code(ochre::unknown_tool))]
    UnknownTool {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Serialization error: {0}")]
    #[diagnostic(code(ochre::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OchreError>;

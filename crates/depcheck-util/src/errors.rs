use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all depcheck operations.
#[derive(Debug, Error, Diagnostic)]
pub enum DepcheckError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dependency graph file could not be read or parsed.
    ///
    /// The graph is produced upstream by the host build tool; a failure here
    /// is fatal and no partial analysis is attempted.
    #[error("Dependency graph error: {message}")]
    #[diagnostic(help("Regenerate the graph with `mvn dependency:tree -DoutputType=json -DoutputFile=...`"))]
    Graph { message: String },

    /// Invalid or malformed configuration (e.g. depcheck.toml).
    #[error("Config error: {message}")]
    #[diagnostic(help("Check your depcheck.toml for syntax errors"))]
    Config { message: String },

    /// A check found violations and the configured severity is `error`.
    ///
    /// Not a malfunction: the full findings listing has already been printed
    /// when this is raised.
    #[error("Policy violation: {message}")]
    Policy { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type DepcheckResult<T> = miette::Result<T>;

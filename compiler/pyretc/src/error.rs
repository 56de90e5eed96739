use std::io;
use std::path::PathBuf;

/// A failure of the driver itself, as opposed to syntax errors in the
/// input, which are reported as diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
    #[error("usage: {0}")]
    Usage(String),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
    #[error("invalid color mode `{0}`, expected auto, always or never")]
    InvalidColor(String),
    #[error("unknown error code `{0}`, codes look like E0001 or E1003")]
    UnknownCode(String),
}

impl CliError {
    /// Process exit code of every driver failure. Input with errors exits
    /// with 1 instead.
    pub const EXIT_CODE: i32 = 2;

    /// Whether the usage summary should follow the message.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            CliError::Usage(_) | CliError::UnknownCommand(_) | CliError::UnknownFlag(_)
        )
    }
}

use std::fmt;

/// Everything that can stop a sketch from being shown.
#[derive(Debug)]
pub enum Error {
    /// [`Sketch::run`](crate::Sketch::run) was called without a script.
    MissingScript,
    /// The script returned an error.
    Script(anyhow::Error),
    /// The script panicked; holds the panic message.
    ScriptPanicked(String),
    /// Event loop, window or backend failure.
    Runtime(anyhow::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingScript => write!(f, "no script given to sketch"),
            Error::Script(e) => write!(f, "sketch script failed: {e:#}"),
            Error::ScriptPanicked(msg) => write!(f, "sketch script panicked: {msg}"),
            Error::Runtime(e) => write!(f, "easel runtime error: {e:#}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_cause_chain() {
        let err = Error::Script(anyhow::anyhow!("inner").context("outer"));
        assert_eq!(err.to_string(), "sketch script failed: outer: inner");
    }

    #[test]
    fn display_panic_message() {
        let err = Error::ScriptPanicked("boom".into());
        assert_eq!(err.to_string(), "sketch script panicked: boom");
    }
}

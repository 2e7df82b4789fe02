use std::error::Error;
use std::fmt;
use std::io;
use std::path::Path;

/// Enumeration of all possible errors that can occur while cleaning a subtitle file
#[derive(Debug)]
pub enum VttCleanError {
    Input(InputError),
    Output(OutputError),
    Other(io::Error),
}

/// Errors raised while reading or decoding the source document
#[derive(Debug)]
pub struct InputError {
    pub message: String,
    pub source: io::Error,
}

impl InputError {
    /// Create a new error with the given message and underlying cause.
    pub fn new(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    /// Wrap an I/O failure that happened while reading `path`.
    pub fn io(path: &Path, err: io::Error) -> Self {
        Self::new(format!("cannot read {}", path.display()), err)
    }
}

/// Errors raised while creating or writing the destination document
#[derive(Debug)]
pub struct OutputError {
    pub message: String,
    pub source: io::Error,
}

impl OutputError {
    /// Create a new error with the given message and underlying cause.
    pub fn new(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            message: message.into(),
            source,
        }
    }

    /// Wrap an I/O failure that happened while writing `path`.
    pub fn io(path: &Path, err: io::Error) -> Self {
        Self::new(format!("cannot write {}", path.display()), err)
    }
}

impl fmt::Display for VttCleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VttCleanError::Input(err) => write!(f, "Input error: {}", err),
            VttCleanError::Output(err) => write!(f, "Output error: {}", err),
            VttCleanError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.source)
    }
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.source)
    }
}

impl Error for VttCleanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VttCleanError::Input(err) => Some(err),
            VttCleanError::Output(err) => Some(err),
            VttCleanError::Other(err) => Some(err),
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl Error for OutputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

// Conversion implementations
impl From<io::Error> for VttCleanError {
    fn from(err: io::Error) -> Self {
        VttCleanError::Other(err)
    }
}

impl From<InputError> for VttCleanError {
    fn from(err: InputError) -> Self {
        VttCleanError::Input(err)
    }
}

impl From<OutputError> for VttCleanError {
    fn from(err: OutputError) -> Self {
        VttCleanError::Output(err)
    }
}

// Conversion to io::Error for callers that only deal in I/O results
impl From<VttCleanError> for io::Error {
    fn from(err: VttCleanError) -> Self {
        match err {
            VttCleanError::Other(inner) => inner,
            other => io::Error::other(other),
        }
    }
}

// Type alias for Result with VttCleanError
pub type VttCleanResult<T> = Result<T, VttCleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path_and_cause() {
        let err = InputError::io(
            Path::new("missing.vtt"),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let wrapped = VttCleanError::from(err);
        let text = wrapped.to_string();
        assert!(text.starts_with("Input error: cannot read missing.vtt"));
        assert!(text.ends_with("no such file"));
        assert!(wrapped.source().is_some());
    }

    #[test]
    fn test_into_io_error_keeps_plain_io_kind() {
        let err = VttCleanError::Other(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);

        let err = VttCleanError::Output(OutputError::new(
            "cannot write output stream",
            io::Error::new(io::ErrorKind::WriteZero, "disk full"),
        ));
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::Other);
        assert!(io_err.to_string().contains("disk full"));
    }
}

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("source is not valid UTF-8: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Get advice for this error if available.
    #[must_use]
    pub fn advice(&self) -> Option<&'static str> {
        match self {
            Self::FromUtf8(..) => Some("Wiki sources must be UTF-8 encoded"),
            Self::Io(..) => None,
        }
    }
}

use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A required text argument was empty or only made of whitespaces.
    NullOrEmptyArgument(&'static str),
    /// The input text does not follow the grammar of `kind`.
    InvalidFormat { kind: &'static str, value: String },
    /// The input is well formed but describes an inconsistent value.
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid_format(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidFormat { kind, value: value.into() }
    }

    pub(crate) fn invalid_argument(desc: impl Into<String>) -> Self {
        Self::InvalidArgument(desc.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullOrEmptyArgument(name) => {
                write!(f, "`{name}` cannot be empty or only whitespaces")
            }
            Self::InvalidFormat { kind, value } => write!(f, "'{value}' is an invalid {kind}"),
            Self::InvalidArgument(desc) => write!(f, "invalid argument: {desc}"),
        }
    }
}

impl std::error::Error for Error {}

/// Fail with [`Error::NullOrEmptyArgument`] if `value` is blank.
pub(crate) fn ensure_not_blank(value: &str, name: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        Err(Error::NullOrEmptyArgument(name))
    } else {
        Ok(())
    }
}

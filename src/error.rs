use std::error;
use std::fmt;
use std::result;

/// Convenience `Error` enum for the balanced trees.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An argument that the tree cannot store, such as an absent key.
    InvalidArgument(&'static str),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
        }
    }
}

/// Convenience `Result` type for the balanced trees.
pub type Result<T> = result::Result<T, Error>;

// Unwraps a key handed to `add`, rejecting an absent one.
pub(crate) fn require_key<T>(key: Option<T>) -> Result<T> {
    key.ok_or(Error::InvalidArgument("key is absent"))
}

#[cfg(test)]
mod tests {
    use super::{require_key, Error};

    #[test]
    fn test_require_key() {
        assert_eq!(require_key(Some(1)), Ok(1));
        assert_eq!(
            require_key::<u32>(None),
            Err(Error::InvalidArgument("key is absent")),
        );
    }

    #[test]
    fn test_display() {
        let err = Error::InvalidArgument("key is absent");
        assert_eq!(format!("{}", err), "invalid argument: key is absent");
    }
}

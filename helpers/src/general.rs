use std::error::Error;
use std::fmt;

/// InputValueError is used if a constructor argument or an input parameter does not fulfill the
/// posed requirements, e.g., an empty identifier or a non-positive track width. The details are
/// attached as anyhow context by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}

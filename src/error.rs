use core::fmt::{Display, Formatter};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The operation needs at least one element, but the queue is empty.
    EmptyQueue,
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EmptyQueue => write!(fmt, "the priority queue is empty"),
        }
    }
}

impl std::error::Error for Error {}

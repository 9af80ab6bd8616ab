use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    #[error("Key path is empty")]
    Empty,
    #[error("Key path segment {index} is empty")]
    EmptySegment { index: usize },
}

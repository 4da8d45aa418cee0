use thiserror::Error;

/// Errors from region operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegionError {
    #[error("you must enter 1 or more blocks")]
    HeightTooSmall(i32),
}

/// Errors from parsing a corner out of user text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCornerError {
    #[error("you must enter whole numbers separated by commas")]
    NotAWholeNumber,

    #[error("coordinates must have three values each")]
    WrongComponentCount(usize),
}

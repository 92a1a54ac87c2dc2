use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("failed to write the report")]
    Io(#[from] io::Error),
    #[error("the benchmark input needs at least two elements, got {0}")]
    InputTooSmall(usize),
    #[error("the benchmark input size {0} does not fit in i32")]
    SizeOutOfRange(usize),
}

//! JSON value decode error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ValueError {
    /// 1-based line where the parser stopped.
    pub fn line(&self) -> usize {
        match self {
            ValueError::Parse(e) => e.line(),
        }
    }

    /// 1-based column where the parser stopped. A truncated token may
    /// be reported at the start of the next line.
    pub fn column(&self) -> usize {
        match self {
            ValueError::Parse(e) => e.column(),
        }
    }
}

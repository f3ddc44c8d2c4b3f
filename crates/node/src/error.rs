//! A bunch of wrap errors.
use crate::prelude::chord_ring_core;

/// A wrap `Result` contains custom errors.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors enum mapping global custom errors.
/// The error type can be expressed in decimal, where the high decs represent
/// the error category and the low decs represent the error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
#[repr(u32)]
pub enum Error {
    #[error("Core error: {0}")]
    CoreError(#[from] chord_ring_core::error::Error) = 100,
    #[error("Scenario step {0} failed: {1}")]
    StepFailed(usize, chord_ring_core::error::Error) = 101,
    #[error("Create File Error: {0}")]
    CreateFileError(String) = 300,
    #[error("Open File Error: {0}")]
    OpenFileError(String) = 301,
    #[error("Write report error: {0}")]
    WriteError(#[from] std::io::Error) = 302,
    #[error("Cannot find home directory")]
    HomeDirError = 303,
    #[error("Cannot find parent directory")]
    ParentDirError = 304,
    #[error("Serde json error: {0}")]
    SerdeJsonError(#[from] serde_json::Error) = 400,
    #[error("Serde yaml error: {0}")]
    SerdeYamlError(#[from] serde_yaml::Error) = 401,
}

impl Error {
    fn discriminant(&self) -> u32 {
        // SAFETY: Because `Self` is marked `repr(u32)`, its layout is a `repr(C)` `union`
        // between `repr(C)` structs, each of which has the `u32` discriminant as its first
        // field, so we can read the discriminant without offsetting the pointer.
        // ref: https://doc.rust-lang.org/std/mem/fn.discriminant.html
        unsafe { *<*const _>::from(self).cast::<u32>() }
    }

    pub fn code(&self) -> u32 {
        self.discriminant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = Error::CoreError(chord_ring_core::error::Error::EmptyRegistry);
        assert_eq!(err.code(), 100);
        let err = Error::StepFailed(
            3,
            chord_ring_core::error::Error::NodeNotRegistered(5u64.into()),
        );
        assert_eq!(err.code(), 101);
        assert_eq!(err.to_string(), "Scenario step 3 failed: Node 5 is not registered on the ring");
        assert_eq!(Error::HomeDirError.code(), 303);
    }
}

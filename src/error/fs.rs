//! File system errors

use super::CorvusError;

/// Creates a directory read failed error
pub fn read_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> CorvusError {
    CorvusError::DirectoryReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> CorvusError {
    CorvusError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> CorvusError {
    CorvusError::IoError {
        message: message.into(),
    }
}

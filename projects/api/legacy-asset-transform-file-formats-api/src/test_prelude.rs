//! Test utilities and mock handlers for file format API testing.

extern crate std;

pub use crate::api::*;
pub use crate::catalog::*;
pub use crate::error::*;
pub use crate::handlers::*;
pub use alloc::format;
pub use alloc::string::{String, ToString};
pub use alloc::vec;
pub use alloc::vec::Vec;
pub use rstest::rstest;
use std::sync::{Arc, Mutex};

/// Tracking information for mock handler calls.
#[derive(Debug, Clone, Default)]
pub struct MockHandlerCalls {
    pub can_handle_calls: Vec<Option<String>>,
    pub transform_called: bool,
}

/// A mock file format handler that records the calls made to it.
///
/// Accepted inputs are 'converted' into a copy of themselves.
#[derive(Debug, Clone)]
pub struct MockHandler {
    calls: Arc<Mutex<MockHandlerCalls>>,
    accepts_extension: Option<String>,
    accepts: bool,
}

impl MockHandler {
    /// Create a new mock handler that accepts files with the given extension.
    pub fn new_accepting(extension: &str) -> Self {
        Self {
            calls: Arc::default(),
            accepts_extension: Some(extension.to_string()),
            accepts: true,
        }
    }

    /// Create a new mock handler that rejects all files.
    pub fn new_rejecting() -> Self {
        Self {
            calls: Arc::default(),
            accepts_extension: None,
            accepts: false,
        }
    }

    /// Create a new mock handler accepting any file, with or without extension.
    pub fn new_extensionless_accepting() -> Self {
        Self {
            calls: Arc::default(),
            accepts_extension: None,
            accepts: true,
        }
    }

    /// Get the recorded calls made to this handler.
    pub fn get_calls(&self) -> MockHandlerCalls {
        self.calls.lock().unwrap().clone()
    }
}

impl FileFormatHandler for MockHandler {
    fn transform(&self, input: &[u8]) -> TransformResult<TransformOutput> {
        self.calls.lock().unwrap().transform_called = true;
        Ok(TransformOutput::Converted(input.to_vec()))
    }

    fn output_extension(&self) -> &str {
        "out"
    }
}

impl FileFormatDetection for MockHandler {
    fn can_handle(&self, _input: &[u8], file_extension: Option<&str>) -> bool {
        self.calls
            .lock()
            .unwrap()
            .can_handle_calls
            .push(file_extension.map(|s| s.to_string()));

        if !self.accepts {
            return false;
        }

        match &self.accepts_extension {
            Some(required) => file_extension == Some(required.as_str()),
            None => true,
        }
    }
}

//! Bounded output buffer.

use crate::error::FormatError;

/// Default hard cap of a rendered document, in bytes.
pub const DEFAULT_OUTPUT_CAPACITY: usize = 16 * 1024 * 1024;

/// Default hard cap of a single link definition, in bytes.
pub const DEFAULT_LINK_CAPACITY: usize = 5000;

/// A growable string with a hard capacity.
///
/// A write that would take the buffer past its capacity fails and leaves the
/// buffer unchanged, so a failed render never holds a partial fragment past
/// the bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    buf: String,
    capacity: usize,
}

impl Output {
    pub fn new(capacity: usize) -> Self {
        Output {
            buf: String::new(),
            capacity,
        }
    }

    pub fn write(&mut self, text: &str) -> Result<(), FormatError> {
        if text.len() > self.remaining() {
            return Err(FormatError::CapacityExhausted {
                capacity: self.capacity,
            });
        }
        self.buf.push_str(text);
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

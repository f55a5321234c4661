// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for binary encoding/decoding.
//!
//! Every decode failure is terminal for the call that produced it: no partial
//! structure is ever returned. Callers that only care about the failure class
//! (drop the message, drop the connection, ...) should match on
//! [`CodecError::kind`] rather than on individual variants.

use crate::types::NodeId;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Coarse classification of a [`CodecError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Fewer bytes available than the format requires.
    TruncatedInput,
    /// A field violates its own encoding rule.
    MalformedValue,
    /// Unknown NodeId encoding byte or unknown message type.
    UnrecognizedIdentifier,
    /// DiagnosticInfo nesting beyond the configured bound.
    RecursionLimitExceeded,
    /// The byte sink or source failed; propagated unchanged.
    Sink,
}

/// Errors produced by the codec.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("truncated input at offset {offset}: {needed} more bytes required")]
    TruncatedInput { offset: usize, needed: usize },

    #[error("malformed value at offset {offset}: {reason}")]
    MalformedValue { offset: usize, reason: String },

    #[error("array of {count} elements at offset {offset} exceeds limit {limit}")]
    ArrayTooLong {
        offset: usize,
        count: usize,
        limit: usize,
    },

    #[error("{what} of {len} bytes at offset {offset} exceeds limit {limit}")]
    LengthLimitExceeded {
        what: &'static str,
        offset: usize,
        len: usize,
        limit: usize,
    },

    #[error("unknown NodeId encoding {encoding:#04x} at offset {offset}")]
    UnknownNodeIdEncoding { offset: usize, encoding: u8 },

    #[error("unknown message type {0}")]
    UnknownMessageType(NodeId),

    #[error("expected message type {expected}, found {found}")]
    UnexpectedMessageType { expected: NodeId, found: NodeId },

    #[error("DiagnosticInfo nesting exceeds depth limit {limit}")]
    RecursionLimitExceeded { limit: usize },

    #[error("{what} of {len} bytes cannot be length-prefixed")]
    ValueTooLarge { what: &'static str, len: usize },

    #[error("output buffer full at offset {offset}: {needed} more bytes required")]
    BufferFull { offset: usize, needed: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::TruncatedInput { .. } => ErrorKind::TruncatedInput,
            CodecError::MalformedValue { .. }
            | CodecError::ArrayTooLong { .. }
            | CodecError::LengthLimitExceeded { .. }
            | CodecError::ValueTooLarge { .. } => ErrorKind::MalformedValue,
            CodecError::UnknownNodeIdEncoding { .. }
            | CodecError::UnknownMessageType(_)
            | CodecError::UnexpectedMessageType { .. } => ErrorKind::UnrecognizedIdentifier,
            CodecError::RecursionLimitExceeded { .. } => ErrorKind::RecursionLimitExceeded,
            CodecError::BufferFull { .. } | CodecError::Io(_) => ErrorKind::Sink,
        }
    }

    pub(crate) fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        CodecError::MalformedValue {
            offset,
            reason: reason.into(),
        }
    }
}

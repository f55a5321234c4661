// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Decoder configuration.
//!
//! All bounds the decoder enforces against untrusted input live here. Nothing
//! else in the crate hardcodes a limit.
//!
//! ```ignore
//! use ua_binary::{DecodeLimits, Decoder, Cursor};
//!
//! let limits = DecodeLimits::default().with_max_array_length(4096);
//! let mut cursor = Cursor::new(&bytes);
//! let mut decoder = Decoder::with_limits(&mut cursor, limits);
//! ```

/// Maximum DiagnosticInfo nesting accepted by default.
pub const DEFAULT_MAX_DIAGNOSTIC_DEPTH: usize = 100;

/// Maximum array element count accepted by default.
///
/// Catches allocation bombs from crafted counts while staying far above any
/// legitimate subscription payload.
pub const DEFAULT_MAX_ARRAY_LENGTH: usize = 1_000_000;

/// Maximum string / byte string length accepted by default (16 MiB).
pub const DEFAULT_MAX_STRING_LENGTH: usize = 16 * 1024 * 1024;

/// Bounds applied while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeLimits {
    /// Maximum number of nested InnerDiagnosticInfo levels.
    pub max_diagnostic_depth: usize,
    /// Maximum element count of any array.
    pub max_array_length: usize,
    /// Maximum byte length of a string.
    pub max_string_length: usize,
    /// Maximum byte length of a byte string or extension object body.
    pub max_byte_string_length: usize,
}

impl DecodeLimits {
    /// Tighter bounds for peers that are not trusted.
    pub const fn strict() -> Self {
        Self {
            max_diagnostic_depth: 16,
            max_array_length: 65_536,
            max_string_length: 64 * 1024,
            max_byte_string_length: 1024 * 1024,
        }
    }

    pub const fn with_max_diagnostic_depth(mut self, depth: usize) -> Self {
        self.max_diagnostic_depth = depth;
        self
    }

    pub const fn with_max_array_length(mut self, len: usize) -> Self {
        self.max_array_length = len;
        self
    }

    pub const fn with_max_string_length(mut self, len: usize) -> Self {
        self.max_string_length = len;
        self
    }

    pub const fn with_max_byte_string_length(mut self, len: usize) -> Self {
        self.max_byte_string_length = len;
        self
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_diagnostic_depth: DEFAULT_MAX_DIAGNOSTIC_DEPTH,
            max_array_length: DEFAULT_MAX_ARRAY_LENGTH,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            max_byte_string_length: DEFAULT_MAX_STRING_LENGTH,
        }
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Decoding state threaded through every `BinaryDecode` call.
//!
//! A [`Decoder`] borrows the caller's [`Source`] for the duration of one
//! decode, carries the [`DecodeLimits`] and the current DiagnosticInfo nesting
//! depth. It holds nothing between calls.

use super::source::Source;
use crate::config::DecodeLimits;
use crate::error::{CodecError, Result};

/// Generate little-endian reader methods (eliminates code duplication)
macro_rules! impl_read_le {
    ($name:ident, $type:ty, $size:expr) => {
        pub fn $name(&mut self) -> Result<$type> {
            let mut bytes = [0u8; $size];
            self.source.take_into(&mut bytes)?;
            Ok(<$type>::from_le_bytes(bytes))
        }
    };
}

/// Reader over a [`Source`] with limits and a recursion counter.
pub struct Decoder<'s, S: Source + ?Sized> {
    source: &'s mut S,
    limits: DecodeLimits,
    depth: usize,
}

impl<'s, S: Source + ?Sized> Decoder<'s, S> {
    pub fn new(source: &'s mut S) -> Self {
        Self::with_limits(source, DecodeLimits::default())
    }

    pub fn with_limits(source: &'s mut S, limits: DecodeLimits) -> Self {
        Self {
            source,
            limits,
            depth: 0,
        }
    }

    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    /// Bytes consumed from the source so far.
    pub fn offset(&self) -> usize {
        self.source.offset()
    }

    pub fn remaining(&self) -> Option<usize> {
        self.source.remaining()
    }

    /// Current nesting depth (0 at top level).
    pub fn depth(&self) -> usize {
        self.depth
    }

    impl_read_le!(read_u8, u8, 1);
    impl_read_le!(read_i8, i8, 1);
    impl_read_le!(read_u16, u16, 2);
    impl_read_le!(read_i16, i16, 2);
    impl_read_le!(read_u32, u32, 4);
    impl_read_le!(read_i32, i32, 4);
    impl_read_le!(read_u64, u64, 8);
    impl_read_le!(read_i64, i64, 8);
    impl_read_le!(read_f32, f32, 4);
    impl_read_le!(read_f64, f64, 8);

    /// Any non-zero byte decodes as `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut bytes = [0u8; N];
        self.source.take_into(&mut bytes)?;
        Ok(bytes)
    }

    pub fn read_raw(&mut self, len: usize) -> Result<Vec<u8>> {
        self.source.take_vec(len)
    }

    /// Reads an i32 length prefix.
    ///
    /// Returns `None` for the null marker `-1`. Lengths below `-1` are
    /// malformed; lengths above `limit` are rejected before any byte of the
    /// payload is read.
    pub fn read_length(&mut self, what: &'static str, limit: usize) -> Result<Option<usize>> {
        let offset = self.offset();
        let raw = self.read_i32()?;
        match raw {
            -1 => Ok(None),
            n if n < -1 => {
                log::debug!("[decode] {} length {} at offset {}", what, n, offset);
                Err(CodecError::malformed(
                    offset,
                    format!("{what} length {n} is below -1"),
                ))
            }
            n => {
                let len = n as usize;
                if len > limit {
                    log::debug!(
                        "[decode] {} length {} at offset {} exceeds limit {}",
                        what,
                        len,
                        offset,
                        limit
                    );
                    return Err(CodecError::LengthLimitExceeded {
                        what,
                        offset,
                        len,
                        limit,
                    });
                }
                Ok(Some(len))
            }
        }
    }

    /// Reads an array element count.
    ///
    /// A negative count decodes as an empty array. Every encoded element is
    /// at least one byte long, so a count larger than the bytes left in a
    /// bounded source is reported as truncation up front.
    pub fn read_array_count(&mut self) -> Result<usize> {
        let offset = self.offset();
        let raw = self.read_i32()?;
        if raw < 0 {
            log::trace!("[decode] negative array count {} read as empty", raw);
            return Ok(0);
        }
        let count = raw as usize;
        if count > self.limits.max_array_length {
            log::debug!(
                "[decode] array count {} at offset {} exceeds limit {}",
                count,
                offset,
                self.limits.max_array_length
            );
            return Err(CodecError::ArrayTooLong {
                offset,
                count,
                limit: self.limits.max_array_length,
            });
        }
        if let Some(available) = self.remaining() {
            if count > available {
                return Err(CodecError::TruncatedInput {
                    offset: self.offset(),
                    needed: count - available,
                });
            }
        }
        Ok(count)
    }

    /// Runs `f` one nesting level deeper, failing once the configured depth
    /// limit would be exceeded.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let limit = self.limits.max_diagnostic_depth;
        if self.depth >= limit {
            log::debug!(
                "[decode] nesting depth limit {} reached at offset {}",
                limit,
                self.offset()
            );
            return Err(CodecError::RecursionLimitExceeded { limit });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn malformed(&self, offset: usize, reason: impl Into<String>) -> CodecError {
        let reason = reason.into();
        log::debug!("[decode] malformed value at offset {}: {}", offset, reason);
        CodecError::malformed(offset, reason)
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte sinks the encoder writes into.
//!
//! The encoder only ever calls [`Sink::put`]; the little-endian writers are
//! provided methods built on top of it. Size computation reuses the exact same
//! write path by encoding into a [`SizeCounter`], so the computed length can
//! never drift from what a real sink receives.

use crate::error::{CodecError, Result};
use std::io::Write;

/// Generate little-endian writer methods (provided on the `Sink` trait)
macro_rules! provide_write_le {
    ($name:ident, $type:ty) => {
        fn $name(&mut self, value: $type) -> Result<()> {
            self.put(&value.to_le_bytes())
        }
    };
}

/// Destination for encoded bytes.
pub trait Sink {
    /// Appends `bytes` to the sink.
    fn put(&mut self, bytes: &[u8]) -> Result<()>;

    fn write_u8(&mut self, value: u8) -> Result<()> {
        self.put(&[value])
    }

    /// Writes exactly `0x00` or `0x01`.
    fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(u8::from(value))
    }

    provide_write_le!(write_i8, i8);
    provide_write_le!(write_u16, u16);
    provide_write_le!(write_i16, i16);
    provide_write_le!(write_u32, u32);
    provide_write_le!(write_i32, i32);
    provide_write_le!(write_u64, u64);
    provide_write_le!(write_i64, i64);
    provide_write_le!(write_f32, f32);
    provide_write_le!(write_f64, f64);
}

impl Sink for Vec<u8> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).put(bytes)
    }
}

/// Mutable cursor over a fixed buffer (bounds-checked, no allocation)
pub struct CursorMut<'a> {
    buffer: &'a mut [u8],
    offset: usize,
}

impl<'a> CursorMut<'a> {
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.offset)
    }

    /// Bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buffer[..self.offset]
    }
}

impl Sink for CursorMut<'_> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.remaining() {
            return Err(CodecError::BufferFull {
                offset: self.offset,
                needed: bytes.len() - self.remaining(),
            });
        }
        self.buffer[self.offset..self.offset + bytes.len()].copy_from_slice(bytes);
        self.offset += bytes.len();
        Ok(())
    }
}

/// Sink that discards bytes and only accumulates their count.
#[derive(Debug, Default, Clone, Copy)]
pub struct SizeCounter {
    len: usize,
}

impl SizeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Sink for SizeCounter {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.len += bytes.len();
        Ok(())
    }
}

/// Adapter writing into any [`std::io::Write`].
///
/// Write failures surface as [`CodecError::Io`] with the original error
/// untouched. The adapter never retries.
pub struct IoSink<W: Write> {
    inner: W,
    written: usize,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    /// Total bytes handed to the writer.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for IoSink<W> {
    fn put(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner.write_all(bytes)?;
        self.written += bytes.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_U16: u16 = 0xCDEF;
    const TEST_U32: u32 = 0x1234_5678;
    const TEST_U64: u64 = 0x1122_3344_5566_7788;

    #[test]
    fn test_vec_sink_little_endian() {
        let mut out = Vec::new();
        out.write_u16(TEST_U16).unwrap();
        out.write_u32(TEST_U32).unwrap();
        out.write_u64(TEST_U64).unwrap();
        assert_eq!(
            out,
            [
                0xEF, 0xCD, 0x78, 0x56, 0x34, 0x12, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22,
                0x11
            ]
        );
    }

    #[test]
    fn test_signed_and_float_writers() {
        let mut out = Vec::new();
        out.write_i32(-1).unwrap();
        out.write_i16(-2).unwrap();
        out.write_f64(1_200_000.0).unwrap();
        assert_eq!(&out[..4], &[0xFF; 4]);
        assert_eq!(&out[4..6], &[0xFE, 0xFF]);
        assert_eq!(&out[6..], &[0x00, 0x00, 0x00, 0x00, 0x80, 0x4F, 0x32, 0x41]);
    }

    #[test]
    fn test_bool_writes_zero_or_one() {
        let mut out = Vec::new();
        out.write_bool(true).unwrap();
        out.write_bool(false).unwrap();
        assert_eq!(out, [1, 0]);
    }

    #[test]
    fn test_cursor_mut_overflow_reports_offset() {
        let mut buffer = [0u8; 6];
        let mut cursor = CursorMut::new(&mut buffer);
        cursor.write_u32(TEST_U32).expect("first write fits");
        let err = cursor.write_u32(TEST_U32).expect_err("second write overflows");
        match err {
            CodecError::BufferFull { offset, needed } => {
                assert_eq!(offset, 4);
                assert_eq!(needed, 2);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(cursor.written(), &TEST_U32.to_le_bytes());
    }

    #[test]
    fn test_size_counter_matches_vec() {
        let mut counter = SizeCounter::new();
        let mut out = Vec::new();
        for sink in [&mut counter as &mut dyn Sink, &mut out as &mut dyn Sink] {
            sink.write_u8(1).unwrap();
            sink.write_f64(2.0).unwrap();
            sink.put(b"abc").unwrap();
        }
        assert_eq!(counter.len(), out.len());
        assert_eq!(counter.len(), 12);
    }

    #[test]
    fn test_io_sink_propagates_write_failure() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = IoSink::new(Broken);
        let err = sink.write_u32(1).expect_err("writer is broken");
        match err {
            CodecError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(sink.written(), 0);
    }

    #[test]
    fn test_io_sink_counts_bytes() {
        let mut sink = IoSink::new(Vec::new());
        sink.write_u16(7).unwrap();
        sink.put(&[1, 2, 3]).unwrap();
        assert_eq!(sink.written(), 5);
        assert_eq!(sink.into_inner(), vec![7, 0, 1, 2, 3]);
    }
}

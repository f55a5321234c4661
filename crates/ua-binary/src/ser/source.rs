// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte sources the decoder reads from.

use crate::error::{CodecError, Result};
use std::io::Read;

/// Chunk size used when the source cannot report how many bytes remain.
const READ_CHUNK: usize = 4096;

/// Origin of encoded bytes.
pub trait Source {
    /// Fills `dst` completely or fails with [`CodecError::TruncatedInput`].
    fn take_into(&mut self, dst: &mut [u8]) -> Result<()>;

    /// Bytes consumed so far.
    fn offset(&self) -> usize;

    /// Bytes still available, when the source knows.
    fn remaining(&self) -> Option<usize>;

    /// Reads `len` bytes into a fresh vector.
    ///
    /// Sources without a known length are read in chunks so a crafted length
    /// prefix cannot force a large up-front allocation.
    fn take_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        if let Some(available) = self.remaining() {
            if len > available {
                return Err(CodecError::TruncatedInput {
                    offset: self.offset(),
                    needed: len - available,
                });
            }
        }
        let mut out = Vec::with_capacity(len.min(READ_CHUNK));
        let mut chunk = [0u8; READ_CHUNK];
        let mut left = len;
        while left > 0 {
            let n = left.min(READ_CHUNK);
            self.take_into(&mut chunk[..n])?;
            out.extend_from_slice(&chunk[..n]);
            left -= n;
        }
        Ok(out)
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    fn take_into(&mut self, dst: &mut [u8]) -> Result<()> {
        (**self).take_into(dst)
    }

    fn offset(&self) -> usize {
        (**self).offset()
    }

    fn remaining(&self) -> Option<usize> {
        (**self).remaining()
    }

    fn take_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        (**self).take_vec(len)
    }
}

/// Immutable cursor for reading (bounds-checked, zero-copy)
pub struct Cursor<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    /// Borrows the next `len` bytes without copying.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8]> {
        let available = self.buffer.len() - self.offset;
        if len > available {
            return Err(CodecError::TruncatedInput {
                offset: self.offset,
                needed: len - available,
            });
        }
        let slice = &self.buffer[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }
}

impl Source for Cursor<'_> {
    fn take_into(&mut self, dst: &mut [u8]) -> Result<()> {
        let slice = self.read_slice(dst.len())?;
        dst.copy_from_slice(slice);
        Ok(())
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.buffer.len() - self.offset)
    }

    fn take_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        Ok(self.read_slice(len)?.to_vec())
    }
}

/// Adapter reading from any [`std::io::Read`].
///
/// A short read maps to [`CodecError::TruncatedInput`]; every other I/O error
/// is returned unchanged as [`CodecError::Io`].
pub struct IoSource<R: Read> {
    inner: R,
    offset: usize,
}

impl<R: Read> IoSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Source for IoSource<R> {
    /// Bytes delivered before a short read still count as consumed, so a
    /// truncation reports the stream position where input ran out and the
    /// exact number of bytes missing.
    fn take_into(&mut self, dst: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < dst.len() {
            match self.inner.read(&mut dst[filled..]) {
                Ok(0) => {
                    return Err(CodecError::TruncatedInput {
                        offset: self.offset,
                        needed: dst.len() - filled,
                    });
                }
                Ok(n) => {
                    filled += n;
                    self.offset += n;
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(CodecError::Io(e)),
            }
        }
        Ok(())
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn remaining(&self) -> Option<usize> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_cursor_take_into_advances() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = Cursor::new(&data);
        let mut buf = [0u8; 3];
        cursor.take_into(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.remaining(), Some(2));
        assert!(!cursor.is_eof());
    }

    #[test]
    fn test_cursor_short_read_reports_missing_bytes() {
        let data = [1u8, 2];
        let mut cursor = Cursor::new(&data);
        let mut buf = [0u8; 5];
        match cursor.take_into(&mut buf) {
            Err(CodecError::TruncatedInput { offset, needed }) => {
                assert_eq!(offset, 0);
                assert_eq!(needed, 3);
            }
            other => panic!("unexpected result {other:?}"),
        }
        // Nothing consumed on failure
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_cursor_take_vec_checks_remaining_first() {
        let data = [0u8; 4];
        let mut cursor = Cursor::new(&data);
        let err = cursor.take_vec(1 << 30).expect_err("huge length must fail");
        assert_eq!(err.kind(), ErrorKind::TruncatedInput);
    }

    #[test]
    fn test_io_source_reads_in_chunks() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let mut source = IoSource::new(data.as_slice());
        let out = source.take_vec(data.len()).unwrap();
        assert_eq!(out, data);
        assert_eq!(source.offset(), data.len());
        assert_eq!(source.remaining(), None);
    }

    #[test]
    fn test_io_source_eof_is_truncation() {
        let data = [1u8, 2, 3];
        let mut source = IoSource::new(&data[..]);
        let mut buf = [0u8; 4];
        let err = source.take_into(&mut buf).expect_err("short read");
        assert_eq!(err.kind(), ErrorKind::TruncatedInput);
    }

    #[test]
    fn test_io_source_partial_read_reports_exact_position() {
        let data = [9u8, 8, 7, 6, 5];
        let mut source = IoSource::new(&data[..]);
        let mut head = [0u8; 2];
        source.take_into(&mut head).unwrap();

        let mut buf = [0u8; 8];
        match source.take_into(&mut buf) {
            Err(CodecError::TruncatedInput { offset, needed }) => {
                assert_eq!(offset, 5);
                assert_eq!(needed, 5);
            }
            other => panic!("unexpected result {other:?}"),
        }
        assert_eq!(source.offset(), 5);
        assert_eq!(&buf[..3], &[7, 6, 5]);
    }

    #[test]
    fn test_io_source_retries_interrupted_reads() {
        struct Flaky {
            interrupted: bool,
            data: &'static [u8],
        }
        impl Read for Flaky {
            fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(std::io::Error::new(std::io::ErrorKind::Interrupted, "signal"));
                }
                self.data.read(buf)
            }
        }

        let mut source = IoSource::new(Flaky {
            interrupted: false,
            data: &[1, 2, 3, 4],
        });
        let mut buf = [0u8; 4];
        source.take_into(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3, 4]);
        assert_eq!(source.offset(), 4);
    }

    #[test]
    fn test_mut_ref_source_forwards_take_vec() {
        fn take_through<S: Source>(mut source: S, len: usize) -> Result<Vec<u8>> {
            source.take_vec(len)
        }

        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = Cursor::new(&data);
        assert_eq!(take_through(&mut cursor, 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(cursor.offset(), 3);

        let err = take_through(&mut cursor, 10).expect_err("past the end");
        assert!(matches!(err, CodecError::TruncatedInput { offset: 3, needed: 8 }));
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_io_source_propagates_other_errors() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "reset",
                ))
            }
        }

        let mut source = IoSource::new(Failing);
        let mut buf = [0u8; 1];
        match source.take_into(&mut buf) {
            Err(CodecError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::ConnectionReset),
            other => panic!("unexpected result {other:?}"),
        }
    }
}

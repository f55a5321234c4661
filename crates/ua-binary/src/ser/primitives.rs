// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Primitive and length-prefixed codecs.
//!
//! Fixed-width values are little-endian with no alignment. Strings are an
//! i32 byte length followed by UTF-8 bytes; `-1` is the null string.
//!
//! `String` is the non-null form: decoding a `-1` prefix into it is a
//! malformed value. Fields that may legitimately be null use `Option<String>`.

use super::decoder::Decoder;
use super::sink::Sink;
use super::source::Source;
use super::{BinaryDecode, BinaryEncode};
use crate::error::{CodecError, Result};

/// Generate codec impls for fixed-width primitives
macro_rules! impl_primitive {
    ($type:ty, $write:ident, $read:ident) => {
        impl BinaryEncode for $type {
            fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
                out.$write(*self)
            }
        }

        impl BinaryDecode for $type {
            fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
                input.$read()
            }
        }
    };
}

impl_primitive!(u8, write_u8, read_u8);
impl_primitive!(i8, write_i8, read_i8);
impl_primitive!(u16, write_u16, read_u16);
impl_primitive!(i16, write_i16, read_i16);
impl_primitive!(u32, write_u32, read_u32);
impl_primitive!(i32, write_i32, read_i32);
impl_primitive!(u64, write_u64, read_u64);
impl_primitive!(i64, write_i64, read_i64);
impl_primitive!(f32, write_f32, read_f32);
impl_primitive!(f64, write_f64, read_f64);
impl_primitive!(bool, write_bool, read_bool);

/// Writes an i32 length prefix followed by `bytes`.
pub(crate) fn write_length_prefixed<W: Sink + ?Sized>(
    out: &mut W,
    what: &'static str,
    bytes: &[u8],
) -> Result<()> {
    let len = i32::try_from(bytes.len()).map_err(|_| CodecError::ValueTooLarge {
        what,
        len: bytes.len(),
    })?;
    out.write_i32(len)?;
    out.put(bytes)
}

/// Writes the null length marker.
pub(crate) fn write_null<W: Sink + ?Sized>(out: &mut W) -> Result<()> {
    out.write_i32(-1)
}

/// Reads a nullable UTF-8 string.
pub(crate) fn read_string<R: Source + ?Sized>(
    input: &mut Decoder<'_, R>,
) -> Result<Option<String>> {
    let limit = input.limits().max_string_length;
    let Some(len) = input.read_length("string", limit)? else {
        return Ok(None);
    };
    let offset = input.offset();
    let bytes = input.read_raw(len)?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| input.malformed(offset, format!("invalid UTF-8 in string: {e}")))
}

/// Reads a string where null is not allowed.
pub(crate) fn read_required_string<R: Source + ?Sized>(
    input: &mut Decoder<'_, R>,
) -> Result<String> {
    let offset = input.offset();
    read_string(input)?.ok_or_else(|| input.malformed(offset, "null string where a value is required"))
}

/// Reads a nullable byte string.
pub(crate) fn read_byte_string<R: Source + ?Sized>(
    input: &mut Decoder<'_, R>,
) -> Result<Option<Vec<u8>>> {
    let limit = input.limits().max_byte_string_length;
    match input.read_length("byte string", limit)? {
        Some(len) => input.read_raw(len).map(Some),
        None => Ok(None),
    }
}

impl BinaryEncode for str {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_length_prefixed(out, "string", self.as_bytes())
    }
}

impl BinaryEncode for String {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.as_str().encode(out)
    }
}

impl BinaryDecode for String {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
        read_required_string(input)
    }
}

impl BinaryEncode for Option<String> {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        match self {
            Some(s) => s.encode(out),
            None => write_null(out),
        }
    }
}

impl BinaryDecode for Option<String> {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
        read_string(input)
    }
}

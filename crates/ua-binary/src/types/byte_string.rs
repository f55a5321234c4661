// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Opaque byte string.

use crate::error::Result;
use crate::ser::primitives::{read_byte_string, write_length_prefixed, write_null};
use crate::ser::{BinaryDecode, BinaryEncode, Decoder, Sink, Source};
use std::ops::Deref;

/// Length-prefixed run of uninterpreted bytes.
///
/// Wire-identical to an array of bytes, but a distinct type so that the
/// nullable form (`Option<ByteString>`) can be expressed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteString(pub Vec<u8>);

impl ByteString {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Deref for ByteString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl BinaryEncode for ByteString {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_length_prefixed(out, "byte string", &self.0)
    }
}

impl BinaryDecode for ByteString {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
        let offset = input.offset();
        read_byte_string(input)?
            .map(Self)
            .ok_or_else(|| input.malformed(offset, "null byte string where a value is required"))
    }
}

impl BinaryEncode for Option<ByteString> {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        match self {
            Some(bytes) => bytes.encode(out),
            None => write_null(out),
        }
    }
}

impl BinaryDecode for Option<ByteString> {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
        Ok(read_byte_string(input)?.map(ByteString))
    }
}

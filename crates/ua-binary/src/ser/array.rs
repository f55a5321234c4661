// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Count-prefixed arrays.
//!
//! Layout: i32 element count, then each element's encoding in order. Arrays
//! are never encoded as null: an empty sequence is the four bytes
//! `00 00 00 00`. A negative count on the wire decodes as empty.

use super::decoder::Decoder;
use super::sink::Sink;
use super::source::Source;
use super::{BinaryDecode, BinaryEncode};
use crate::error::{CodecError, Result};

/// Upper bound on capacity reserved before any element has been decoded.
const MAX_PREALLOC: usize = 1024;

impl<T: BinaryEncode> BinaryEncode for [T] {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        let count = i32::try_from(self.len()).map_err(|_| CodecError::ValueTooLarge {
            what: "array",
            len: self.len(),
        })?;
        out.write_i32(count)?;
        for item in self {
            item.encode(out)?;
        }
        Ok(())
    }
}

impl<T: BinaryEncode> BinaryEncode for Vec<T> {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.as_slice().encode(out)
    }
}

impl<T: BinaryDecode> BinaryDecode for Vec<T> {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
        let count = input.read_array_count()?;
        let mut items = Vec::with_capacity(count.min(MAX_PREALLOC));
        for _ in 0..count {
            items.push(T::decode(input)?);
        }
        Ok(items)
    }
}

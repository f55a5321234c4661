// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Binary serialization framework.
//!
//! # Module Organization
//!
//! - [`sink`] - `Sink` contract, fixed-buffer cursor, size counter, `io::Write` adapter
//! - [`source`] - `Source` contract, slice cursor, `io::Read` adapter
//! - [`decoder`] - `Decoder` (limits + recursion depth)
//! - `primitives` - integers, floats, booleans, strings
//! - `array` - count-prefixed sequences
//!
//! # Contract
//!
//! Every wire type implements [`BinaryEncode`] and [`BinaryDecode`]. Composite
//! types encode by calling the codecs of their fields in declaration order and
//! decode in exactly the same order; the format carries no field tags.
//! [`BinaryEncode::encoded_size`] runs the write path into a [`SizeCounter`],
//! so it is exact by construction.

mod array;
pub mod decoder;
pub(crate) mod primitives;
pub mod sink;
pub mod source;

pub use decoder::Decoder;
pub use sink::{CursorMut, IoSink, Sink, SizeCounter};
pub use source::{Cursor, IoSource, Source};

use crate::config::DecodeLimits;
use crate::error::{CodecError, Result};

/// Types that can be written in the binary encoding.
pub trait BinaryEncode {
    /// Writes `self` into `out`, left to right, in a single pass.
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()>;

    /// Exact number of bytes [`encode`](Self::encode) emits.
    fn encoded_size(&self) -> Result<usize> {
        let mut counter = SizeCounter::new();
        self.encode(&mut counter)?;
        Ok(counter.len())
    }
}

/// Types that can be read from the binary encoding.
pub trait BinaryDecode: Sized {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self>;
}

/// Encodes `value` into a freshly allocated, exactly sized vector.
pub fn encode_to_vec<T: BinaryEncode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(value.encoded_size()?);
    value.encode(&mut out)?;
    Ok(out)
}

/// Encodes `value` into `buf`, returning the number of bytes written.
pub fn encode_into_slice<T: BinaryEncode + ?Sized>(value: &T, buf: &mut [u8]) -> Result<usize> {
    let mut cursor = CursorMut::new(buf);
    value.encode(&mut cursor)?;
    Ok(cursor.offset())
}

/// Decodes one value from the front of `bytes`, returning it with the
/// number of bytes consumed. Trailing bytes are left untouched.
pub fn decode_prefix<T: BinaryDecode>(bytes: &[u8]) -> Result<(T, usize)> {
    decode_prefix_with_limits(bytes, DecodeLimits::default())
}

pub fn decode_prefix_with_limits<T: BinaryDecode>(
    bytes: &[u8],
    limits: DecodeLimits,
) -> Result<(T, usize)> {
    let mut cursor = Cursor::new(bytes);
    let mut decoder = Decoder::with_limits(&mut cursor, limits);
    let value = T::decode(&mut decoder)?;
    let consumed = decoder.offset();
    Ok((value, consumed))
}

/// Decodes exactly one value spanning all of `bytes`.
pub fn decode_from_slice<T: BinaryDecode>(bytes: &[u8]) -> Result<T> {
    decode_from_slice_with_limits(bytes, DecodeLimits::default())
}

pub fn decode_from_slice_with_limits<T: BinaryDecode>(
    bytes: &[u8],
    limits: DecodeLimits,
) -> Result<T> {
    let (value, consumed) = decode_prefix_with_limits(bytes, limits)?;
    if consumed != bytes.len() {
        log::debug!(
            "[decode] {} trailing bytes after value ending at offset {}",
            bytes.len() - consumed,
            consumed
        );
        return Err(CodecError::malformed(
            consumed,
            format!("{} trailing bytes", bytes.len() - consumed),
        ));
    }
    Ok(value)
}

/// Implements [`BinaryEncode`] and [`BinaryDecode`] for a plain struct whose
/// wire layout is its fields, in the listed order, with no framing.
///
/// ```ignore
/// pub struct Ack { pub subscription_id: u32, pub sequence_number: u32 }
/// ua_binary::binary_struct!(Ack { subscription_id, sequence_number });
/// ```
#[macro_export]
macro_rules! binary_struct {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::ser::BinaryEncode for $ty {
            fn encode<W: $crate::ser::Sink + ?Sized>(&self, out: &mut W) -> $crate::Result<()> {
                $( $crate::ser::BinaryEncode::encode(&self.$field, out)?; )+
                Ok(())
            }
        }

        impl $crate::ser::BinaryDecode for $ty {
            fn decode<R: $crate::ser::Source + ?Sized>(
                input: &mut $crate::ser::Decoder<'_, R>,
            ) -> $crate::Result<Self> {
                $( let $field = $crate::ser::BinaryDecode::decode(input)?; )+
                Ok(Self { $($field),+ })
            }
        }
    };
}

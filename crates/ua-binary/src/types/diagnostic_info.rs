// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! DiagnosticInfo - bitmask-selected optional fields, recursively nestable.
//!
//! Wire layout: one mask byte, then each present field in bit order:
//!
//! | Bit  | Field               | Encoding                   |
//! |------|---------------------|----------------------------|
//! | 0x01 | symbolic_id         | i32                        |
//! | 0x02 | namespace_uri       | i32                        |
//! | 0x04 | localized_text      | i32                        |
//! | 0x08 | locale              | i32                        |
//! | 0x10 | additional_info     | length-prefixed string     |
//! | 0x20 | inner_status_code   | StatusCode (u32)           |
//! | 0x40 | inner_diagnostic    | DiagnosticInfo (recursive) |
//!
//! The mask is derived from which fields are `Some`, so a set bit always has
//! a value behind it. Decoding rejects mask bits outside the seven above and
//! bounds nesting with [`DecodeLimits::max_diagnostic_depth`]. Encoding refuses
//! chains deeper than [`DEFAULT_MAX_DIAGNOSTIC_DEPTH`], so anything written
//! decodes under default limits.
//!
//! [`DecodeLimits::max_diagnostic_depth`]: crate::config::DecodeLimits::max_diagnostic_depth

use super::StatusCode;
use crate::config::DEFAULT_MAX_DIAGNOSTIC_DEPTH;
use crate::error::{CodecError, Result};
use crate::ser::primitives::read_required_string;
use crate::ser::{BinaryDecode, BinaryEncode, Decoder, Sink, Source};
use std::ops::{BitOr, BitOrAssign};

/// Presence bits of a [`DiagnosticInfo`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DiagnosticInfoMask(u8);

impl DiagnosticInfoMask {
    pub const NONE: Self = Self(0);
    pub const SYMBOLIC_ID: Self = Self(0x01);
    pub const NAMESPACE_URI: Self = Self(0x02);
    pub const LOCALIZED_TEXT: Self = Self(0x04);
    pub const LOCALE: Self = Self(0x08);
    pub const ADDITIONAL_INFO: Self = Self(0x10);
    pub const INNER_STATUS_CODE: Self = Self(0x20);
    pub const INNER_DIAGNOSTIC_INFO: Self = Self(0x40);

    /// Union of every defined bit.
    pub const ALL: Self = Self(0x7F);

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `None` when `bits` sets an undefined flag.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.0 == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for DiagnosticInfoMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DiagnosticInfoMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Vendor-specific diagnostic record.
///
/// Symbolic id, namespace URI, localized text and locale are indices into the
/// enclosing response header's string table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticInfo {
    pub symbolic_id: Option<i32>,
    pub namespace_uri: Option<i32>,
    pub localized_text: Option<i32>,
    pub locale: Option<i32>,
    pub additional_info: Option<String>,
    pub inner_status_code: Option<StatusCode>,
    pub inner_diagnostic_info: Option<Box<DiagnosticInfo>>,
}

impl DiagnosticInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbolic_id(mut self, index: i32) -> Self {
        self.symbolic_id = Some(index);
        self
    }

    pub fn with_namespace_uri(mut self, index: i32) -> Self {
        self.namespace_uri = Some(index);
        self
    }

    pub fn with_localized_text(mut self, index: i32) -> Self {
        self.localized_text = Some(index);
        self
    }

    pub fn with_locale(mut self, index: i32) -> Self {
        self.locale = Some(index);
        self
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }

    pub fn with_inner_status_code(mut self, status: StatusCode) -> Self {
        self.inner_status_code = Some(status);
        self
    }

    pub fn with_inner(mut self, inner: DiagnosticInfo) -> Self {
        self.inner_diagnostic_info = Some(Box::new(inner));
        self
    }

    /// Mask byte emitted on the wire.
    pub fn encoding_mask(&self) -> DiagnosticInfoMask {
        let mut mask = DiagnosticInfoMask::NONE;
        let flags = [
            (self.symbolic_id.is_some(), DiagnosticInfoMask::SYMBOLIC_ID),
            (self.namespace_uri.is_some(), DiagnosticInfoMask::NAMESPACE_URI),
            (self.localized_text.is_some(), DiagnosticInfoMask::LOCALIZED_TEXT),
            (self.locale.is_some(), DiagnosticInfoMask::LOCALE),
            (self.additional_info.is_some(), DiagnosticInfoMask::ADDITIONAL_INFO),
            (self.inner_status_code.is_some(), DiagnosticInfoMask::INNER_STATUS_CODE),
            (
                self.inner_diagnostic_info.is_some(),
                DiagnosticInfoMask::INNER_DIAGNOSTIC_INFO,
            ),
        ];
        for (present, bit) in flags {
            if present {
                mask |= bit;
            }
        }
        mask
    }

    /// Number of records in the chain, counting `self`.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Some(inner) = current.inner_diagnostic_info.as_deref() {
            depth += 1;
            current = inner;
        }
        depth
    }

    pub fn is_empty(&self) -> bool {
        self.encoding_mask().is_empty()
    }
}

impl DiagnosticInfo {
    /// Writes this record as nesting level `level` (1 for the outermost).
    fn encode_at<W: Sink + ?Sized>(&self, out: &mut W, level: usize) -> Result<()> {
        if level > DEFAULT_MAX_DIAGNOSTIC_DEPTH {
            log::debug!(
                "[encode] DiagnosticInfo nesting exceeds depth limit {}",
                DEFAULT_MAX_DIAGNOSTIC_DEPTH
            );
            return Err(CodecError::RecursionLimitExceeded {
                limit: DEFAULT_MAX_DIAGNOSTIC_DEPTH,
            });
        }
        out.write_u8(self.encoding_mask().bits())?;
        for index in [
            self.symbolic_id,
            self.namespace_uri,
            self.localized_text,
            self.locale,
        ]
        .into_iter()
        .flatten()
        {
            out.write_i32(index)?;
        }
        if let Some(info) = &self.additional_info {
            info.encode(out)?;
        }
        if let Some(status) = self.inner_status_code {
            status.encode(out)?;
        }
        if let Some(inner) = &self.inner_diagnostic_info {
            inner.encode_at(out, level + 1)?;
        }
        Ok(())
    }
}

impl BinaryEncode for DiagnosticInfo {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.encode_at(out, 1)
    }
}

impl BinaryDecode for DiagnosticInfo {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
        input.nested(|input| {
            let offset = input.offset();
            let raw = input.read_u8()?;
            let mask = DiagnosticInfoMask::from_bits(raw).ok_or_else(|| {
                input.malformed(offset, format!("undefined DiagnosticInfo mask bits in {raw:#04x}"))
            })?;

            let mut read_index = |bit: DiagnosticInfoMask| -> Result<Option<i32>> {
                if mask.contains(bit) {
                    input.read_i32().map(Some)
                } else {
                    Ok(None)
                }
            };
            let symbolic_id = read_index(DiagnosticInfoMask::SYMBOLIC_ID)?;
            let namespace_uri = read_index(DiagnosticInfoMask::NAMESPACE_URI)?;
            let localized_text = read_index(DiagnosticInfoMask::LOCALIZED_TEXT)?;
            let locale = read_index(DiagnosticInfoMask::LOCALE)?;

            let additional_info = if mask.contains(DiagnosticInfoMask::ADDITIONAL_INFO) {
                Some(read_required_string(input)?)
            } else {
                None
            };
            let inner_status_code = if mask.contains(DiagnosticInfoMask::INNER_STATUS_CODE) {
                Some(StatusCode::decode(input)?)
            } else {
                None
            };
            let inner_diagnostic_info = if mask.contains(DiagnosticInfoMask::INNER_DIAGNOSTIC_INFO) {
                Some(Box::new(DiagnosticInfo::decode(input)?))
            } else {
                None
            };

            Ok(Self {
                symbolic_id,
                namespace_uri,
                localized_text,
                locale,
                additional_info,
                inner_status_code,
                inner_diagnostic_info,
            })
        })
    }
}

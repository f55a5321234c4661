// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! 32-bit operation status.
//!
//! The two most significant bits carry the severity (00 good, 01 uncertain,
//! 10 bad); the remaining bits identify the specific code.

use crate::error::Result;
use crate::ser::{BinaryDecode, BinaryEncode, Decoder, Sink, Source};
use std::fmt;

const SEVERITY_MASK: u32 = 0xC000_0000;
const SEVERITY_UNCERTAIN: u32 = 0x4000_0000;
const SEVERITY_BAD: u32 = 0x8000_0000;

/// Severity class of a [`StatusCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Good,
    Uncertain,
    Bad,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(pub u32);

impl StatusCode {
    pub const GOOD: Self = Self(0);
    pub const GOOD_SUBSCRIPTION_TRANSFERRED: Self = Self(0x002D_0000);
    pub const BAD_UNEXPECTED_ERROR: Self = Self(0x8001_0000);
    pub const BAD_TIMEOUT: Self = Self(0x800A_0000);
    pub const BAD_SUBSCRIPTION_ID_INVALID: Self = Self(0x8028_0000);
    pub const BAD_TOO_MANY_PUBLISH_REQUESTS: Self = Self(0x8078_0000);
    pub const BAD_NO_SUBSCRIPTION: Self = Self(0x8079_0000);
    pub const BAD_SEQUENCE_NUMBER_UNKNOWN: Self = Self(0x807A_0000);
    pub const BAD_MESSAGE_NOT_AVAILABLE: Self = Self(0x807B_0000);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn severity(self) -> Severity {
        match self.0 & SEVERITY_MASK {
            0 => Severity::Good,
            SEVERITY_UNCERTAIN => Severity::Uncertain,
            // 11 is reserved and treated as bad
            _ => Severity::Bad,
        }
    }

    pub const fn is_good(self) -> bool {
        matches!(self.severity(), Severity::Good)
    }

    pub const fn is_uncertain(self) -> bool {
        matches!(self.severity(), Severity::Uncertain)
    }

    pub const fn is_bad(self) -> bool {
        self.0 & SEVERITY_BAD != 0
    }
}

impl From<u32> for StatusCode {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}

impl BinaryEncode for StatusCode {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        out.write_u32(self.0)
    }
}

impl BinaryDecode for StatusCode {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
        input.read_u32().map(Self)
    }
}

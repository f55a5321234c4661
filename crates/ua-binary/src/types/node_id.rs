// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! NodeId - tagged identifier naming message types and nodes.
//!
//! A leading encoding byte selects the physical layout of the rest:
//!
//! | Byte | Variant  | Layout after the byte                    |
//! |------|----------|------------------------------------------|
//! | 0    | TwoByte  | `u8 id`                                  |
//! | 1    | FourByte | `u8 namespace`, `u16 id`                 |
//! | 2    | String   | `u16 namespace`, length-prefixed string  |
//! | 3    | Guid     | `u16 namespace`, 16-byte GUID            |
//! | 4    | Opaque   | `u16 namespace`, length-prefixed bytes   |
//!
//! Encoding always emits the byte of the value's own variant; no variant is
//! ever narrowed into a more compact one.

use super::ByteString;
use crate::error::{CodecError, Result};
use crate::ser::primitives::read_required_string;
use crate::ser::{BinaryDecode, BinaryEncode, Decoder, Sink, Source};
use std::fmt;
use uuid::Uuid;

/// Wire discriminant of a [`NodeId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeIdEncoding {
    TwoByte = 0,
    FourByte = 1,
    String = 2,
    Guid = 3,
    Opaque = 4,
}

impl NodeIdEncoding {
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::TwoByte),
            1 => Some(Self::FourByte),
            2 => Some(Self::String),
            3 => Some(Self::Guid),
            4 => Some(Self::Opaque),
            _ => None,
        }
    }
}

/// Polymorphic identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeId {
    TwoByte { id: u8 },
    FourByte { namespace: u8, id: u16 },
    String { namespace: u16, text: String },
    Guid { namespace: u16, guid: Uuid },
    Opaque { namespace: u16, bytes: ByteString },
}

impl NodeId {
    /// The null identifier (`TwoByte` with id 0), two bytes on the wire.
    pub const NULL: Self = Self::TwoByte { id: 0 };

    pub const fn null() -> Self {
        Self::NULL
    }

    pub const fn two_byte(id: u8) -> Self {
        Self::TwoByte { id }
    }

    pub const fn four_byte(namespace: u8, id: u16) -> Self {
        Self::FourByte { namespace, id }
    }

    pub fn string(namespace: u16, text: impl Into<String>) -> Self {
        Self::String {
            namespace,
            text: text.into(),
        }
    }

    pub const fn guid(namespace: u16, guid: Uuid) -> Self {
        Self::Guid { namespace, guid }
    }

    pub fn opaque(namespace: u16, bytes: impl Into<Vec<u8>>) -> Self {
        Self::Opaque {
            namespace,
            bytes: ByteString::new(bytes),
        }
    }

    /// Null in namespace 0 with a zero numeric id, in either numeric form.
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Self::TwoByte { id: 0 } | Self::FourByte { namespace: 0, id: 0 }
        )
    }

    pub const fn encoding(&self) -> NodeIdEncoding {
        match self {
            Self::TwoByte { .. } => NodeIdEncoding::TwoByte,
            Self::FourByte { .. } => NodeIdEncoding::FourByte,
            Self::String { .. } => NodeIdEncoding::String,
            Self::Guid { .. } => NodeIdEncoding::Guid,
            Self::Opaque { .. } => NodeIdEncoding::Opaque,
        }
    }

    pub const fn namespace(&self) -> u16 {
        match self {
            Self::TwoByte { .. } => 0,
            Self::FourByte { namespace, .. } => *namespace as u16,
            Self::String { namespace, .. }
            | Self::Guid { namespace, .. }
            | Self::Opaque { namespace, .. } => *namespace,
        }
    }

    /// Numeric id for the two numeric variants.
    pub const fn numeric(&self) -> Option<u32> {
        match self {
            Self::TwoByte { id } => Some(*id as u32),
            Self::FourByte { id, .. } => Some(*id as u32),
            _ => None,
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::NULL
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ns={};", self.namespace())?;
        match self {
            Self::TwoByte { id } => write!(f, "i={id}"),
            Self::FourByte { id, .. } => write!(f, "i={id}"),
            Self::String { text, .. } => write!(f, "s={text}"),
            Self::Guid { guid, .. } => write!(f, "g={guid}"),
            Self::Opaque { bytes, .. } => {
                f.write_str("b=")?;
                for byte in bytes.iter() {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}

impl BinaryEncode for NodeId {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        out.write_u8(self.encoding().to_u8())?;
        match self {
            Self::TwoByte { id } => out.write_u8(*id),
            Self::FourByte { namespace, id } => {
                out.write_u8(*namespace)?;
                out.write_u16(*id)
            }
            Self::String { namespace, text } => {
                out.write_u16(*namespace)?;
                text.encode(out)
            }
            Self::Guid { namespace, guid } => {
                out.write_u16(*namespace)?;
                out.put(&guid.to_bytes_le())
            }
            Self::Opaque { namespace, bytes } => {
                out.write_u16(*namespace)?;
                bytes.encode(out)
            }
        }
    }
}

impl BinaryDecode for NodeId {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
        let offset = input.offset();
        let raw = input.read_u8()?;
        let Some(encoding) = NodeIdEncoding::from_u8(raw) else {
            log::debug!(
                "[decode] unknown NodeId encoding {:#04x} at offset {}",
                raw,
                offset
            );
            return Err(CodecError::UnknownNodeIdEncoding {
                offset,
                encoding: raw,
            });
        };

        let id = match encoding {
            NodeIdEncoding::TwoByte => Self::TwoByte {
                id: input.read_u8()?,
            },
            NodeIdEncoding::FourByte => Self::FourByte {
                namespace: input.read_u8()?,
                id: input.read_u16()?,
            },
            NodeIdEncoding::String => Self::String {
                namespace: input.read_u16()?,
                text: read_required_string(input)?,
            },
            NodeIdEncoding::Guid => Self::Guid {
                namespace: input.read_u16()?,
                guid: Uuid::from_bytes_le(input.read_array::<16>()?),
            },
            NodeIdEncoding::Opaque => Self::Opaque {
                namespace: input.read_u16()?,
                bytes: ByteString::decode(input)?,
            },
        };
        Ok(id)
    }
}

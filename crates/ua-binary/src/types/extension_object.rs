// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! ExtensionObject - type-tagged envelope for pluggable payloads.
//!
//! Layout: `NodeId type_id | u8 body_encoding | body`, where the body is
//! absent (0), a length-prefixed binary blob (1) or a length-prefixed XML
//! string (2). The empty envelope is three bytes: `00 00 00`.
//!
//! The codec never interprets the body. Callers that know the concrete type
//! go through [`ExtensionPayload`].

use super::{ByteString, NodeId};
use crate::error::{CodecError, Result};
use crate::ser::primitives::read_required_string;
use crate::ser::{
    decode_from_slice, encode_to_vec, BinaryDecode, BinaryEncode, Decoder, Sink, Source,
};

const BODY_NONE: u8 = 0x00;
const BODY_BINARY: u8 = 0x01;
const BODY_XML: u8 = 0x02;

/// Payload carried by an [`ExtensionObject`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExtensionBody {
    #[default]
    None,
    Binary(ByteString),
    Xml(String),
}

impl ExtensionBody {
    pub const fn encoding_byte(&self) -> u8 {
        match self {
            Self::None => BODY_NONE,
            Self::Binary(_) => BODY_BINARY,
            Self::Xml(_) => BODY_XML,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionObject {
    pub type_id: NodeId,
    pub body: ExtensionBody,
}

/// A structure that travels inside an [`ExtensionObject`] binary body.
pub trait ExtensionPayload: BinaryEncode + BinaryDecode {
    /// Identifier of the payload's binary encoding.
    fn type_id() -> NodeId;
}

impl ExtensionObject {
    /// The empty envelope: null type id, no body.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn binary(type_id: NodeId, body: impl Into<Vec<u8>>) -> Self {
        Self {
            type_id,
            body: ExtensionBody::Binary(ByteString::new(body)),
        }
    }

    pub fn xml(type_id: NodeId, body: impl Into<String>) -> Self {
        Self {
            type_id,
            body: ExtensionBody::Xml(body.into()),
        }
    }

    pub fn is_null(&self) -> bool {
        self.type_id.is_null() && self.body == ExtensionBody::None
    }

    /// Wraps a typed payload as a binary body.
    pub fn from_payload<P: ExtensionPayload>(payload: &P) -> Result<Self> {
        Ok(Self {
            type_id: P::type_id(),
            body: ExtensionBody::Binary(ByteString(encode_to_vec(payload)?)),
        })
    }

    /// Decodes the body as `P`.
    ///
    /// Returns `Ok(None)` when the envelope is tagged with another type.
    /// The body must span exactly one `P`.
    pub fn decode_payload<P: ExtensionPayload>(&self) -> Result<Option<P>> {
        if self.type_id != P::type_id() {
            return Ok(None);
        }
        match &self.body {
            ExtensionBody::Binary(bytes) => decode_from_slice(bytes).map(Some),
            other => Err(CodecError::malformed(
                0,
                format!(
                    "payload {} carried with body encoding {:#04x}",
                    self.type_id,
                    other.encoding_byte()
                ),
            )),
        }
    }
}

impl BinaryEncode for ExtensionObject {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        self.type_id.encode(out)?;
        out.write_u8(self.body.encoding_byte())?;
        match &self.body {
            ExtensionBody::None => Ok(()),
            ExtensionBody::Binary(bytes) => bytes.encode(out),
            ExtensionBody::Xml(xml) => xml.encode(out),
        }
    }
}

impl BinaryDecode for ExtensionObject {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
        let type_id = NodeId::decode(input)?;
        let offset = input.offset();
        let body = match input.read_u8()? {
            BODY_NONE => ExtensionBody::None,
            BODY_BINARY => ExtensionBody::Binary(ByteString::decode(input)?),
            BODY_XML => ExtensionBody::Xml(read_required_string(input)?),
            other => {
                return Err(input.malformed(
                    offset,
                    format!("unknown ExtensionObject body encoding {other:#04x}"),
                ))
            }
        };
        Ok(Self { type_id, body })
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Service messages and the message-type catalog.
//!
//! Every message is an envelope: a FourByte [`NodeId`] in namespace 0 naming
//! the message kind, the request or response header, then the body. The
//! catalog below is the only place numeric ids appear; envelopes carry no id
//! field of their own, so an envelope can never disagree with its tag.
//!
//! # Module Organization
//!
//! - [`subscription`] - create, modify, set-publishing-mode, delete
//! - [`publish`] - publish, acknowledgements, notification messages, republish
//! - [`notifications`] - typed notification payloads

pub mod notifications;
pub mod publish;
pub mod subscription;

pub use notifications::StatusChangeNotification;
pub use publish::{
    NotificationMessage, PublishParameters, PublishRequest, PublishResponse, PublishResult,
    RepublishParameters, RepublishRequest, RepublishResponse, SubscriptionAcknowledgement,
};
pub use subscription::{
    CreateSubscriptionRequest, CreateSubscriptionResponse, DeleteSubscriptionsRequest,
    DeleteSubscriptionsResponse, ModifySubscriptionParameters, ModifySubscriptionRequest,
    ModifySubscriptionResponse, ModifySubscriptionResult, SetPublishingModeParameters,
    SetPublishingModeRequest, SetPublishingModeResponse, SubscriptionData,
    SubscriptionParameters,
};

use crate::error::{CodecError, Result};
use crate::ser::{BinaryDecode, BinaryEncode, Decoder, Sink, Source};
use crate::types::{DiagnosticInfo, NodeId, StatusCode};
use std::fmt;

/// A message envelope with a fixed catalog entry.
pub trait ServiceMessage: BinaryEncode + BinaryDecode {
    const KIND: MessageKind;

    /// Decodes the header and body; the type id has already been consumed.
    fn decode_body<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self>;

    fn type_id() -> NodeId {
        Self::KIND.type_id()
    }
}

/// Reads a type id and checks it names `kind`.
pub fn expect_type_id<R: Source + ?Sized>(
    input: &mut Decoder<'_, R>,
    kind: MessageKind,
) -> Result<()> {
    let offset = input.offset();
    let found = NodeId::decode(input)?;
    let expected = kind.type_id();
    if found != expected {
        log::debug!(
            "[decode] expected {} ({}) at offset {}, found {}",
            kind,
            expected,
            offset,
            found
        );
        return Err(CodecError::UnexpectedMessageType { expected, found });
    }
    Ok(())
}

/// Implements [`ServiceMessage`], [`BinaryEncode`] and [`BinaryDecode`] for
/// an envelope whose fields follow the type id in the listed order.
macro_rules! service_message {
    ($ty:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::services::ServiceMessage for $ty {
            const KIND: $crate::services::MessageKind = $crate::services::MessageKind::$ty;

            fn decode_body<R: $crate::ser::Source + ?Sized>(
                input: &mut $crate::ser::Decoder<'_, R>,
            ) -> $crate::Result<Self> {
                $( let $field = $crate::ser::BinaryDecode::decode(input)?; )+
                Ok(Self { $($field),+ })
            }
        }

        impl $crate::ser::BinaryEncode for $ty {
            fn encode<W: $crate::ser::Sink + ?Sized>(&self, out: &mut W) -> $crate::Result<()> {
                use $crate::services::ServiceMessage;
                log::trace!("[encode] {}", Self::KIND);
                $crate::ser::BinaryEncode::encode(&Self::type_id(), out)?;
                $( $crate::ser::BinaryEncode::encode(&self.$field, out)?; )+
                Ok(())
            }
        }

        impl $crate::ser::BinaryDecode for $ty {
            fn decode<R: $crate::ser::Source + ?Sized>(
                input: &mut $crate::ser::Decoder<'_, R>,
            ) -> $crate::Result<Self> {
                use $crate::services::ServiceMessage;
                $crate::services::expect_type_id(input, Self::KIND)?;
                log::trace!("[decode] {}", Self::KIND);
                Self::decode_body(input)
            }
        }
    };
}
pub(crate) use service_message;

/// Builds the catalog and the [`Message`] dispatch enum from one table of
/// `Kind = binary encoding id` entries.
macro_rules! message_catalog {
    ($($kind:ident = $id:literal),+ $(,)?) => {
        /// Message kinds of the subscription and publish service sets.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKind {
            $($kind),+
        }

        impl MessageKind {
            /// Every catalog entry, in table order.
            pub const ALL: &'static [MessageKind] = &[$(MessageKind::$kind),+];

            /// Numeric id of the message's binary encoding in namespace 0.
            pub const fn binary_encoding_id(self) -> u16 {
                match self {
                    $(MessageKind::$kind => $id),+
                }
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(MessageKind::$kind => stringify!($kind)),+
                }
            }
        }

        /// Any catalog message, decoded by dispatching on its type id.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Message {
            $($kind($kind)),+
        }

        impl Message {
            pub fn kind(&self) -> MessageKind {
                match self {
                    $(Message::$kind(_) => MessageKind::$kind),+
                }
            }
        }

        impl BinaryEncode for Message {
            fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
                match self {
                    $(Message::$kind(message) => message.encode(out)),+
                }
            }
        }

        impl BinaryDecode for Message {
            fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
                let offset = input.offset();
                let type_id = NodeId::decode(input)?;
                let Some(kind) = MessageKind::from_type_id(&type_id) else {
                    log::debug!("[decode] unknown message type {} at offset {}", type_id, offset);
                    return Err(CodecError::UnknownMessageType(type_id));
                };
                log::trace!("[decode] {}", kind);
                match kind {
                    $(MessageKind::$kind => $kind::decode_body(input).map(Message::$kind)),+
                }
            }
        }

        $(
            impl From<$kind> for Message {
                fn from(message: $kind) -> Self {
                    Message::$kind(message)
                }
            }
        )+
    };
}

message_catalog! {
    CreateSubscriptionRequest = 0x0313,
    CreateSubscriptionResponse = 0x0316,
    ModifySubscriptionRequest = 0x0319,
    ModifySubscriptionResponse = 0x031C,
    SetPublishingModeRequest = 0x031F,
    SetPublishingModeResponse = 0x0322,
    PublishRequest = 0x033A,
    PublishResponse = 0x033D,
    RepublishRequest = 0x0340,
    RepublishResponse = 0x0343,
    DeleteSubscriptionsRequest = 0x034F,
    DeleteSubscriptionsResponse = 0x0352,
}

impl MessageKind {
    /// Tag written in front of the message: FourByte, namespace 0.
    pub const fn type_id(self) -> NodeId {
        NodeId::four_byte(0, self.binary_encoding_id())
    }

    /// Looks up the kind named by a FourByte namespace-0 id. Other encodings
    /// of the same number are not catalog tags.
    pub fn from_type_id(id: &NodeId) -> Option<Self> {
        match id {
            NodeId::FourByte { namespace: 0, id } => Self::from_binary_encoding_id(*id),
            _ => None,
        }
    }

    pub fn from_binary_encoding_id(id: u16) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.binary_encoding_id() == id)
    }

    pub fn is_request(self) -> bool {
        self.name().ends_with("Request")
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-operation status array with its diagnostics.
///
/// Layout: `Array<StatusCode> | Array<DiagnosticInfo>`. The diagnostics array
/// is either empty or aligned with the results, but the codec does not
/// enforce the alignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationResults {
    pub results: Vec<StatusCode>,
    pub diagnostic_infos: Vec<DiagnosticInfo>,
}

crate::binary_struct!(OperationResults {
    results,
    diagnostic_infos,
});

impl OperationResults {
    pub fn all_good(&self) -> bool {
        self.results.iter().all(|status| status.is_good())
    }
}

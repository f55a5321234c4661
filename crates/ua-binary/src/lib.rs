// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # ua-binary - OPC UA binary encoding for the subscription services
//!
//! Converts subscription lifecycle requests, publish/acknowledge cycles,
//! notification payloads and diagnostics into the OPC UA binary transfer
//! syntax and back, with exact round-trip fidelity.
//!
//! ## Quick Start
//!
//! ```rust
//! use ua_binary::services::{CreateSubscriptionRequest, Message, SubscriptionParameters};
//! use ua_binary::{decode_from_slice, encode_to_vec, Result};
//!
//! fn main() -> Result<()> {
//!     let request = CreateSubscriptionRequest {
//!         parameters: SubscriptionParameters {
//!             requested_publishing_interval: 1000.0,
//!             requested_lifetime_count: 60,
//!             requested_max_keep_alive_count: 20,
//!             publishing_enabled: true,
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!
//!     let bytes = encode_to_vec(&request)?;
//!     let message: Message = decode_from_slice(&bytes)?;
//!     assert_eq!(message, Message::from(request));
//!     Ok(())
//! }
//! ```
//!
//! ## Wire Format
//!
//! ```text
//! +------------------+----------------------------+------------------------+
//! | NodeId (type id) | RequestHeader /            | message body           |
//! | FourByte, ns 0   | ResponseHeader             | (parameters / result)  |
//! +------------------+----------------------------+------------------------+
//! ```
//!
//! All integers are little-endian, fields follow declaration order with no
//! padding, strings and byte strings carry an i32 length (-1 = null), and
//! arrays carry an i32 element count.
//!
//! ## Modules Overview
//!
//! - [`ser`] - `Sink`/`Source` contracts, `Decoder`, codec traits
//! - [`types`] - NodeId, DiagnosticInfo, ExtensionObject, headers
//! - [`services`] - message catalog and subscription/publish messages
//! - [`config`] - decode limits
//! - [`error`] - error type and classification
//!
//! Decoding untrusted input is bounded by [`DecodeLimits`]: array and string
//! lengths are checked before allocation and DiagnosticInfo nesting is
//! capped (100 levels by default).

pub mod config;
pub mod error;
pub mod ser;
pub mod services;
pub mod types;

pub use config::DecodeLimits;
pub use error::{CodecError, ErrorKind, Result};
pub use ser::{
    decode_from_slice, decode_from_slice_with_limits, decode_prefix, decode_prefix_with_limits,
    encode_into_slice, encode_to_vec, BinaryDecode, BinaryEncode, Cursor, CursorMut, Decoder, IoSink,
    IoSource, Sink, SizeCounter, Source,
};
pub use services::{Message, MessageKind, ServiceMessage};
pub use types::{
    ByteString, DateTime, DiagnosticInfo, ExtensionObject, NodeId, RequestHeader, ResponseHeader,
    StatusCode,
};

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fuzz target for binary decoding
//!
//! Feeds arbitrary bytes to every top-level decoder, with default and strict
//! limits and through the io::Read adapter. None of these operations should
//! panic on any input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ua_binary::services::{NotificationMessage, PublishParameters, PublishResult};
use ua_binary::{
    decode_from_slice, decode_from_slice_with_limits, decode_prefix, BinaryDecode, DecodeLimits,
    Decoder, DiagnosticInfo, ExtensionObject, IoSource, Message, NodeId, RequestHeader,
    ResponseHeader,
};

fuzz_target!(|data: &[u8]| {
    // ----------------------------------------------------------------
    // 1. Building blocks - must not panic
    // ----------------------------------------------------------------
    let _ = decode_prefix::<NodeId>(data);
    let _ = decode_prefix::<DiagnosticInfo>(data);
    let _ = decode_prefix::<ExtensionObject>(data);
    let _ = decode_prefix::<RequestHeader>(data);
    let _ = decode_prefix::<ResponseHeader>(data);

    // ----------------------------------------------------------------
    // 2. Message bodies - must not panic
    // ----------------------------------------------------------------
    let _ = decode_from_slice::<PublishParameters>(data);
    let _ = decode_from_slice::<NotificationMessage>(data);
    let _ = decode_from_slice::<PublishResult>(data);

    // ----------------------------------------------------------------
    // 3. Full message dispatch - must not panic
    // ----------------------------------------------------------------
    let _ = decode_from_slice::<Message>(data);
    let _ = decode_from_slice_with_limits::<Message>(data, DecodeLimits::strict());

    // Same input through a stream with no known length
    let mut source = IoSource::new(data);
    let mut decoder = Decoder::new(&mut source);
    let _ = Message::decode(&mut decoder);
});

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fuzz target for decode/encode stability
//!
//! Any message that decodes must re-encode to bytes that decode and encode
//! again to the same bytes, with `encoded_size` matching the encoded length.
//! Bytes are compared rather than values so NaN intervals stay comparable.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ua_binary::{decode_from_slice, decode_prefix, encode_to_vec, BinaryEncode, Message};

fuzz_target!(|data: &[u8]| {
    let Ok((message, _consumed)) = decode_prefix::<Message>(data) else {
        return;
    };

    let bytes = encode_to_vec(&message).expect("decoded message must encode");
    assert_eq!(message.encoded_size().ok(), Some(bytes.len()));

    let again: Message = decode_from_slice(&bytes).expect("re-encoded message must decode");
    assert_eq!(encode_to_vec(&again).expect("stable encoding"), bytes);
});

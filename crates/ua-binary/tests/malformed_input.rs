// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::cast_possible_truncation)] // Test data conversions

//! Rejection paths: every malformed input yields exactly one classified
//! error and never a partial value or a panic.

use std::io::{self, Write};
use ua_binary::services::{
    CreateSubscriptionRequest, PublishParameters, PublishResponse, SubscriptionParameters,
};
use ua_binary::{
    decode_from_slice, decode_from_slice_with_limits, decode_prefix, encode_into_slice,
    encode_to_vec, BinaryDecode, BinaryEncode, CodecError, DecodeLimits, Decoder, DiagnosticInfo,
    ErrorKind, IoSink, IoSource, Message, NodeId,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Chain of `levels` DiagnosticInfo records, innermost carrying a symbolic id.
fn diagnostic_chain_bytes(levels: usize) -> Vec<u8> {
    let mut bytes = vec![0x40; levels - 1];
    bytes.extend_from_slice(&[0x01, 0x2A, 0x00, 0x00, 0x00]);
    bytes
}

fn kind_of<T: BinaryDecode + std::fmt::Debug>(bytes: &[u8]) -> ErrorKind {
    decode_from_slice::<T>(bytes)
        .expect_err("input must be rejected")
        .kind()
}

// ============================================================================
// Truncation
// ============================================================================

#[test]
fn test_every_prefix_of_a_message_is_truncated() {
    init_logging();
    let request = CreateSubscriptionRequest {
        parameters: SubscriptionParameters {
            requested_publishing_interval: 250.0,
            publishing_enabled: true,
            priority: 9,
            ..Default::default()
        },
        ..Default::default()
    };
    let bytes = encode_to_vec(&request).unwrap();
    for len in 0..bytes.len() {
        assert_eq!(
            kind_of::<CreateSubscriptionRequest>(&bytes[..len]),
            ErrorKind::TruncatedInput,
            "prefix of {len} bytes"
        );
    }
}

#[test]
fn test_array_count_beyond_input() {
    // 1000 acknowledgements announced, one present
    let mut bytes = 1000i32.to_le_bytes().to_vec();
    bytes.extend_from_slice(&[1, 0, 0, 0, 2, 0, 0, 0]);
    assert_eq!(kind_of::<PublishParameters>(&bytes), ErrorKind::TruncatedInput);
}

#[test]
fn test_string_length_beyond_input() {
    let bytes = [0x10, 0x10, 0x00, 0x00, 0x00, b'a'];
    assert_eq!(kind_of::<DiagnosticInfo>(&bytes), ErrorKind::TruncatedInput);
}

// ============================================================================
// Malformed values
// ============================================================================

#[test]
fn test_string_length_below_minus_one() {
    let mut bytes = vec![0x10];
    bytes.extend_from_slice(&(-2i32).to_le_bytes());
    assert_eq!(kind_of::<DiagnosticInfo>(&bytes), ErrorKind::MalformedValue);
}

#[test]
fn test_invalid_utf8() {
    let bytes = [0x10, 0x02, 0x00, 0x00, 0x00, 0xC3, 0x28];
    assert_eq!(kind_of::<DiagnosticInfo>(&bytes), ErrorKind::MalformedValue);
}

#[test]
fn test_negative_array_count_decodes_empty() {
    let bytes = (-1i32).to_le_bytes();
    let params: PublishParameters = decode_from_slice(&bytes).unwrap();
    assert!(params.acknowledgements.is_empty());

    let bytes = i32::MIN.to_le_bytes();
    let params: PublishParameters = decode_from_slice(&bytes).unwrap();
    assert!(params.acknowledgements.is_empty());
}

#[test]
fn test_trailing_bytes() {
    let mut bytes = encode_to_vec(&PublishParameters::default()).unwrap();
    bytes.push(0);
    assert_eq!(kind_of::<PublishParameters>(&bytes), ErrorKind::MalformedValue);

    let (params, consumed) = decode_prefix::<PublishParameters>(&bytes).unwrap();
    assert_eq!(consumed, 4);
    assert!(params.acknowledgements.is_empty());
}

#[test]
fn test_limits() {
    let bytes = encode_to_vec(&vec![7u32; 100]).unwrap();
    let limits = DecodeLimits::default().with_max_array_length(99);
    let err = decode_from_slice_with_limits::<Vec<u32>>(&bytes, limits).expect_err("too long");
    assert!(matches!(err, CodecError::ArrayTooLong { count: 100, limit: 99, .. }));
    assert_eq!(err.kind(), ErrorKind::MalformedValue);

    let diag = DiagnosticInfo::new().with_additional_info("x".repeat(100));
    let bytes = encode_to_vec(&diag).unwrap();
    let limits = DecodeLimits::default().with_max_string_length(64);
    let err = decode_from_slice_with_limits::<DiagnosticInfo>(&bytes, limits)
        .expect_err("string too long");
    assert!(matches!(err, CodecError::LengthLimitExceeded { len: 100, .. }));

    // Strict limits still accept ordinary traffic
    assert_eq!(
        decode_from_slice_with_limits::<DiagnosticInfo>(&bytes, DecodeLimits::strict()).unwrap(),
        diag
    );
}

// ============================================================================
// Unrecognized identifiers
// ============================================================================

#[test]
fn test_unknown_node_id_encodings() {
    for encoding in 5u8..=u8::MAX {
        let bytes = [encoding, 0, 0, 0];
        let err = decode_from_slice::<NodeId>(&bytes).expect_err("unknown encoding");
        assert!(matches!(
            err,
            CodecError::UnknownNodeIdEncoding { offset: 0, encoding: e } if e == encoding
        ));
    }
}

#[test]
fn test_unknown_message_tag() {
    // TwoByte tag is never a catalog entry
    assert_eq!(kind_of::<Message>(&[0x00, 0x13]), ErrorKind::UnrecognizedIdentifier);
    // FourByte in namespace 0 with an id outside the catalog
    assert_eq!(
        kind_of::<Message>(&[0x01, 0x00, 0xFF, 0x7F]),
        ErrorKind::UnrecognizedIdentifier
    );
    // Unknown NodeId encoding in the tag position
    assert_eq!(
        kind_of::<Message>(&[0x07, 0x00, 0x13, 0x03]),
        ErrorKind::UnrecognizedIdentifier
    );
}

#[test]
fn test_envelope_tag_mismatch() {
    let bytes = encode_to_vec(&CreateSubscriptionRequest::default()).unwrap();
    let err = decode_from_slice::<PublishResponse>(&bytes).expect_err("wrong envelope");
    match err {
        CodecError::UnexpectedMessageType { expected, found } => {
            assert_eq!(expected, NodeId::four_byte(0, 0x033D));
            assert_eq!(found, NodeId::four_byte(0, 0x0313));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

// ============================================================================
// Recursion bound
// ============================================================================

#[test]
fn test_diagnostic_nesting_at_default_limit() {
    init_logging();
    let bytes = diagnostic_chain_bytes(100);
    let diag: DiagnosticInfo = decode_from_slice(&bytes).unwrap();
    assert_eq!(diag.depth(), 100);
    assert_eq!(encode_to_vec(&diag).unwrap(), bytes);
}

#[test]
fn test_diagnostic_nesting_beyond_default_limit() {
    init_logging();
    let bytes = diagnostic_chain_bytes(101);
    let err = decode_from_slice::<DiagnosticInfo>(&bytes).expect_err("101 levels");
    assert!(matches!(err, CodecError::RecursionLimitExceeded { limit: 100 }));
}

#[test]
fn test_encode_refuses_nesting_the_decoder_would_reject() {
    init_logging();
    let mut diag = DiagnosticInfo::new().with_symbolic_id(42);
    for _ in 1..100 {
        diag = DiagnosticInfo::new().with_inner(diag);
    }
    assert_eq!(diag.depth(), 100);
    let bytes = encode_to_vec(&diag).unwrap();
    assert_eq!(bytes, diagnostic_chain_bytes(100));

    let too_deep = DiagnosticInfo::new().with_inner(diag);
    assert_eq!(too_deep.depth(), 101);
    let err = encode_to_vec(&too_deep).expect_err("101 levels");
    assert!(matches!(err, CodecError::RecursionLimitExceeded { limit: 100 }));
    assert_eq!(
        too_deep.encoded_size().expect_err("size follows encode").kind(),
        ErrorKind::RecursionLimitExceeded
    );
}

#[test]
fn test_recursion_bomb_does_not_overflow_the_stack() {
    // Every byte sets only the inner bit: unbounded nesting if trusted
    let bytes = vec![0x40; 1 << 20];
    assert_eq!(
        kind_of::<DiagnosticInfo>(&bytes),
        ErrorKind::RecursionLimitExceeded
    );
}

#[test]
fn test_depth_counter_resets_between_siblings() {
    // Two sibling chains of 100 levels each inside one array
    let mut bytes = 2i32.to_le_bytes().to_vec();
    bytes.extend(diagnostic_chain_bytes(100));
    bytes.extend(diagnostic_chain_bytes(100));
    let diags: Vec<DiagnosticInfo> = decode_from_slice(&bytes).unwrap();
    assert_eq!(diags.len(), 2);
    assert!(diags.iter().all(|d| d.depth() == 100));
}

// ============================================================================
// Sink and source failures
// ============================================================================

struct FailingWriter {
    accept: usize,
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.accept == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "peer closed"));
        }
        let n = buf.len().min(self.accept);
        self.accept -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_failure_propagates_unchanged() {
    let request = CreateSubscriptionRequest::default();
    let mut sink = IoSink::new(FailingWriter { accept: 10 });
    let err = request.encode(&mut sink).expect_err("writer fails");
    match err {
        CodecError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_fixed_buffer_too_small() {
    let request = CreateSubscriptionRequest::default();
    let needed = request.encoded_size().unwrap();
    let mut buf = vec![0u8; needed - 1];
    let err = encode_into_slice(&request, &mut buf).expect_err("one byte short");
    assert_eq!(err.kind(), ErrorKind::Sink);
}

#[test]
fn test_io_source_eof_is_truncation() {
    let bytes = encode_to_vec(&CreateSubscriptionRequest::default()).unwrap();
    let mut source = IoSource::new(&bytes[..bytes.len() - 3]);
    let mut decoder = Decoder::new(&mut source);
    let err = CreateSubscriptionRequest::decode(&mut decoder).expect_err("short stream");
    assert_eq!(err.kind(), ErrorKind::TruncatedInput);
}

#[test]
fn test_io_source_huge_length_prefix_fails_without_allocating() {
    // DiagnosticInfo announcing a 2 GiB string over a 5-byte stream
    let bytes = [0x10, 0xFF, 0xFF, 0xFF, 0x7F];
    let mut source = IoSource::new(&bytes[..]);
    let limits = DecodeLimits::default().with_max_string_length(usize::MAX);
    let mut decoder = Decoder::with_limits(&mut source, limits);
    let err = DiagnosticInfo::decode(&mut decoder).expect_err("stream ends");
    assert_eq!(err.kind(), ErrorKind::TruncatedInput);
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Request and response headers carried by every service message.

use super::{DateTime, DiagnosticInfo, ExtensionObject, NodeId, StatusCode};

/// Bits of [`RequestHeader::return_diagnostics`].
pub mod return_diagnostics {
    pub const SERVICE_SYMBOLIC_ID: u32 = 0x0001;
    pub const SERVICE_LOCALIZED_TEXT: u32 = 0x0002;
    pub const SERVICE_ADDITIONAL_INFO: u32 = 0x0004;
    pub const SERVICE_INNER_STATUS_CODE: u32 = 0x0008;
    pub const SERVICE_INNER_DIAGNOSTICS: u32 = 0x0010;
    pub const OPERATION_SYMBOLIC_ID: u32 = 0x0020;
    pub const OPERATION_LOCALIZED_TEXT: u32 = 0x0040;
    pub const OPERATION_ADDITIONAL_INFO: u32 = 0x0080;
    pub const OPERATION_INNER_STATUS_CODE: u32 = 0x0100;
    pub const OPERATION_INNER_DIAGNOSTICS: u32 = 0x0200;
}

/// Envelope metadata prefixed to every request.
///
/// Layout: `NodeId | DateTime | u32 | u32 | String (nullable) | u32 |
/// ExtensionObject`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestHeader {
    pub authentication_token: NodeId,
    pub timestamp: DateTime,
    pub request_handle: u32,
    pub return_diagnostics: u32,
    pub audit_entry_id: Option<String>,
    /// Milliseconds; 0 means no hint.
    pub timeout_hint: u32,
    pub additional_header: ExtensionObject,
}

crate::binary_struct!(RequestHeader {
    authentication_token,
    timestamp,
    request_handle,
    return_diagnostics,
    audit_entry_id,
    timeout_hint,
    additional_header,
});

impl RequestHeader {
    /// Header stamped with the current time.
    pub fn new(authentication_token: NodeId, request_handle: u32) -> Self {
        Self {
            authentication_token,
            timestamp: DateTime::now(),
            request_handle,
            ..Self::default()
        }
    }
}

/// Envelope metadata prefixed to every response.
///
/// Layout: `DateTime | u32 | StatusCode | Array<DiagnosticInfo> |
/// Array<String> | ExtensionObject`. The diagnostics array is independent of
/// the service result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseHeader {
    pub timestamp: DateTime,
    pub request_handle: u32,
    pub service_result: StatusCode,
    pub service_diagnostics: Vec<DiagnosticInfo>,
    /// Strings indexed by the DiagnosticInfo records of this response.
    pub string_table: Vec<Option<String>>,
    pub additional_header: ExtensionObject,
}

crate::binary_struct!(ResponseHeader {
    timestamp,
    request_handle,
    service_result,
    service_diagnostics,
    string_table,
    additional_header,
});

impl ResponseHeader {
    /// Header answering `request`, stamped with the current time.
    pub fn for_request(request: &RequestHeader, service_result: StatusCode) -> Self {
        Self {
            timestamp: DateTime::now(),
            request_handle: request.request_handle,
            service_result,
            ..Self::default()
        }
    }
}

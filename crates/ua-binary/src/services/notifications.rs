// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Typed notification payloads carried in [`NotificationMessage`] entries.
//!
//! [`NotificationMessage`]: super::NotificationMessage

use crate::types::{DiagnosticInfo, ExtensionPayload, NodeId, StatusCode};

/// Binary encoding id of [`StatusChangeNotification`].
pub const STATUS_CHANGE_NOTIFICATION_ID: u16 = 0x0334;

/// Reports a change in the subscription's own status, e.g. a timeout.
///
/// Layout: `StatusCode | DiagnosticInfo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusChangeNotification {
    pub status: StatusCode,
    pub diagnostic_info: DiagnosticInfo,
}

crate::binary_struct!(StatusChangeNotification {
    status,
    diagnostic_info,
});

impl StatusChangeNotification {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            diagnostic_info: DiagnosticInfo::default(),
        }
    }
}

impl ExtensionPayload for StatusChangeNotification {
    fn type_id() -> NodeId {
        NodeId::four_byte(0, STATUS_CHANGE_NOTIFICATION_ID)
    }
}

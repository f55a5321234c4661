// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Publish cycle: acknowledgements out, notification messages back.

use super::service_message;
use crate::error::Result;
use crate::types::{
    DateTime, DiagnosticInfo, ExtensionObject, ExtensionPayload, RequestHeader, ResponseHeader,
    StatusCode,
};

/// Receipt for one delivered notification message (8 bytes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SubscriptionAcknowledgement {
    pub subscription_id: u32,
    pub sequence_number: u32,
}

crate::binary_struct!(SubscriptionAcknowledgement {
    subscription_id,
    sequence_number,
});

/// Layout: `Array<SubscriptionAcknowledgement>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishParameters {
    pub acknowledgements: Vec<SubscriptionAcknowledgement>,
}

crate::binary_struct!(PublishParameters { acknowledgements });

impl PublishParameters {
    pub fn acknowledge(&mut self, subscription_id: u32, sequence_number: u32) {
        self.acknowledgements.push(SubscriptionAcknowledgement {
            subscription_id,
            sequence_number,
        });
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishRequest {
    pub header: RequestHeader,
    pub parameters: PublishParameters,
}

service_message!(PublishRequest { header, parameters });

/// Batch of notifications delivered for one subscription.
///
/// Layout: `u32 sequence_number | DateTime publish_time |
/// Array<ExtensionObject>`. An empty batch is a keep-alive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationMessage {
    pub sequence_number: u32,
    pub publish_time: DateTime,
    pub notification_data: Vec<ExtensionObject>,
}

crate::binary_struct!(NotificationMessage {
    sequence_number,
    publish_time,
    notification_data,
});

impl NotificationMessage {
    pub fn is_keep_alive(&self) -> bool {
        self.notification_data.is_empty()
    }

    /// Appends a typed payload as a binary extension object.
    pub fn push_payload<P: ExtensionPayload>(&mut self, payload: &P) -> Result<()> {
        self.notification_data
            .push(ExtensionObject::from_payload(payload)?);
        Ok(())
    }

    /// Decodes every entry tagged as `P`, skipping other payload types.
    pub fn payloads<P: ExtensionPayload>(&self) -> Result<Vec<P>> {
        let mut found = Vec::new();
        for data in &self.notification_data {
            if let Some(payload) = data.decode_payload::<P>()? {
                found.push(payload);
            }
        }
        Ok(found)
    }
}

/// Body of a publish response.
///
/// `results` holds one status per acknowledgement of the request; its
/// diagnostics array is independent in length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishResult {
    pub subscription_id: u32,
    pub available_sequence_numbers: Vec<u32>,
    pub more_notifications: bool,
    pub notification_message: NotificationMessage,
    pub results: Vec<StatusCode>,
    pub diagnostic_infos: Vec<DiagnosticInfo>,
}

crate::binary_struct!(PublishResult {
    subscription_id,
    available_sequence_numbers,
    more_notifications,
    notification_message,
    results,
    diagnostic_infos,
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublishResponse {
    pub header: ResponseHeader,
    pub result: PublishResult,
}

service_message!(PublishResponse { header, result });

/// Layout: `u32 subscription_id | u32 retransmit_sequence_number`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepublishParameters {
    pub subscription_id: u32,
    pub retransmit_sequence_number: u32,
}

crate::binary_struct!(RepublishParameters {
    subscription_id,
    retransmit_sequence_number,
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepublishRequest {
    pub header: RequestHeader,
    pub parameters: RepublishParameters,
}

service_message!(RepublishRequest { header, parameters });

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepublishResponse {
    pub header: ResponseHeader,
    pub notification_message: NotificationMessage,
}

service_message!(RepublishResponse {
    header,
    notification_message,
});

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Subscription lifecycle messages.

use super::{service_message, OperationResults};
use crate::types::{RequestHeader, ResponseHeader};

/// Client-requested subscription settings (22 bytes).
///
/// Layout: `f64 interval | u32 lifetime | u32 keep_alive |
/// u32 max_notifications | bool enabled | u8 priority`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubscriptionParameters {
    /// Milliseconds.
    pub requested_publishing_interval: f64,
    pub requested_lifetime_count: u32,
    pub requested_max_keep_alive_count: u32,
    /// 0 means no limit.
    pub max_notifications_per_publish: u32,
    pub publishing_enabled: bool,
    pub priority: u8,
}

crate::binary_struct!(SubscriptionParameters {
    requested_publishing_interval,
    requested_lifetime_count,
    requested_max_keep_alive_count,
    max_notifications_per_publish,
    publishing_enabled,
    priority,
});

/// Server-revised settings of a created subscription (20 bytes).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubscriptionData {
    pub subscription_id: u32,
    pub revised_publishing_interval: f64,
    pub revised_lifetime_count: u32,
    pub revised_max_keep_alive_count: u32,
}

crate::binary_struct!(SubscriptionData {
    subscription_id,
    revised_publishing_interval,
    revised_lifetime_count,
    revised_max_keep_alive_count,
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateSubscriptionRequest {
    pub header: RequestHeader,
    pub parameters: SubscriptionParameters,
}

service_message!(CreateSubscriptionRequest { header, parameters });

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateSubscriptionResponse {
    pub header: ResponseHeader,
    pub data: SubscriptionData,
}

service_message!(CreateSubscriptionResponse { header, data });

/// Settings change for an existing subscription.
///
/// Layout: `u32 id | f64 interval | u32 lifetime | u32 keep_alive |
/// u32 max_notifications | u8 priority`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModifySubscriptionParameters {
    pub subscription_id: u32,
    pub requested_publishing_interval: f64,
    pub requested_lifetime_count: u32,
    pub requested_max_keep_alive_count: u32,
    pub max_notifications_per_publish: u32,
    pub priority: u8,
}

crate::binary_struct!(ModifySubscriptionParameters {
    subscription_id,
    requested_publishing_interval,
    requested_lifetime_count,
    requested_max_keep_alive_count,
    max_notifications_per_publish,
    priority,
});

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ModifySubscriptionResult {
    pub revised_publishing_interval: f64,
    pub revised_lifetime_count: u32,
    pub revised_max_keep_alive_count: u32,
}

crate::binary_struct!(ModifySubscriptionResult {
    revised_publishing_interval,
    revised_lifetime_count,
    revised_max_keep_alive_count,
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifySubscriptionRequest {
    pub header: RequestHeader,
    pub parameters: ModifySubscriptionParameters,
}

service_message!(ModifySubscriptionRequest { header, parameters });

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModifySubscriptionResponse {
    pub header: ResponseHeader,
    pub result: ModifySubscriptionResult,
}

service_message!(ModifySubscriptionResponse { header, result });

/// Layout: `bool enabled | Array<u32> subscription_ids`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetPublishingModeParameters {
    pub publishing_enabled: bool,
    pub subscription_ids: Vec<u32>,
}

crate::binary_struct!(SetPublishingModeParameters {
    publishing_enabled,
    subscription_ids,
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetPublishingModeRequest {
    pub header: RequestHeader,
    pub parameters: SetPublishingModeParameters,
}

service_message!(SetPublishingModeRequest { header, parameters });

/// One status per requested subscription id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetPublishingModeResponse {
    pub header: ResponseHeader,
    pub result: OperationResults,
}

service_message!(SetPublishingModeResponse { header, result });

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteSubscriptionsRequest {
    pub header: RequestHeader,
    pub subscription_ids: Vec<u32>,
}

service_message!(DeleteSubscriptionsRequest {
    header,
    subscription_ids,
});

/// One status per requested subscription id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteSubscriptionsResponse {
    pub header: ResponseHeader,
    pub result: OperationResults,
}

service_message!(DeleteSubscriptionsResponse { header, result });

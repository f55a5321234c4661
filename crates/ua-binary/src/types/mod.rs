// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Built-in wire types shared by every service.

mod byte_string;
mod date_time;
mod diagnostic_info;
mod extension_object;
mod header;
mod node_id;
mod status_code;

pub use byte_string::ByteString;
pub use date_time::DateTime;
pub use diagnostic_info::{DiagnosticInfo, DiagnosticInfoMask};
pub use extension_object::{ExtensionBody, ExtensionObject, ExtensionPayload};
pub use header::{return_diagnostics, RequestHeader, ResponseHeader};
pub use node_id::{NodeId, NodeIdEncoding};
pub use status_code::{Severity, StatusCode};

/// 128-bit GUID as carried by [`NodeId::Guid`].
pub use uuid::Uuid as Guid;

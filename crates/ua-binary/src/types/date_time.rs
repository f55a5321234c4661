// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Timestamps: signed 64-bit count of 100 ns intervals since 1601-01-01 UTC.

use crate::error::Result;
use crate::ser::{BinaryDecode, BinaryEncode, Decoder, Sink, Source};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Ticks between 1601-01-01 and 1970-01-01.
const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;
const TICKS_PER_SECOND: i64 = 10_000_000;
const NANOS_PER_TICK: i64 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime(pub i64);

impl DateTime {
    /// Zero ticks, used on the wire as "no timestamp".
    pub const NULL: Self = Self(0);

    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    pub const fn ticks(self) -> i64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Converts a wall-clock time, saturating outside the representable range.
    pub fn from_system_time(time: SystemTime) -> Self {
        let ticks = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => UNIX_EPOCH_TICKS.saturating_add(duration_ticks(after)),
            Err(before) => UNIX_EPOCH_TICKS.saturating_sub(duration_ticks(before.duration())),
        };
        Self(ticks.max(0))
    }

    /// Converts to wall-clock time; `None` for timestamps the platform
    /// cannot represent.
    pub fn to_system_time(self) -> Option<SystemTime> {
        let since_unix = self.0.checked_sub(UNIX_EPOCH_TICKS)?;
        let secs = since_unix.div_euclid(TICKS_PER_SECOND);
        let nanos = since_unix.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK;
        if secs >= 0 {
            UNIX_EPOCH.checked_add(Duration::new(secs as u64, nanos as u32))
        } else {
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(secs.unsigned_abs()))?
                .checked_add(Duration::from_nanos(nanos as u64))
        }
    }
}

fn duration_ticks(d: Duration) -> i64 {
    let ticks = d.as_nanos() / NANOS_PER_TICK as u128;
    i64::try_from(ticks).unwrap_or(i64::MAX)
}

impl BinaryEncode for DateTime {
    fn encode<W: Sink + ?Sized>(&self, out: &mut W) -> Result<()> {
        out.write_i64(self.0)
    }
}

impl BinaryDecode for DateTime {
    fn decode<R: Source + ?Sized>(input: &mut Decoder<'_, R>) -> Result<Self> {
        input.read_i64().map(Self)
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::Instant;
use serde::{Serialize, Serializer};

/// Timestamps go over the wire as epoch seconds: an integer when there is no
/// sub-second component, a float otherwise.
impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.has_nanos() {
            serializer.serialize_f64(self.epoch_fractional_seconds())
        } else {
            serializer.serialize_i64(self.epoch_seconds())
        }
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client tokens for operations that must be safe to retry.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Formats 128 random bits as a version 4 UUID.
///
/// The version nibble and variant bits overwrite the corresponding input bits.
pub(crate) fn uuid_v4(input: u128) -> String {
    let mut out = String::with_capacity(36);
    // u4-aligned index into [input]
    let mut rnd_idx: u8 = 0;
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    for str_idx in 0..36 {
        if str_idx == 8 || str_idx == 13 || str_idx == 18 || str_idx == 23 {
            out.push('-');
        } else if str_idx == 14 {
            out.push('4');
        } else {
            let mut dat: u8 = ((input >> (rnd_idx * 4)) & 0x0F) as u8;
            if str_idx == 19 {
                dat |= 0b00001000;
            }
            rnd_idx += 1;
            out.push(HEX_CHARS[dat as usize] as char);
        }
    }
    out
}

/// Supplies `ClientToken` values for inputs that leave them unset.
///
/// The default provider draws from a thread-local generator. Tests can pin tokens with
/// [`IdempotencyTokenProvider::with_seed`] or [`IdempotencyTokenProvider::fixed`].
#[derive(Clone)]
pub struct IdempotencyTokenProvider {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Random,
    Seeded(Arc<Mutex<fastrand::Rng>>),
    Fixed(&'static str),
}

impl IdempotencyTokenProvider {
    pub fn random() -> Self {
        IdempotencyTokenProvider {
            inner: Inner::Random,
        }
    }

    /// Deterministic tokens from a seeded generator.
    pub fn with_seed(seed: u64) -> Self {
        IdempotencyTokenProvider {
            inner: Inner::Seeded(Arc::new(Mutex::new(fastrand::Rng::with_seed(seed)))),
        }
    }

    /// Always returns `token`.
    pub fn fixed(token: &'static str) -> Self {
        IdempotencyTokenProvider {
            inner: Inner::Fixed(token),
        }
    }

    pub fn make_idempotency_token(&self) -> String {
        match &self.inner {
            Inner::Random => uuid_v4(fastrand::u128(..)),
            Inner::Seeded(rng) => {
                let bits = rng.lock().unwrap_or_else(PoisonError::into_inner).u128(..);
                uuid_v4(bits)
            }
            Inner::Fixed(token) => (*token).to_owned(),
        }
    }
}

impl Default for IdempotencyTokenProvider {
    fn default() -> Self {
        Self::random()
    }
}

impl fmt::Debug for IdempotencyTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.inner {
            Inner::Random => "Random",
            Inner::Seeded(_) => "Seeded",
            Inner::Fixed(_) => "Fixed",
        };
        f.debug_tuple("IdempotencyTokenProvider").field(&kind).finish()
    }
}

impl From<&'static str> for IdempotencyTokenProvider {
    fn from(token: &'static str) -> Self {
        Self::fixed(token)
    }
}

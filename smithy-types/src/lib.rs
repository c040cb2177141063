/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Value types and shape macros shared by generated service models.

pub mod instant;
#[macro_use]
mod macros;
pub mod shape;

pub use crate::instant::Instant;

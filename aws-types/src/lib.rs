/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Cross-service types for AWS clients.

pub mod os_shim_internal;
pub mod region;

pub use region::Region;

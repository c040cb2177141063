/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic HTTP building blocks for REST-JSON operations.

pub mod label;
pub mod operation;
pub mod query;
pub mod response;
pub mod result;

mod urlencode;

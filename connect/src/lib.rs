/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Typed model and client for Amazon Connect.
//!
//! Every input, output and nested shape is an immutable value built with a consuming
//! builder. Members are optional; list members append one item per builder call, and
//! enum members accept either the enum or its raw wire string.
//!
//! ```rust
//! use connect::input::GetMetricDataInput;
//! use connect::model::{Filters, Grouping};
//!
//! let input = GetMetricDataInput::builder()
//!     .instance_id("abc")
//!     .filters(Filters::builder().queues("q1").channels("VOICE").build())
//!     .groupings(Grouping::Queue)
//!     .build();
//! assert_eq!(input.groupings(), Some(&[Grouping::Queue][..]));
//! ```

mod client;
pub mod config;
pub mod error;
mod idempotency_token;
pub mod input;
mod json_errors;
pub mod model;
pub mod operation;
mod operation_deser;
mod operation_ser;
pub mod output;

pub use aws_types::Region;
pub use client::Client;
pub use config::Config;
pub use error::{Error, ErrorKind};
pub use idempotency_token::IdempotencyTokenProvider;
pub use smithy_http::result::{SdkError, SdkSuccess};
pub use smithy_types::Instant;

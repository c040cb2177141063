/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;

/// `ParseHttpResponse` turns a fully loaded HTTP response into an operation's output.
///
/// Parsing is kept synchronous and pure: the caller reads the whole body before invoking
/// the handler, so handlers are trivial to test against canned responses.
pub trait ParseHttpResponse {
    /// Output type of the HttpResponse.
    ///
    /// For request/response style operations, this is typically something like:
    /// `Result<ListUsersOutput, connect::Error>`
    type Output;

    /// Parse an HTTP response from a fully loaded body.
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

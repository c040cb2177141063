/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::Error;
use crate::json_errors;
use bytes::Bytes;
use serde::de::DeserializeOwned;

/// Parses a REST-JSON response into `O`, or into an [`Error`] for non-2xx statuses.
///
/// An empty body yields `O::default()`; unknown keys are ignored.
pub(crate) fn parse_response<O>(response: &http::Response<Bytes>) -> Result<O, Error>
where
    O: DeserializeOwned + Default,
{
    if !response.status().is_success() {
        let meta = json_errors::parse_error_metadata(response);
        tracing::debug!(status = %response.status(), code = ?meta.code(), "service returned an error");
        return Err(Error::from_meta(meta));
    }
    let body = response.body();
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(O::default());
    }
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(error = %err, "failed to parse response body");
        let mut error = Error::unhandled(err);
        error.meta.request_id = response
            .headers()
            .get("x-amzn-requestid")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        error
    })
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request construction shared by every operation input.

use crate::config::Config;
use crate::error::BuildError;
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::Method;
use serde::Serialize;
use smithy_http::label::fmt_string as fmt_label;

/// Encodes a required path label, rejecting unset and empty values.
pub(crate) fn label(field: &'static str, value: Option<&str>) -> Result<String, BuildError> {
    match value {
        None => Err(BuildError::missing(field)),
        Some("") => Err(BuildError::invalid(field, "cannot be empty")),
        Some(value) => Ok(fmt_label(value, false)),
    }
}

pub(crate) fn required<T>(field: &'static str, value: Option<T>) -> Result<T, BuildError> {
    value.ok_or_else(|| BuildError::missing(field))
}

/// Checks a string member's length in characters when it is set.
pub(crate) fn length(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), BuildError> {
    if let Some(value) = value {
        let len = value.chars().count();
        if len < min || len > max {
            return Err(BuildError::invalid(
                field,
                format!("length must be between {} and {}, got {}", min, max, len),
            ));
        }
    }
    Ok(())
}

/// Checks an integer member's range when it is set.
pub(crate) fn range(
    field: &'static str,
    value: Option<i32>,
    min: i32,
    max: i32,
) -> Result<(), BuildError> {
    match value {
        Some(value) if value < min || value > max => Err(BuildError::invalid(
            field,
            format!("must be between {} and {}, got {}", min, max, value),
        )),
        _ => Ok(()),
    }
}

/// Serializes the non-label members of an input as the JSON request body.
pub(crate) fn json_body<T: Serialize>(input: &T) -> Result<Bytes, BuildError> {
    Ok(Bytes::from(serde_json::to_vec(input)?))
}

/// Assembles the HTTP request for an operation.
///
/// `uri` is the path plus query string; it is appended to the configured endpoint.
pub(crate) fn build_request(
    config: &Config,
    method: Method,
    uri: &str,
    body: Option<Bytes>,
) -> Result<http::Request<Bytes>, BuildError> {
    let endpoint = config.endpoint()?;
    let mut builder = http::Request::builder()
        .method(method)
        .uri(format!("{}{}", endpoint, uri));
    let body = match body {
        Some(body) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            body
        }
        None => Bytes::new(),
    };
    let request = builder.header(CONTENT_LENGTH, body.len()).body(body)?;
    tracing::trace!(method = %request.method(), uri = %request.uri(), "built request");
    Ok(request)
}

#[cfg(test)]
mod test {
    use super::{label, length, range};
    use crate::error::BuildError;

    #[test]
    fn labels_are_encoded() {
        assert_eq!(label("user_id", Some("a/b c")).unwrap(), "a%2Fb%20c");
        assert!(matches!(
            label("user_id", None),
            Err(BuildError::MissingField { field: "user_id", .. })
        ));
        assert!(matches!(
            label("user_id", Some("")),
            Err(BuildError::InvalidField { field: "user_id", .. })
        ));
    }

    #[test]
    fn ranges_are_inclusive() {
        assert!(range("max_results", Some(1), 1, 100).is_ok());
        assert!(range("max_results", Some(100), 1, 100).is_ok());
        assert!(range("max_results", None, 1, 100).is_ok());
        assert!(range("max_results", Some(0), 1, 100).is_err());
        assert!(range("max_results", Some(101), 1, 100).is_err());
    }

    #[test]
    fn lengths_count_characters() {
        assert!(length("name", Some("ü"), 1, 1).is_ok());
        assert!(length("name", Some(""), 1, 10).is_err());
        assert!(length("name", None, 1, 10).is_ok());
    }
}

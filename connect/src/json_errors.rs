/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Extracts error metadata from REST-JSON error responses.

use crate::error::ErrorMetadata;
use bytes::Bytes;
use http::header::HeaderMap;
use serde_json::Value;

/// Strips a namespace (`aws.protocoltests#`) and a trailing URL (`:http://...`) from an
/// error code.
fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn body_string(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| body.get(key))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

/// Reads the error code, message and request ID from an error response.
///
/// The `x-amzn-errortype` header wins over the body's `__type` or `code` fields. A body that is
/// not JSON still yields the header-derived metadata.
pub(crate) fn parse_error_metadata(response: &http::Response<Bytes>) -> ErrorMetadata {
    let headers = response.headers();
    let body: Value = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
    let code = header(headers, "x-amzn-errortype")
        .map(str::to_owned)
        .or_else(|| body_string(&body, &["__type", "code", "Code"]));
    ErrorMetadata {
        code: code.map(|code| sanitize_error_code(&code).to_owned()),
        message: body_string(&body, &["message", "Message", "errorMessage"]),
        request_id: header(headers, "x-amzn-requestid").map(str::to_owned),
    }
}

#[cfg(test)]
mod test {
    use super::{parse_error_metadata, sanitize_error_code};
    use bytes::Bytes;

    fn response(builder: http::response::Builder, body: &'static str) -> http::Response<Bytes> {
        builder.body(Bytes::from_static(body.as_bytes())).unwrap()
    }

    #[test]
    fn error_code_sanitization() {
        assert_eq!(sanitize_error_code("InvalidRequestException"), "InvalidRequestException");
        assert_eq!(
            sanitize_error_code("com.amazonaws.connect#UserNotFoundException"),
            "UserNotFoundException"
        );
        assert_eq!(
            sanitize_error_code(
                "ThrottlingException:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "ThrottlingException"
        );
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/"),
            "FooError"
        );
    }

    #[test]
    fn header_code_wins() {
        let resp = response(
            http::Response::builder()
                .status(400)
                .header("X-Amzn-Errortype", "InvalidParameterException:http://internal/")
                .header("x-amzn-RequestId", "req-123"),
            r#"{"__type": "InvalidRequestException", "Message": "bad InstanceId"}"#,
        );
        let meta = parse_error_metadata(&resp);
        assert_eq!(meta.code(), Some("InvalidParameterException"));
        assert_eq!(meta.message(), Some("bad InstanceId"));
        assert_eq!(meta.request_id(), Some("req-123"));
    }

    #[test]
    fn body_code_and_lowercase_message() {
        let resp = response(
            http::Response::builder().status(404),
            r#"{"code": "ResourceNotFoundException", "message": "missing"}"#,
        );
        let meta = parse_error_metadata(&resp);
        assert_eq!(meta.code(), Some("ResourceNotFoundException"));
        assert_eq!(meta.message(), Some("missing"));
        assert_eq!(meta.request_id(), None);
    }

    #[test]
    fn non_json_body() {
        let resp = response(http::Response::builder().status(502), "<html>bad gateway</html>");
        let meta = parse_error_metadata(&resp);
        assert_eq!(meta.code(), None);
        assert_eq!(meta.message(), None);
    }
}

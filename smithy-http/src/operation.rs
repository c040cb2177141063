/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use std::borrow::Cow;

/// Names the operation and service a request belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Debug)]
pub struct Parts<H> {
    pub response_handler: H,
    pub metadata: Option<Metadata>,
}

/// A fully marshalled HTTP request paired with the handler that parses its response.
#[derive(Debug)]
pub struct Operation<H> {
    request: http::Request<Bytes>,
    parts: Parts<H>,
}

impl<H> Operation<H> {
    pub fn new(request: http::Request<Bytes>, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                metadata: None,
            },
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn request(&self) -> &http::Request<Bytes> {
        &self.request
    }

    pub fn into_request_response(self) -> (http::Request<Bytes>, Parts<H>) {
        (self.request, self.parts)
    }
}

#[cfg(test)]
mod test {
    use crate::operation::{Metadata, Operation};
    use bytes::Bytes;

    #[test]
    fn metadata_travels_with_the_request() {
        let request = http::Request::builder()
            .uri("https://connect.us-east-1.amazonaws.com/contact/stop")
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        let operation = Operation::new(request, ()).with_metadata(Metadata::new("StopContact", "connect"));
        assert_eq!(operation.metadata().map(|m| m.name()), Some("StopContact"));
        let (request, parts) = operation.into_request_response();
        assert_eq!(request.body().as_ref(), b"{}");
        assert_eq!(parts.metadata.map(|m| m.service().to_owned()), Some("connect".to_owned()));
    }
}

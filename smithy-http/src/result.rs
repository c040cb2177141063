/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

pub type BoxError = Box<dyn Error + Send + Sync>;

/// Successful Sdk Result
///
/// Carries the raw response next to the parsed output so callers can inspect headers.
#[derive(Debug)]
pub struct SdkSuccess<O, B = Bytes> {
    pub raw: http::Response<B>,
    pub parsed: O,
}

/// Failing Sdk Result
#[derive(Debug)]
pub enum SdkError<E, B = Bytes> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// An error response was received from the service
    ServiceError { raw: http::Response<B>, err: E },
}

impl<E, B> SdkError<E, B> {
    /// Returns the modeled service error, if the service returned one.
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Returns the raw HTTP response, if one was received.
    pub fn raw_response(&self) -> Option<&http::Response<B>> {
        match self {
            SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl<E, B> Display for SdkError<E, B>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E, B> Error for SdkError<E, B>
where
    E: Error + 'static,
    B: Debug,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err) | SdkError::DispatchFailure(err) => {
                Some(err.as_ref())
            }
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::result::SdkError;
    use bytes::Bytes;
    use std::error::Error;

    #[derive(Debug)]
    struct Throttled;

    impl std::fmt::Display for Throttled {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("ThrottlingException")
        }
    }

    impl Error for Throttled {}

    #[test]
    fn only_service_errors_carry_a_response() {
        let dispatch: SdkError<Throttled> = SdkError::DispatchFailure("connection reset".into());
        assert!(dispatch.raw_response().is_none());
        assert!(dispatch.service_error().is_none());
        assert_eq!(dispatch.to_string(), "dispatch failure: connection reset");

        let service: SdkError<Throttled> = SdkError::ServiceError {
            raw: http::Response::builder().status(429).body(Bytes::new()).unwrap(),
            err: Throttled,
        };
        assert_eq!(service.raw_response().map(|raw| raw.status().as_u16()), Some(429));
        assert_eq!(service.to_string(), "service error: ThrottlingException");
        assert!(service.source().is_some());
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors raised while building requests and returned by the service.

use smithy_http::result::BoxError;
use std::fmt;

/// An input could not be turned into an HTTP request. Nothing was sent.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("`{field}` was missing: {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    #[error("`{field}` is invalid: {details}")]
    InvalidField { field: &'static str, details: String },
    #[error("failed to serialize input: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("failed to construct HTTP request: {0}")]
    Other(#[source] BoxError),
}

impl BuildError {
    pub(crate) fn missing(field: &'static str) -> Self {
        BuildError::MissingField {
            field,
            details: "this member is required",
        }
    }

    pub(crate) fn invalid(field: &'static str, details: impl Into<String>) -> Self {
        BuildError::InvalidField {
            field,
            details: details.into(),
        }
    }
}

impl From<http::Error> for BuildError {
    fn from(err: http::Error) -> Self {
        BuildError::Other(err.into())
    }
}

/// Code, message and request ID common to every service error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorMetadata {
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) request_id: Option<String>,
}

impl ErrorMetadata {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code().unwrap_or("Error"))?;
        if let Some(message) = self.message() {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorMetadata {}

/// The kinds of error Amazon Connect reports.
#[non_exhaustive]
#[derive(Debug)]
pub enum ErrorKind {
    /// You do not have sufficient access to perform this action.
    AccessDeniedException,
    /// The contact with the specified ID is not active or does not exist.
    ContactNotFoundException,
    /// Outbound calls to the destination number are not allowed.
    DestinationNotAllowedException,
    /// A resource with the specified name already exists.
    DuplicateResourceException,
    /// Request processing failed because of an error or failure with the service.
    InternalServiceException,
    /// One or more of the specified parameters are not valid.
    InvalidParameterException,
    /// The request is not valid.
    InvalidRequestException,
    /// The allowed limit for the resource has been exceeded.
    LimitExceededException,
    /// The contact is not permitted.
    OutboundContactNotPermittedException,
    /// The specified resource was not found.
    ResourceNotFoundException,
    /// The throttling limit has been exceeded.
    ThrottlingException,
    /// No user with the specified credentials was found in the Amazon Connect instance.
    UserNotFoundException,
    /// An unexpected error, e.g. an unmodeled error code or an unparseable response
    Unhandled(BoxError),
}

impl ErrorKind {
    pub(crate) fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "AccessDeniedException" => ErrorKind::AccessDeniedException,
            "ContactNotFoundException" => ErrorKind::ContactNotFoundException,
            "DestinationNotAllowedException" => ErrorKind::DestinationNotAllowedException,
            "DuplicateResourceException" => ErrorKind::DuplicateResourceException,
            "InternalServiceException" => ErrorKind::InternalServiceException,
            "InvalidParameterException" => ErrorKind::InvalidParameterException,
            "InvalidRequestException" => ErrorKind::InvalidRequestException,
            "LimitExceededException" => ErrorKind::LimitExceededException,
            "OutboundContactNotPermittedException" => {
                ErrorKind::OutboundContactNotPermittedException
            }
            "ResourceNotFoundException" => ErrorKind::ResourceNotFoundException,
            "ThrottlingException" => ErrorKind::ThrottlingException,
            "UserNotFoundException" => ErrorKind::UserNotFoundException,
            _ => return None,
        })
    }
}

/// An error returned by Amazon Connect.
#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub(crate) meta: ErrorMetadata,
}

impl Error {
    pub fn new(kind: ErrorKind, meta: ErrorMetadata) -> Self {
        Error { kind, meta }
    }

    /// An error that does not map onto a modeled error kind.
    pub fn unhandled(err: impl Into<BoxError>) -> Self {
        Error {
            kind: ErrorKind::Unhandled(err.into()),
            meta: ErrorMetadata::default(),
        }
    }

    pub(crate) fn from_meta(meta: ErrorMetadata) -> Self {
        let kind = meta
            .code()
            .and_then(ErrorKind::from_code)
            .unwrap_or_else(|| ErrorKind::Unhandled(Box::new(meta.clone())));
        Error { kind, meta }
    }

    pub fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }

    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    /// Whether the service asked the caller to slow down.
    pub fn is_throttling(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ThrottlingException | ErrorKind::LimitExceededException
        )
    }

    pub fn is_resource_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::ResourceNotFoundException)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Unhandled(inner) if self.meta.code.is_none() => fmt::Display::fmt(inner, f),
            _ => fmt::Display::fmt(&self.meta, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Unhandled(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

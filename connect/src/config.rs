/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::BuildError;
use crate::idempotency_token::IdempotencyTokenProvider;
use aws_types::region::{self, ProvideRegion};
use aws_types::Region;

/// Service configuration shared by every operation a [`Client`](crate::Client) sends.
#[derive(Clone, Debug)]
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) endpoint_url: Option<String>,
    pub(crate) idempotency_token_provider: IdempotencyTokenProvider,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A builder seeded with the region from `AWS_REGION` or `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Builder {
        Builder::default().region_provider(&region::default_provider())
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// The base URI requests are sent to, without a trailing slash.
    pub fn endpoint(&self) -> Result<String, BuildError> {
        if let Some(url) = &self.endpoint_url {
            return Ok(url.trim_end_matches('/').to_owned());
        }
        match &self.region {
            Some(region) => Ok(format!("https://connect.{}.amazonaws.com", region)),
            None => Err(BuildError::MissingField {
                field: "region",
                details: "a region or an endpoint URL must be configured",
            }),
        }
    }

    pub(crate) fn make_token(&self) -> String {
        self.idempotency_token_provider.make_idempotency_token()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Builder {
    region: Option<Region>,
    endpoint_url: Option<String>,
    idempotency_token_provider: Option<IdempotencyTokenProvider>,
}

impl Builder {
    pub fn region(mut self, region: impl Into<Region>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn set_region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    /// Sets the region from `provider` when it yields one.
    pub fn region_provider(mut self, provider: &dyn ProvideRegion) -> Self {
        if let Some(region) = provider.region() {
            self.region = Some(region);
        }
        self
    }

    /// Overrides the resolved endpoint, e.g. `http://localhost:8080` for a local stub.
    pub fn endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn set_endpoint_url(mut self, endpoint_url: Option<String>) -> Self {
        self.endpoint_url = endpoint_url;
        self
    }

    pub fn idempotency_token_provider(
        mut self,
        provider: impl Into<IdempotencyTokenProvider>,
    ) -> Self {
        self.idempotency_token_provider = Some(provider.into());
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            endpoint_url: self.endpoint_url,
            idempotency_token_provider: self.idempotency_token_provider.unwrap_or_default(),
        }
    }
}

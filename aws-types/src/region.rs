/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::os_shim_internal::Env;
use std::borrow::Cow;
use std::fmt::{Display, Formatter};

/// The region to send requests to.
///
/// See http://docs.aws.amazon.com/general/latest/gr/rande.html for
/// information on AWS regions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region(
    // Regions are almost always known statically; an owned region is the escape hatch
    Cow<'static, str>,
);

impl AsRef<str> for Region {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Region {
    pub fn new(region: impl Into<Cow<'static, str>>) -> Self {
        Self(region.into())
    }

    pub const fn from_static(region: &'static str) -> Self {
        Self(Cow::Borrowed(region))
    }
}

/// Provide a [`Region`] to use with AWS requests
pub trait ProvideRegion: Send + Sync {
    fn region(&self) -> Option<Region>;
}

impl ProvideRegion for Region {
    fn region(&self) -> Option<Region> {
        Some(self.clone())
    }
}

impl ProvideRegion for Option<Region> {
    fn region(&self) -> Option<Region> {
        self.clone()
    }
}

/// Tries a series of region providers in order
///
/// # Example
/// ```rust
/// use aws_types::region::{ChainProvider, Region};
/// // check the environment, then fall back to us-east-2
/// let provider = ChainProvider::first_try(aws_types::region::default_provider())
///     .or_else(Region::new("us-east-2"));
/// ```
pub struct ChainProvider {
    providers: Vec<Box<dyn ProvideRegion>>,
}

impl ChainProvider {
    pub fn first_try(provider: impl ProvideRegion + 'static) -> Self {
        ChainProvider {
            providers: vec![Box::new(provider)],
        }
    }

    pub fn or_else(mut self, fallback: impl ProvideRegion + 'static) -> Self {
        self.providers.push(Box::new(fallback));
        self
    }
}

impl ProvideRegion for ChainProvider {
    fn region(&self) -> Option<Region> {
        self.providers.iter().find_map(|provider| provider.region())
    }
}

pub fn default_provider() -> impl ProvideRegion {
    EnvironmentProvider::new()
}

/// Loads the region from `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct EnvironmentProvider {
    env: Env,
}

impl EnvironmentProvider {
    pub fn new() -> Self {
        EnvironmentProvider { env: Env::real() }
    }

    pub fn with_env(env: Env) -> Self {
        EnvironmentProvider { env }
    }
}

impl ProvideRegion for EnvironmentProvider {
    fn region(&self) -> Option<Region> {
        let region = self
            .env
            .get("AWS_REGION")
            .or_else(|_| self.env.get("AWS_DEFAULT_REGION"))
            .ok()
            .filter(|region| !region.is_empty())
            .map(Region::new);
        tracing::trace!(region = ?region, "loaded region from the environment");
        region
    }
}

#[cfg(test)]
mod test {
    use crate::os_shim_internal::Env;
    use crate::region::{ChainProvider, EnvironmentProvider, ProvideRegion, Region};

    fn provider(vars: &[(&str, &str)]) -> EnvironmentProvider {
        EnvironmentProvider::with_env(Env::from_slice(vars))
    }

    #[test]
    fn no_region() {
        assert_eq!(provider(&[]).region(), None);
        assert_eq!(provider(&[("AWS_REGION", "")]).region(), None);
    }

    #[test]
    fn prefers_aws_region() {
        let env = provider(&[
            ("AWS_REGION", "us-west-2"),
            ("AWS_DEFAULT_REGION", "us-east-1"),
        ]);
        assert_eq!(env.region(), Some(Region::new("us-west-2")));
    }

    #[test]
    fn falls_back_to_default_region() {
        let env = provider(&[("AWS_DEFAULT_REGION", "eu-central-1")]);
        assert_eq!(env.region(), Some(Region::from_static("eu-central-1")));
    }

    #[test]
    fn chain_uses_first_hit() {
        let chain = ChainProvider::first_try(provider(&[])).or_else(Region::new("us-east-2"));
        assert_eq!(chain.region(), Some(Region::new("us-east-2")));
    }
}

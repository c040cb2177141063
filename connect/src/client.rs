/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::error::Error;
use crate::input::*;
use crate::output::*;
use bytes::Bytes;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http::result::{BoxError, SdkError, SdkSuccess};
use tower::{Service, ServiceExt};
use tracing::Instrument;

fn sdk_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<Bytes>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

/// Client for Amazon Connect.
///
/// The transport is any `tower::Service` that sends an `http::Request<Bytes>` and yields the
/// fully loaded `http::Response<Bytes>`. Credentials and signing belong in that service.
///
/// ```rust,no_run
/// # async fn docs() {
/// use bytes::Bytes;
/// use connect::input::ListQueuesInput;
/// use connect::{Client, Config, Region};
///
/// let transport = tower::service_fn(|_request: http::Request<Bytes>| async {
///     Ok::<_, std::convert::Infallible>(http::Response::new(Bytes::from_static(b"{}")))
/// });
/// let conf = Config::builder().region(Region::new("us-east-1")).build();
/// let client = Client::new(conf, transport);
/// let queues = client
///     .list_queues(ListQueuesInput::builder().instance_id("abc").build())
///     .await;
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client<S> {
    conf: Config,
    inner: S,
}

impl<S> Client<S> {
    pub fn new(conf: Config, inner: S) -> Self {
        Client { conf, inner }
    }

    pub fn conf(&self) -> &Config {
        &self.conf
    }
}

macro_rules! client_operations {
    ($($(#[doc = $doc:literal])* $method:ident($input:ident) -> $output:ident;)*) => {
        impl<S> Client<S>
        where
            S: Service<http::Request<Bytes>, Response = http::Response<Bytes>> + Clone,
            S::Error: Into<BoxError>,
        {
            $(
                $(#[doc = $doc])*
                pub async fn $method(
                    &self,
                    input: $input,
                ) -> Result<SdkSuccess<$output>, SdkError<Error>> {
                    let operation = input
                        .make_operation(&self.conf)
                        .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
                    self.call(operation).await
                }
            )*
        }
    };
}

impl<S> Client<S>
where
    S: Service<http::Request<Bytes>, Response = http::Response<Bytes>> + Clone,
    S::Error: Into<BoxError>,
{
    /// Dispatches a constructed operation and parses its response.
    pub async fn call<H, T>(&self, operation: Operation<H>) -> Result<SdkSuccess<T>, SdkError<Error>>
    where
        H: ParseHttpResponse<Output = Result<T, Error>>,
    {
        let name = operation
            .metadata()
            .map(|metadata| metadata.name().to_owned())
            .unwrap_or_default();
        let span = tracing::debug_span!("connect", operation = %name);
        self.dispatch(operation).instrument(span).await
    }

    async fn dispatch<H, T>(&self, operation: Operation<H>) -> Result<SdkSuccess<T>, SdkError<Error>>
    where
        H: ParseHttpResponse<Output = Result<T, Error>>,
    {
        let (request, parts) = operation.into_request_response();
        tracing::debug!(method = %request.method(), uri = %request.uri(), "dispatching request");
        let response = self
            .inner
            .clone()
            .oneshot(request)
            .await
            .map_err(|err| SdkError::DispatchFailure(err.into()))?;
        tracing::debug!(status = %response.status(), "received response");
        let parsed = parts.response_handler.parse_loaded(&response);
        sdk_result(parsed, response)
    }
}

client_operations! {
    create_user(CreateUserInput) -> CreateUserOutput;
    delete_user(DeleteUserInput) -> DeleteUserOutput;
    describe_user(DescribeUserInput) -> DescribeUserOutput;
    describe_user_hierarchy_group(DescribeUserHierarchyGroupInput) -> DescribeUserHierarchyGroupOutput;
    describe_user_hierarchy_structure(DescribeUserHierarchyStructureInput) -> DescribeUserHierarchyStructureOutput;
    get_contact_attributes(GetContactAttributesInput) -> GetContactAttributesOutput;
    get_current_metric_data(GetCurrentMetricDataInput) -> GetCurrentMetricDataOutput;
    get_federation_token(GetFederationTokenInput) -> GetFederationTokenOutput;
    /// Gets historical metric data. See [`GetMetricDataInput`] for the request members.
    get_metric_data(GetMetricDataInput) -> GetMetricDataOutput;
    get_metric_data_v2(GetMetricDataV2Input) -> GetMetricDataV2Output;
    list_contact_flows(ListContactFlowsInput) -> ListContactFlowsOutput;
    list_hours_of_operations(ListHoursOfOperationsInput) -> ListHoursOfOperationsOutput;
    list_phone_numbers(ListPhoneNumbersInput) -> ListPhoneNumbersOutput;
    list_queues(ListQueuesInput) -> ListQueuesOutput;
    list_routing_profiles(ListRoutingProfilesInput) -> ListRoutingProfilesOutput;
    list_security_profiles(ListSecurityProfilesInput) -> ListSecurityProfilesOutput;
    list_tags_for_resource(ListTagsForResourceInput) -> ListTagsForResourceOutput;
    list_user_hierarchy_groups(ListUserHierarchyGroupsInput) -> ListUserHierarchyGroupsOutput;
    list_users(ListUsersInput) -> ListUsersOutput;
    search_users(SearchUsersInput) -> SearchUsersOutput;
    /// Places an outbound call. A `client_token` is generated when the input leaves it unset.
    start_outbound_voice_contact(StartOutboundVoiceContactInput) -> StartOutboundVoiceContactOutput;
    stop_contact(StopContactInput) -> StopContactOutput;
    tag_resource(TagResourceInput) -> TagResourceOutput;
    untag_resource(UntagResourceInput) -> UntagResourceOutput;
    update_contact_attributes(UpdateContactAttributesInput) -> UpdateContactAttributesOutput;
    update_user_hierarchy(UpdateUserHierarchyInput) -> UpdateUserHierarchyOutput;
    update_user_identity_info(UpdateUserIdentityInfoInput) -> UpdateUserIdentityInfoOutput;
    update_user_phone_config(UpdateUserPhoneConfigInput) -> UpdateUserPhoneConfigOutput;
    update_user_routing_profile(UpdateUserRoutingProfileInput) -> UpdateUserRoutingProfileOutput;
    update_user_security_profiles(UpdateUserSecurityProfilesInput) -> UpdateUserSecurityProfilesOutput;
    create_persistent_contact_association(CreatePersistentContactAssociationInput) -> CreatePersistentContactAssociationOutput;
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs.
//!
//! Setters never validate. Required members, label values, `MaxResults` ranges and string
//! lengths are checked by `make_operation`, which turns an input into an HTTP request.

use crate::config::Config;
use crate::error::BuildError;
use crate::model::{
    ContactFlowType, CurrentMetric, Filters, FilterV2, Grouping, HistoricalMetric, MetricV2,
    PhoneNumberCountryCode, PhoneNumberType, QueueType, RehydrationType, UserIdentityInfo,
    UserPhoneConfig, UserSearchCriteria, UserSearchFilter,
};
use crate::operation_ser::{build_request, json_body, label, length, range, required};
use http::Method;
use smithy_http::operation::{Metadata, Operation};
use smithy_http::query;
use smithy_types::{structure, Instant};

const SERVICE: &str = "connect";

fn operation<H>(request: http::Request<bytes::Bytes>, handler: H, name: &'static str) -> Operation<H> {
    Operation::new(request, handler).with_metadata(Metadata::new(name, SERVICE))
}

fn push_paging(
    params: &mut query::Writer,
    next_token: Option<&str>,
    max_results: Option<i32>,
) {
    if let Some(next_token) = next_token {
        params.push_kv("nextToken", &query::fmt_string(next_token));
    }
    if let Some(max_results) = max_results {
        params.push_kv("maxResults", &max_results.to_string());
    }
}

/// Inputs of the `List*` summary operations: a label, paging, and optional type filters.
macro_rules! list_input {
    (
        $(#[doc = $doc:literal])*
        $input:ident, $builder:ident, $handler:ident, $path:literal
        $(, $filter:ident, $set_filter:ident, $get_filter:ident: $filter_ty:ty => $param:literal)*
    ) => {
        structure! {
            $(#[doc = $doc])*
            pub struct $input, $builder {
                /// The identifier of the Amazon Connect instance.
                instance_id, set_instance_id, get_instance_id: Str(String),
                $(
                    $filter, $set_filter, $get_filter: List($filter_ty),
                )*
                /// The token for the next set of results, from a previous response.
                next_token, set_next_token, get_next_token: Str(String),
                /// The maximum number of results to return per page.
                max_results, set_max_results, get_max_results: Prim(i32),
            }
        }

        impl $input {
            pub fn make_operation(
                &self,
                config: &Config,
            ) -> Result<Operation<crate::operation::$handler>, BuildError> {
                let instance_id = label("instance_id", self.instance_id())?;
                length("instance_id", self.instance_id(), 1, 100)?;
                range("max_results", self.max_results(), 1, 1000)?;
                let mut uri = format!(concat!($path, "/{}"), instance_id);
                let mut params = query::Writer::new(&mut uri);
                $(
                    for value in self.$filter().unwrap_or_default() {
                        params.push_kv($param, &query::fmt_string(value));
                    }
                )*
                push_paging(&mut params, self.next_token(), self.max_results());
                let request = build_request(config, Method::GET, &uri, None)?;
                Ok(operation(
                    request,
                    crate::operation::$handler::new(),
                    stringify!($handler),
                ))
            }
        }
    };
}

structure! {
    /// Creates a user account in an Amazon Connect instance.
    pub struct CreateUserInput, CreateUserInputBuilder {
        #[serde(skip)]
        instance_id, set_instance_id, get_instance_id: Str(String),
        /// The user name for the account.
        username, set_username, get_username: Str(String),
        /// Only used when the instance manages identities in Amazon Connect itself.
        password, set_password, get_password: Secret(String),
        identity_info, set_identity_info, get_identity_info: Member(UserIdentityInfo),
        phone_config, set_phone_config, get_phone_config: Member(UserPhoneConfig),
        directory_user_id, set_directory_user_id, get_directory_user_id: Str(String),
        security_profile_ids, set_security_profile_ids, get_security_profile_ids: List(String),
        routing_profile_id, set_routing_profile_id, get_routing_profile_id: Str(String),
        hierarchy_group_id, set_hierarchy_group_id, get_hierarchy_group_id: Str(String),
        tags, set_tags, get_tags: Map(String),
    }
}

impl CreateUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateUser>, BuildError> {
        let instance_id = label("instance_id", self.instance_id())?;
        length("instance_id", self.instance_id(), 1, 100)?;
        length("username", Some(required("username", self.username())?), 1, 100)?;
        required("phone_config", self.phone_config())?;
        required("security_profile_ids", self.security_profile_ids())?;
        required("routing_profile_id", self.routing_profile_id())?;
        let uri = format!("/users/{}", instance_id);
        let request = build_request(config, Method::PUT, &uri, Some(json_body(self)?))?;
        Ok(operation(request, crate::operation::CreateUser::new(), "CreateUser"))
    }
}

structure! {
    pub struct DeleteUserInput, DeleteUserInputBuilder {
        instance_id, set_instance_id, get_instance_id: Str(String),
        user_id, set_user_id, get_user_id: Str(String),
    }
}

impl DeleteUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteUser>, BuildError> {
        let uri = format!(
            "/users/{}/{}",
            label("instance_id", self.instance_id())?,
            label("user_id", self.user_id())?
        );
        length("instance_id", self.instance_id(), 1, 100)?;
        let request = build_request(config, Method::DELETE, &uri, None)?;
        Ok(operation(request, crate::operation::DeleteUser::new(), "DeleteUser"))
    }
}

structure! {
    pub struct DescribeUserInput, DescribeUserInputBuilder {
        instance_id, set_instance_id, get_instance_id: Str(String),
        user_id, set_user_id, get_user_id: Str(String),
    }
}

impl DescribeUserInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeUser>, BuildError> {
        let uri = format!(
            "/users/{}/{}",
            label("instance_id", self.instance_id())?,
            label("user_id", self.user_id())?
        );
        length("instance_id", self.instance_id(), 1, 100)?;
        let request = build_request(config, Method::GET, &uri, None)?;
        Ok(operation(request, crate::operation::DescribeUser::new(), "DescribeUser"))
    }
}

structure! {
    pub struct DescribeUserHierarchyGroupInput, DescribeUserHierarchyGroupInputBuilder {
        hierarchy_group_id, set_hierarchy_group_id, get_hierarchy_group_id: Str(String),
        instance_id, set_instance_id, get_instance_id: Str(String),
    }
}

impl DescribeUserHierarchyGroupInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeUserHierarchyGroup>, BuildError> {
        let uri = format!(
            "/user-hierarchy-groups/{}/{}",
            label("instance_id", self.instance_id())?,
            label("hierarchy_group_id", self.hierarchy_group_id())?
        );
        length("instance_id", self.instance_id(), 1, 100)?;
        let request = build_request(config, Method::GET, &uri, None)?;
        Ok(operation(
            request,
            crate::operation::DescribeUserHierarchyGroup::new(),
            "DescribeUserHierarchyGroup",
        ))
    }
}

structure! {
    pub struct DescribeUserHierarchyStructureInput, DescribeUserHierarchyStructureInputBuilder {
        instance_id, set_instance_id, get_instance_id: Str(String),
    }
}

impl DescribeUserHierarchyStructureInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeUserHierarchyStructure>, BuildError> {
        let uri = format!(
            "/user-hierarchy-structure/{}",
            label("instance_id", self.instance_id())?
        );
        length("instance_id", self.instance_id(), 1, 100)?;
        let request = build_request(config, Method::GET, &uri, None)?;
        Ok(operation(
            request,
            crate::operation::DescribeUserHierarchyStructure::new(),
            "DescribeUserHierarchyStructure",
        ))
    }
}

structure! {
    pub struct GetContactAttributesInput, GetContactAttributesInputBuilder {
        instance_id, set_instance_id, get_instance_id: Str(String),
        /// The identifier of the initial contact.
        initial_contact_id, set_initial_contact_id, get_initial_contact_id: Str(String),
    }
}

impl GetContactAttributesInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetContactAttributes>, BuildError> {
        let uri = format!(
            "/contact/attributes/{}/{}",
            label("instance_id", self.instance_id())?,
            label("initial_contact_id", self.initial_contact_id())?
        );
        length("instance_id", self.instance_id(), 1, 100)?;
        length("initial_contact_id", self.initial_contact_id(), 1, 256)?;
        let request = build_request(config, Method::GET, &uri, None)?;
        Ok(operation(
            request,
            crate::operation::GetContactAttributes::new(),
            "GetContactAttributes",
        ))
    }
}

structure! {
    /// Gets the real-time metric data from the specified Amazon Connect instance.
    pub struct GetCurrentMetricDataInput, GetCurrentMetricDataInputBuilder {
        #[serde(skip)]
        instance_id, set_instance_id, get_instance_id: Str(String),
        /// Queues and channels to include. Only `VOICE` and `CHAT` channels are supported.
        filters, set_filters, get_filters: Member(Filters),
        groupings, set_groupings, get_groupings: List(Grouping),
        current_metrics, set_current_metrics, get_current_metrics: List(CurrentMetric),
        next_token, set_next_token, get_next_token: Str(String),
        max_results, set_max_results, get_max_results: Prim(i32),
    }
}

impl GetCurrentMetricDataInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetCurrentMetricData>, BuildError> {
        let instance_id = label("instance_id", self.instance_id())?;
        length("instance_id", self.instance_id(), 1, 100)?;
        required("filters", self.filters())?;
        required("current_metrics", self.current_metrics())?;
        range("max_results", self.max_results(), 1, 100)?;
        let uri = format!("/metrics/current/{}", instance_id);
        let request = build_request(config, Method::POST, &uri, Some(json_body(self)?))?;
        Ok(operation(
            request,
            crate::operation::GetCurrentMetricData::new(),
            "GetCurrentMetricData",
        ))
    }
}

structure! {
    pub struct GetFederationTokenInput, GetFederationTokenInputBuilder {
        instance_id, set_instance_id, get_instance_id: Str(String),
    }
}

impl GetFederationTokenInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetFederationToken>, BuildError> {
        let uri = format!("/user/federate/{}", label("instance_id", self.instance_id())?);
        length("instance_id", self.instance_id(), 1, 100)?;
        let request = build_request(config, Method::GET, &uri, None)?;
        Ok(operation(
            request,
            crate::operation::GetFederationToken::new(),
            "GetFederationToken",
        ))
    }
}

structure! {
    /// Gets historical metric data from the specified Amazon Connect instance.
    pub struct GetMetricDataInput, GetMetricDataInputBuilder {
        /// The identifier of the Amazon Connect instance.
        #[serde(skip)]
        instance_id, set_instance_id, get_instance_id: Str(String),
        /// The first time stamp of the reporting interval, truncated to 5-minute boundaries.
        start_time, set_start_time, get_start_time: Member(Instant),
        /// The last time stamp of the reporting interval, at most 24 hours after `start_time`.
        end_time, set_end_time, get_end_time: Member(Instant),
        /// The queues, up to 100, or channels to use to filter the metrics returned.
        filters, set_filters, get_filters: Member(Filters),
        /// The grouping applied to the metrics returned.
        ///
        /// With `QUEUE` grouping, metrics are returned per queue; without grouping they are
        /// aggregated over all queues.
        groupings, set_groupings, get_groupings: List(Grouping),
        /// The metrics to retrieve. Each needs a name, a unit and a statistic.
        historical_metrics, set_historical_metrics, get_historical_metrics: List(HistoricalMetric),
        next_token, set_next_token, get_next_token: Str(String),
        /// The maximum number of results to return per page, 1 to 100.
        max_results, set_max_results, get_max_results: Prim(i32),
    }
}

impl GetMetricDataInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetMetricData>, BuildError> {
        let instance_id = label("instance_id", self.instance_id())?;
        length("instance_id", self.instance_id(), 1, 100)?;
        required("start_time", self.start_time())?;
        required("end_time", self.end_time())?;
        required("filters", self.filters())?;
        required("historical_metrics", self.historical_metrics())?;
        range("max_results", self.max_results(), 1, 100)?;
        let uri = format!("/metrics/historical/{}", instance_id);
        let request = build_request(config, Method::POST, &uri, Some(json_body(self)?))?;
        Ok(operation(
            request,
            crate::operation::GetMetricData::new(),
            "GetMetricData",
        ))
    }
}

structure! {
    /// Gets metric data for an instance or traffic distribution group, including metrics
    /// the historical `GetMetricData` operation does not offer.
    pub struct GetMetricDataV2Input, GetMetricDataV2InputBuilder {
        /// The ARN of the instance or traffic distribution group.
        resource_arn, set_resource_arn, get_resource_arn: Str(String),
        start_time, set_start_time, get_start_time: Member(Instant),
        end_time, set_end_time, get_end_time: Member(Instant),
        /// Filters such as `QUEUE`, `ROUTING_PROFILE` or `AGENT`. At least one queue, routing
        /// profile or agent filter is required.
        filters, set_filters, get_filters: List(FilterV2),
        groupings, set_groupings, get_groupings: List(String),
        metrics, set_metrics, get_metrics: List(MetricV2),
        next_token, set_next_token, get_next_token: Str(String),
        max_results, set_max_results, get_max_results: Prim(i32),
    }
}

impl GetMetricDataV2Input {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetMetricDataV2>, BuildError> {
        required("resource_arn", self.resource_arn())?;
        required("start_time", self.start_time())?;
        required("end_time", self.end_time())?;
        required("filters", self.filters())?;
        required("metrics", self.metrics())?;
        length("next_token", self.next_token(), 1, 2500)?;
        range("max_results", self.max_results(), 1, 100)?;
        let request = build_request(config, Method::POST, "/metrics/data", Some(json_body(self)?))?;
        Ok(operation(
            request,
            crate::operation::GetMetricDataV2::new(),
            "GetMetricDataV2",
        ))
    }
}

list_input!(
    /// Lists the contact flows of an instance, optionally by type.
    ListContactFlowsInput, ListContactFlowsInputBuilder, ListContactFlows, "/contact-flows-summary",
    contact_flow_types, set_contact_flow_types, get_contact_flow_types: ContactFlowType => "contactFlowTypes"
);

list_input!(
    ListHoursOfOperationsInput, ListHoursOfOperationsInputBuilder, ListHoursOfOperations, "/hours-of-operations-summary"
);

list_input!(
    /// Lists the phone numbers claimed by an instance.
    ListPhoneNumbersInput, ListPhoneNumbersInputBuilder, ListPhoneNumbers, "/phone-numbers-summary",
    phone_number_types, set_phone_number_types, get_phone_number_types: PhoneNumberType => "phoneNumberTypes",
    phone_number_country_codes, set_phone_number_country_codes, get_phone_number_country_codes: PhoneNumberCountryCode => "phoneNumberCountryCodes"
);

list_input!(
    ListQueuesInput, ListQueuesInputBuilder, ListQueues, "/queues-summary",
    queue_types, set_queue_types, get_queue_types: QueueType => "queueTypes"
);

list_input!(
    ListRoutingProfilesInput, ListRoutingProfilesInputBuilder, ListRoutingProfiles, "/routing-profiles-summary"
);

list_input!(
    ListSecurityProfilesInput, ListSecurityProfilesInputBuilder, ListSecurityProfiles, "/security-profiles-summary"
);

list_input!(
    ListUserHierarchyGroupsInput, ListUserHierarchyGroupsInputBuilder, ListUserHierarchyGroups, "/user-hierarchy-groups-summary"
);

list_input!(
    /// Lists the user accounts of an instance.
    ListUsersInput, ListUsersInputBuilder, ListUsers, "/users-summary"
);

structure! {
    pub struct ListTagsForResourceInput, ListTagsForResourceInputBuilder {
        /// The ARN of the resource.
        resource_arn, set_resource_arn, get_resource_arn: Str(String),
    }
}

impl ListTagsForResourceInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListTagsForResource>, BuildError> {
        let uri = format!("/tags/{}", label("resource_arn", self.resource_arn())?);
        let request = build_request(config, Method::GET, &uri, None)?;
        Ok(operation(
            request,
            crate::operation::ListTagsForResource::new(),
            "ListTagsForResource",
        ))
    }
}

structure! {
    /// Searches users in an instance, with optional tag and criteria filters.
    pub struct SearchUsersInput, SearchUsersInputBuilder {
        instance_id, set_instance_id, get_instance_id: Str(String),
        next_token, set_next_token, get_next_token: Str(String),
        max_results, set_max_results, get_max_results: Prim(i32),
        search_filter, set_search_filter, get_search_filter: Member(UserSearchFilter),
        search_criteria, set_search_criteria, get_search_criteria: Member(UserSearchCriteria),
    }
}

impl SearchUsersInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::SearchUsers>, BuildError> {
        length("instance_id", self.instance_id(), 1, 100)?;
        length("next_token", self.next_token(), 1, 2500)?;
        range("max_results", self.max_results(), 1, 100)?;
        let request = build_request(config, Method::POST, "/search-users", Some(json_body(self)?))?;
        Ok(operation(request, crate::operation::SearchUsers::new(), "SearchUsers"))
    }
}

structure! {
    /// Places an outbound call to a contact, then starts the contact flow.
    ///
    /// `client_token` is filled with a random UUID when left unset.
    pub struct StartOutboundVoiceContactInput, StartOutboundVoiceContactInputBuilder {
        /// The phone number of the customer, in E.164 format.
        destination_phone_number, set_destination_phone_number, get_destination_phone_number: Str(String),
        contact_flow_id, set_contact_flow_id, get_contact_flow_id: Str(String),
        instance_id, set_instance_id, get_instance_id: Str(String),
        client_token, set_client_token, get_client_token: Str(String),
        source_phone_number, set_source_phone_number, get_source_phone_number: Str(String),
        /// The queue for the call. Takes precedence over the queue in the contact flow.
        queue_id, set_queue_id, get_queue_id: Str(String),
        /// Key-value pairs made available to the contact flow as contact attributes.
        attributes, set_attributes, get_attributes: Map(String),
    }
}

impl StartOutboundVoiceContactInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::StartOutboundVoiceContact>, BuildError> {
        required("destination_phone_number", self.destination_phone_number())?;
        length("contact_flow_id", Some(required("contact_flow_id", self.contact_flow_id())?), 0, 500)?;
        length("instance_id", Some(required("instance_id", self.instance_id())?), 1, 100)?;
        length("client_token", self.client_token(), 0, 500)?;
        let mut input = self.clone();
        if input.client_token.is_none() {
            input.client_token = Some(config.make_token());
        }
        let request = build_request(
            config,
            Method::PUT,
            "/contact/outbound-voice",
            Some(json_body(&input)?),
        )?;
        Ok(operation(
            request,
            crate::operation::StartOutboundVoiceContact::new(),
            "StartOutboundVoiceContact",
        ))
    }
}

structure! {
    pub struct StopContactInput, StopContactInputBuilder {
        contact_id, set_contact_id, get_contact_id: Str(String),
        instance_id, set_instance_id, get_instance_id: Str(String),
    }
}

impl StopContactInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::StopContact>, BuildError> {
        length("contact_id", Some(required("contact_id", self.contact_id())?), 1, 256)?;
        length("instance_id", Some(required("instance_id", self.instance_id())?), 1, 100)?;
        let request = build_request(config, Method::POST, "/contact/stop", Some(json_body(self)?))?;
        Ok(operation(request, crate::operation::StopContact::new(), "StopContact"))
    }
}

structure! {
    pub struct TagResourceInput, TagResourceInputBuilder {
        #[serde(skip)]
        resource_arn, set_resource_arn, get_resource_arn: Str(String),
        /// One or more tags, e.g. `{"tags": {"key1": "value1"}}`.
        #[serde(rename = "tags")]
        tags, set_tags, get_tags: Map(String),
    }
}

impl TagResourceInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::TagResource>, BuildError> {
        let uri = format!("/tags/{}", label("resource_arn", self.resource_arn())?);
        required("tags", self.tags())?;
        let request = build_request(config, Method::POST, &uri, Some(json_body(self)?))?;
        Ok(operation(request, crate::operation::TagResource::new(), "TagResource"))
    }
}

structure! {
    pub struct UntagResourceInput, UntagResourceInputBuilder {
        resource_arn, set_resource_arn, get_resource_arn: Str(String),
        /// The tag keys to remove.
        tag_keys, set_tag_keys, get_tag_keys: List(String),
    }
}

impl UntagResourceInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::UntagResource>, BuildError> {
        let mut uri = format!("/tags/{}", label("resource_arn", self.resource_arn())?);
        let tag_keys = required("tag_keys", self.tag_keys())?;
        let mut params = query::Writer::new(&mut uri);
        for tag_key in tag_keys {
            params.push_kv("tagKeys", &query::fmt_string(tag_key));
        }
        let request = build_request(config, Method::DELETE, &uri, None)?;
        Ok(operation(request, crate::operation::UntagResource::new(), "UntagResource"))
    }
}

structure! {
    /// Creates or updates the contact attributes of a contact.
    pub struct UpdateContactAttributesInput, UpdateContactAttributesInputBuilder {
        initial_contact_id, set_initial_contact_id, get_initial_contact_id: Str(String),
        instance_id, set_instance_id, get_instance_id: Str(String),
        attributes, set_attributes, get_attributes: Map(String),
    }
}

impl UpdateContactAttributesInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::UpdateContactAttributes>, BuildError> {
        length(
            "initial_contact_id",
            Some(required("initial_contact_id", self.initial_contact_id())?),
            1,
            256,
        )?;
        length("instance_id", Some(required("instance_id", self.instance_id())?), 1, 100)?;
        required("attributes", self.attributes())?;
        let request = build_request(
            config,
            Method::POST,
            "/contact/attributes",
            Some(json_body(self)?),
        )?;
        Ok(operation(
            request,
            crate::operation::UpdateContactAttributes::new(),
            "UpdateContactAttributes",
        ))
    }
}

/// Inputs of the `UpdateUser*` operations: two labels and one body member.
macro_rules! update_user_input {
    (
        $(#[doc = $doc:literal])*
        $input:ident, $builder:ident, $handler:ident, $suffix:literal,
        $field:ident, $set_field:ident, $get_field:ident: $kind:ident($ty:ty), $required:literal
    ) => {
        structure! {
            $(#[doc = $doc])*
            pub struct $input, $builder {
                $field, $set_field, $get_field: $kind($ty),
                #[serde(skip)]
                user_id, set_user_id, get_user_id: Str(String),
                #[serde(skip)]
                instance_id, set_instance_id, get_instance_id: Str(String),
            }
        }

        impl $input {
            pub fn make_operation(
                &self,
                config: &Config,
            ) -> Result<Operation<crate::operation::$handler>, BuildError> {
                let uri = format!(
                    concat!("/users/{}/{}/", $suffix),
                    label("instance_id", self.instance_id())?,
                    label("user_id", self.user_id())?
                );
                length("instance_id", self.instance_id(), 1, 100)?;
                if $required {
                    required(stringify!($field), self.$field())?;
                }
                let request = build_request(config, Method::POST, &uri, Some(json_body(self)?))?;
                Ok(operation(
                    request,
                    crate::operation::$handler::new(),
                    stringify!($handler),
                ))
            }
        }
    };
}

update_user_input!(
    /// Assigns a hierarchy group to a user. An unset group removes the assignment.
    UpdateUserHierarchyInput, UpdateUserHierarchyInputBuilder, UpdateUserHierarchy, "hierarchy",
    hierarchy_group_id, set_hierarchy_group_id, get_hierarchy_group_id: Str(String), false
);

update_user_input!(
    UpdateUserIdentityInfoInput, UpdateUserIdentityInfoInputBuilder, UpdateUserIdentityInfo, "identity-info",
    identity_info, set_identity_info, get_identity_info: Member(UserIdentityInfo), true
);

update_user_input!(
    UpdateUserPhoneConfigInput, UpdateUserPhoneConfigInputBuilder, UpdateUserPhoneConfig, "phone-config",
    phone_config, set_phone_config, get_phone_config: Member(UserPhoneConfig), true
);

update_user_input!(
    UpdateUserRoutingProfileInput, UpdateUserRoutingProfileInputBuilder, UpdateUserRoutingProfile, "routing-profile",
    routing_profile_id, set_routing_profile_id, get_routing_profile_id: Str(String), true
);

update_user_input!(
    /// Replaces the security profiles assigned to a user.
    UpdateUserSecurityProfilesInput, UpdateUserSecurityProfilesInputBuilder, UpdateUserSecurityProfiles, "security-profiles",
    security_profile_ids, set_security_profile_ids, get_security_profile_ids: List(String), true
);

structure! {
    /// Links a new chat contact to a past one so the chat history carries over.
    pub struct CreatePersistentContactAssociationInput, CreatePersistentContactAssociationInputBuilder {
        #[serde(skip)]
        instance_id, set_instance_id, get_instance_id: Str(String),
        /// The contact the API is being called from.
        #[serde(skip)]
        initial_contact_id, set_initial_contact_id, get_initial_contact_id: Str(String),
        rehydration_type, set_rehydration_type, get_rehydration_type: Member(RehydrationType),
        /// The contact the persistent chat session starts from.
        source_contact_id, set_source_contact_id, get_source_contact_id: Str(String),
        client_token, set_client_token, get_client_token: Str(String),
    }
}

impl CreatePersistentContactAssociationInput {
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreatePersistentContactAssociation>, BuildError> {
        let uri = format!(
            "/contact/persistent-contact-association/{}/{}",
            label("instance_id", self.instance_id())?,
            label("initial_contact_id", self.initial_contact_id())?
        );
        length("instance_id", self.instance_id(), 1, 100)?;
        length("initial_contact_id", self.initial_contact_id(), 1, 256)?;
        required("rehydration_type", self.rehydration_type())?;
        length(
            "source_contact_id",
            Some(required("source_contact_id", self.source_contact_id())?),
            1,
            256,
        )?;
        length("client_token", self.client_token(), 0, 500)?;
        let mut input = self.clone();
        if input.client_token.is_none() {
            input.client_token = Some(config.make_token());
        }
        let request = build_request(config, Method::POST, &uri, Some(json_body(&input)?))?;
        Ok(operation(
            request,
            crate::operation::CreatePersistentContactAssociation::new(),
            "CreatePersistentContactAssociation",
        ))
    }
}

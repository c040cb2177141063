/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation outputs, read from the JSON response body.

use crate::model::{
    ContactFlowSummary, Credentials, CurrentMetricResult, HierarchyGroup,
    HierarchyGroupSummary, HierarchyStructure, HistoricalMetricResult, HoursOfOperationSummary,
    MetricResultV2, PhoneNumberSummary, QueueSummary, RoutingProfileSummary,
    SecurityProfileSummary, User, UserSearchSummary, UserSummary,
};
use smithy_types::{structure, Instant};

/// Outputs of operations whose response carries no members.
macro_rules! empty_output {
    ($($name:ident, $builder:ident;)*) => {
        $(
            structure! {
                pub struct $name, $builder {}
            }
        )*
    };
}

empty_output! {
    DeleteUserOutput, DeleteUserOutputBuilder;
    StopContactOutput, StopContactOutputBuilder;
    TagResourceOutput, TagResourceOutputBuilder;
    UntagResourceOutput, UntagResourceOutputBuilder;
    UpdateContactAttributesOutput, UpdateContactAttributesOutputBuilder;
    UpdateUserHierarchyOutput, UpdateUserHierarchyOutputBuilder;
    UpdateUserIdentityInfoOutput, UpdateUserIdentityInfoOutputBuilder;
    UpdateUserPhoneConfigOutput, UpdateUserPhoneConfigOutputBuilder;
    UpdateUserRoutingProfileOutput, UpdateUserRoutingProfileOutputBuilder;
    UpdateUserSecurityProfilesOutput, UpdateUserSecurityProfilesOutputBuilder;
}

structure! {
    pub struct CreateUserOutput, CreateUserOutputBuilder {
        /// The identifier of the new user account.
        user_id, set_user_id, get_user_id: Str(String),
        user_arn, set_user_arn, get_user_arn: Str(String),
    }
}

structure! {
    pub struct DescribeUserOutput, DescribeUserOutputBuilder {
        user, set_user, get_user: Member(User),
    }
}

structure! {
    pub struct DescribeUserHierarchyGroupOutput, DescribeUserHierarchyGroupOutputBuilder {
        hierarchy_group, set_hierarchy_group, get_hierarchy_group: Member(HierarchyGroup),
    }
}

structure! {
    pub struct DescribeUserHierarchyStructureOutput, DescribeUserHierarchyStructureOutputBuilder {
        hierarchy_structure, set_hierarchy_structure, get_hierarchy_structure: Member(HierarchyStructure),
    }
}

structure! {
    pub struct GetContactAttributesOutput, GetContactAttributesOutputBuilder {
        /// Information about the attributes.
        attributes, set_attributes, get_attributes: Map(String),
    }
}

structure! {
    pub struct GetCurrentMetricDataOutput, GetCurrentMetricDataOutputBuilder {
        /// Present when more results are available. Valid for 5 minutes.
        next_token, set_next_token, get_next_token: Str(String),
        metric_results, set_metric_results, get_metric_results: List(CurrentMetricResult),
        /// When the data was retrieved, in UTC.
        data_snapshot_time, set_data_snapshot_time, get_data_snapshot_time: Member(Instant),
        approximate_total_count, set_approximate_total_count, get_approximate_total_count: Prim(i64),
    }
}

structure! {
    pub struct GetFederationTokenOutput, GetFederationTokenOutputBuilder {
        credentials, set_credentials, get_credentials: Member(Credentials),
        sign_in_url, set_sign_in_url, get_sign_in_url: Str(String),
        user_arn, set_user_arn, get_user_arn: Str(String),
        user_id, set_user_id, get_user_id: Str(String),
    }
}

structure! {
    pub struct GetMetricDataOutput, GetMetricDataOutputBuilder {
        next_token, set_next_token, get_next_token: Str(String),
        /// One result per queue when grouped by queue, otherwise a single aggregate result.
        metric_results, set_metric_results, get_metric_results: List(HistoricalMetricResult),
    }
}

structure! {
    pub struct GetMetricDataV2Output, GetMetricDataV2OutputBuilder {
        next_token, set_next_token, get_next_token: Str(String),
        metric_results, set_metric_results, get_metric_results: List(MetricResultV2),
    }
}

/// Outputs of the `List*` summary operations: one summary list and a paging token.
macro_rules! list_output {
    ($($name:ident, $builder:ident, $list:ident, $set_list:ident, $get_list:ident: $summary:ty;)*) => {
        $(
            structure! {
                pub struct $name, $builder {
                    $list, $set_list, $get_list: List($summary),
                    /// Present when more results are available.
                    next_token, set_next_token, get_next_token: Str(String),
                }
            }
        )*
    };
}

list_output! {
    ListContactFlowsOutput, ListContactFlowsOutputBuilder,
        contact_flow_summary_list, set_contact_flow_summary_list, get_contact_flow_summary_list: ContactFlowSummary;
    ListHoursOfOperationsOutput, ListHoursOfOperationsOutputBuilder,
        hours_of_operation_summary_list, set_hours_of_operation_summary_list, get_hours_of_operation_summary_list: HoursOfOperationSummary;
    ListPhoneNumbersOutput, ListPhoneNumbersOutputBuilder,
        phone_number_summary_list, set_phone_number_summary_list, get_phone_number_summary_list: PhoneNumberSummary;
    ListQueuesOutput, ListQueuesOutputBuilder,
        queue_summary_list, set_queue_summary_list, get_queue_summary_list: QueueSummary;
    ListRoutingProfilesOutput, ListRoutingProfilesOutputBuilder,
        routing_profile_summary_list, set_routing_profile_summary_list, get_routing_profile_summary_list: RoutingProfileSummary;
    ListSecurityProfilesOutput, ListSecurityProfilesOutputBuilder,
        security_profile_summary_list, set_security_profile_summary_list, get_security_profile_summary_list: SecurityProfileSummary;
    ListUserHierarchyGroupsOutput, ListUserHierarchyGroupsOutputBuilder,
        user_hierarchy_group_summary_list, set_user_hierarchy_group_summary_list, get_user_hierarchy_group_summary_list: HierarchyGroupSummary;
    ListUsersOutput, ListUsersOutputBuilder,
        user_summary_list, set_user_summary_list, get_user_summary_list: UserSummary;
}

structure! {
    pub struct ListTagsForResourceOutput, ListTagsForResourceOutputBuilder {
        #[serde(rename = "tags")]
        tags, set_tags, get_tags: Map(String),
    }
}

structure! {
    pub struct SearchUsersOutput, SearchUsersOutputBuilder {
        users, set_users, get_users: List(UserSearchSummary),
        next_token, set_next_token, get_next_token: Str(String),
        /// The total number of users matching the search, which may be approximate.
        approximate_total_count, set_approximate_total_count, get_approximate_total_count: Prim(i64),
    }
}

structure! {
    pub struct StartOutboundVoiceContactOutput, StartOutboundVoiceContactOutputBuilder {
        /// The identifier of this contact within the Amazon Connect instance.
        contact_id, set_contact_id, get_contact_id: Str(String),
    }
}

structure! {
    pub struct CreatePersistentContactAssociationOutput, CreatePersistentContactAssociationOutputBuilder {
        /// The contact the new chat continues from.
        continued_from_contact_id, set_continued_from_contact_id, get_continued_from_contact_id: Str(String),
    }
}

#[cfg(test)]
mod test {
    use crate::model::{Channel, HistoricalMetricName, QueueType};
    use crate::output::*;

    #[test]
    fn metric_results_deserialize() {
        let output: GetMetricDataOutput = serde_json::from_str(
            r#"{
                "NextToken": "t-2",
                "MetricResults": [{
                    "Dimensions": {"Queue": {"Id": "q1", "Arn": "arn:q1"}, "Channel": "VOICE"},
                    "Collections": [{
                        "Metric": {"Name": "CONTACTS_HANDLED", "Statistic": "SUM", "Unit": "COUNT"},
                        "Value": 12.0
                    }]
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(output.next_token(), Some("t-2"));
        let result = &output.metric_results().unwrap()[0];
        let dimensions = result.dimensions().unwrap();
        assert_eq!(dimensions.queue().and_then(|q| q.id()), Some("q1"));
        assert_eq!(dimensions.channel(), Some(&Channel::Voice));
        let data = &result.collections().unwrap()[0];
        assert_eq!(
            data.metric().and_then(|m| m.name()),
            Some(&HistoricalMetricName::ContactsHandled)
        );
        assert_eq!(data.value(), Some(12.0));
    }

    #[test]
    fn snapshot_time_accepts_epoch_seconds() {
        let output: GetCurrentMetricDataOutput =
            serde_json::from_str(r#"{"DataSnapshotTime": 1600000000.5, "MetricResults": []}"#)
                .unwrap();
        let time = output.data_snapshot_time().unwrap();
        assert_eq!(time.epoch_seconds(), 1_600_000_000);
        assert_eq!(time.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(output.metric_results(), Some(&[][..]));
        assert_eq!(output.next_token(), None);
    }

    #[test]
    fn summaries_and_unknown_values() {
        let output: ListQueuesOutput = serde_json::from_str(
            r#"{"QueueSummaryList": [{"Id": "q1", "Name": "BasicQueue", "QueueType": "OVERFLOW"}], "Ignored": true}"#,
        )
        .unwrap();
        let queue = &output.queue_summary_list().unwrap()[0];
        assert_eq!(queue.name(), Some("BasicQueue"));
        assert_eq!(queue.queue_type(), Some(&QueueType::Unknown("OVERFLOW".into())));
    }

    #[test]
    fn tags_use_lower_case_key() {
        let output: ListTagsForResourceOutput =
            serde_json::from_str(r#"{"tags": {"team": "support"}}"#).unwrap();
        assert_eq!(
            output.tags().and_then(|tags| tags.get("team")).map(String::as_str),
            Some("support")
        );
    }

    #[test]
    fn federation_credentials_are_redacted() {
        let output: GetFederationTokenOutput = serde_json::from_str(
            r#"{"Credentials": {"AccessToken": "a-secret", "AccessTokenExpiration": 1600000000}}"#,
        )
        .unwrap();
        assert_eq!(
            output.credentials().and_then(|c| c.access_token()),
            Some("a-secret")
        );
        assert!(!format!("{:?}", output).contains("a-secret"));
    }
}

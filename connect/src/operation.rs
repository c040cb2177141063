/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response handlers, one per operation.

use crate::error::Error;
use crate::operation_deser::parse_response;
use bytes::Bytes;
use smithy_http::response::ParseHttpResponse;

macro_rules! operations {
    ($($(#[doc = $doc:literal])* $name:ident => $output:ident;)*) => {
        $(
            $(#[doc = $doc])*
            #[derive(Clone, Debug, Default)]
            pub struct $name {
                _private: (),
            }

            impl $name {
                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl ParseHttpResponse for $name {
                type Output = Result<crate::output::$output, Error>;

                fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output {
                    parse_response(response)
                }
            }
        )*
    };
}

operations! {
    /// Creates a user account for the specified Amazon Connect instance.
    CreateUser => CreateUserOutput;
    /// Deletes a user account from the specified Amazon Connect instance.
    DeleteUser => DeleteUserOutput;
    DescribeUser => DescribeUserOutput;
    DescribeUserHierarchyGroup => DescribeUserHierarchyGroupOutput;
    DescribeUserHierarchyStructure => DescribeUserHierarchyStructureOutput;
    /// Retrieves the contact attributes of a contact.
    GetContactAttributes => GetContactAttributesOutput;
    /// Gets real-time metric data for queues and channels.
    GetCurrentMetricData => GetCurrentMetricDataOutput;
    /// Retrieves a token for federation.
    GetFederationToken => GetFederationTokenOutput;
    /// Gets historical metric data for queues and channels.
    GetMetricData => GetMetricDataOutput;
    GetMetricDataV2 => GetMetricDataV2Output;
    ListContactFlows => ListContactFlowsOutput;
    ListHoursOfOperations => ListHoursOfOperationsOutput;
    ListPhoneNumbers => ListPhoneNumbersOutput;
    ListQueues => ListQueuesOutput;
    ListRoutingProfiles => ListRoutingProfilesOutput;
    ListSecurityProfiles => ListSecurityProfilesOutput;
    ListTagsForResource => ListTagsForResourceOutput;
    ListUserHierarchyGroups => ListUserHierarchyGroupsOutput;
    ListUsers => ListUsersOutput;
    SearchUsers => SearchUsersOutput;
    /// Places an outbound call to a contact.
    StartOutboundVoiceContact => StartOutboundVoiceContactOutput;
    /// Ends the specified contact.
    StopContact => StopContactOutput;
    TagResource => TagResourceOutput;
    UntagResource => UntagResourceOutput;
    UpdateContactAttributes => UpdateContactAttributesOutput;
    UpdateUserHierarchy => UpdateUserHierarchyOutput;
    UpdateUserIdentityInfo => UpdateUserIdentityInfoOutput;
    UpdateUserPhoneConfig => UpdateUserPhoneConfigOutput;
    UpdateUserRoutingProfile => UpdateUserRoutingProfileOutput;
    UpdateUserSecurityProfiles => UpdateUserSecurityProfilesOutput;
    /// Enables persistent chat by linking a new chat contact to a past one.
    CreatePersistentContactAssociation => CreatePersistentContactAssociationOutput;
}

#[cfg(test)]
mod test {
    use crate::error::ErrorKind;
    use crate::operation::{DescribeUser, ListUsers, StopContact};
    use bytes::Bytes;
    use smithy_http::response::ParseHttpResponse;

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .header("x-amzn-RequestId", "5fd4cbd2-b3d0-4b1f-9b0a-6d7c52e6c1c2")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn parses_success_output() {
        let output = DescribeUser::new()
            .parse_loaded(&response(
                200,
                r#"{"User": {"Id": "u-1", "Username": "jdoe", "PhoneConfig": {"PhoneType": "SOFT_PHONE"}}}"#,
            ))
            .unwrap();
        let user = output.user().unwrap();
        assert_eq!(user.username(), Some("jdoe"));
        assert_eq!(
            user.phone_config().and_then(|c| c.phone_type()),
            Some(&crate::model::PhoneType::SoftPhone)
        );
    }

    #[test]
    fn empty_body_is_empty_output() {
        let output = StopContact::new().parse_loaded(&response(200, "")).unwrap();
        assert_eq!(output, crate::output::StopContactOutput::builder().build());
    }

    #[test]
    fn modeled_error() {
        let err = ListUsers::new()
            .parse_loaded(&response(
                400,
                r#"{"__type": "com.amazonaws.connect#InvalidParameterException", "Message": "bad token"}"#,
            ))
            .expect_err("400 is an error");
        assert!(matches!(err.kind, ErrorKind::InvalidParameterException));
        assert_eq!(err.message(), Some("bad token"));
        assert_eq!(err.request_id(), Some("5fd4cbd2-b3d0-4b1f-9b0a-6d7c52e6c1c2"));
    }

    #[test]
    fn malformed_success_body_is_unhandled() {
        let err = ListUsers::new()
            .parse_loaded(&response(200, "{not json"))
            .expect_err("body is not JSON");
        assert!(matches!(err.kind, ErrorKind::Unhandled(_)));
        assert_eq!(err.meta().request_id(), Some("5fd4cbd2-b3d0-4b1f-9b0a-6d7c52e6c1c2"));
    }
}

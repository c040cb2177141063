/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Enums and nested structures shared by operation inputs and outputs.

use smithy_types::{string_enum, structure, Instant};

string_enum! {
    /// The channel a contact arrives on.
    pub enum Channel {
        Voice => "VOICE",
        Chat => "CHAT",
        Task => "TASK",
    }
}

string_enum! {
    /// How historical or current metrics are grouped.
    pub enum Grouping {
        Queue => "QUEUE",
        Channel => "CHANNEL",
        RoutingProfile => "ROUTING_PROFILE",
    }
}

string_enum! {
    pub enum Statistic {
        Sum => "SUM",
        Max => "MAX",
        Avg => "AVG",
    }
}

string_enum! {
    pub enum Unit {
        Seconds => "SECONDS",
        Count => "COUNT",
        Percent => "PERCENT",
    }
}

string_enum! {
    /// Threshold comparison operator. Only `LT` (less than) is supported.
    pub enum Comparison {
        Lt => "LT",
    }
}

string_enum! {
    /// Historical metrics available through `GetMetricData`.
    pub enum HistoricalMetricName {
        ContactsQueued => "CONTACTS_QUEUED",
        ContactsHandled => "CONTACTS_HANDLED",
        ContactsAbandoned => "CONTACTS_ABANDONED",
        ContactsConsulted => "CONTACTS_CONSULTED",
        ContactsAgentHungUpFirst => "CONTACTS_AGENT_HUNG_UP_FIRST",
        ContactsHandledIncoming => "CONTACTS_HANDLED_INCOMING",
        ContactsHandledOutbound => "CONTACTS_HANDLED_OUTBOUND",
        ContactsHoldAbandons => "CONTACTS_HOLD_ABANDONS",
        ContactsTransferredIn => "CONTACTS_TRANSFERRED_IN",
        ContactsTransferredOut => "CONTACTS_TRANSFERRED_OUT",
        ContactsTransferredInFromQueue => "CONTACTS_TRANSFERRED_IN_FROM_QUEUE",
        ContactsTransferredOutFromQueue => "CONTACTS_TRANSFERRED_OUT_FROM_QUEUE",
        ContactsMissed => "CONTACTS_MISSED",
        CallbackContactsHandled => "CALLBACK_CONTACTS_HANDLED",
        ApiContactsHandled => "API_CONTACTS_HANDLED",
        Occupancy => "OCCUPANCY",
        HandleTime => "HANDLE_TIME",
        AfterContactWorkTime => "AFTER_CONTACT_WORK_TIME",
        QueuedTime => "QUEUED_TIME",
        AbandonTime => "ABANDON_TIME",
        QueueAnswerTime => "QUEUE_ANSWER_TIME",
        HoldTime => "HOLD_TIME",
        InteractionTime => "INTERACTION_TIME",
        InteractionAndHoldTime => "INTERACTION_AND_HOLD_TIME",
        ServiceLevel => "SERVICE_LEVEL",
    }
}

string_enum! {
    /// Real-time metrics available through `GetCurrentMetricData`.
    pub enum CurrentMetricName {
        AgentsOnline => "AGENTS_ONLINE",
        AgentsAvailable => "AGENTS_AVAILABLE",
        AgentsOnCall => "AGENTS_ON_CALL",
        AgentsNonProductive => "AGENTS_NON_PRODUCTIVE",
        AgentsAfterContactWork => "AGENTS_AFTER_CONTACT_WORK",
        AgentsError => "AGENTS_ERROR",
        AgentsStaffed => "AGENTS_STAFFED",
        ContactsInQueue => "CONTACTS_IN_QUEUE",
        OldestContactAge => "OLDEST_CONTACT_AGE",
        ContactsScheduled => "CONTACTS_SCHEDULED",
        AgentsOnContact => "AGENTS_ON_CONTACT",
        SlotsActive => "SLOTS_ACTIVE",
        SlotsAvailable => "SLOTS_AVAILABLE",
    }
}

string_enum! {
    /// Which past contacts a persistent chat is rehydrated from.
    pub enum RehydrationType {
        /// Rehydrate the whole chat history, starting from the first contact.
        EntirePastSession => "ENTIRE_PAST_SESSION",
        /// Rehydrate from the given source contact onward.
        FromSegment => "FROM_SEGMENT",
    }
}

string_enum! {
    pub enum PhoneType {
        SoftPhone => "SOFT_PHONE",
        DeskPhone => "DESK_PHONE",
    }
}

string_enum! {
    pub enum ContactFlowType {
        ContactFlow => "CONTACT_FLOW",
        CustomerQueue => "CUSTOMER_QUEUE",
        CustomerHold => "CUSTOMER_HOLD",
        CustomerWhisper => "CUSTOMER_WHISPER",
        AgentHold => "AGENT_HOLD",
        AgentWhisper => "AGENT_WHISPER",
        OutboundWhisper => "OUTBOUND_WHISPER",
        AgentTransfer => "AGENT_TRANSFER",
        QueueTransfer => "QUEUE_TRANSFER",
    }
}

string_enum! {
    pub enum PhoneNumberType {
        TollFree => "TOLL_FREE",
        Did => "DID",
    }
}

string_enum! {
    /// ISO 3166-1 alpha-2 country code of a claimed phone number.
    pub enum PhoneNumberCountryCode {
        Af => "AF",
        Al => "AL",
        Dz => "DZ",
        As => "AS",
        Ad => "AD",
        Ao => "AO",
        Ai => "AI",
        Aq => "AQ",
        Ag => "AG",
        Ar => "AR",
        Am => "AM",
        Aw => "AW",
        Au => "AU",
        At => "AT",
        Az => "AZ",
        Bs => "BS",
        Bh => "BH",
        Bd => "BD",
        Bb => "BB",
        By => "BY",
        Be => "BE",
        Bz => "BZ",
        Bj => "BJ",
        Bm => "BM",
        Bt => "BT",
        Bo => "BO",
        Ba => "BA",
        Bw => "BW",
        Br => "BR",
        Io => "IO",
        Vg => "VG",
        Bn => "BN",
        Bg => "BG",
        Bf => "BF",
        Bi => "BI",
        Kh => "KH",
        Cm => "CM",
        Ca => "CA",
        Cv => "CV",
        Ky => "KY",
        Cf => "CF",
        Td => "TD",
        Cl => "CL",
        Cn => "CN",
        Cx => "CX",
        Cc => "CC",
        Co => "CO",
        Km => "KM",
        Ck => "CK",
        Cr => "CR",
        Hr => "HR",
        Cu => "CU",
        Cw => "CW",
        Cy => "CY",
        Cz => "CZ",
        Cd => "CD",
        Dk => "DK",
        Dj => "DJ",
        Dm => "DM",
        Do => "DO",
        Tl => "TL",
        Ec => "EC",
        Eg => "EG",
        Sv => "SV",
        Gq => "GQ",
        Er => "ER",
        Ee => "EE",
        Et => "ET",
        Fk => "FK",
        Fo => "FO",
        Fj => "FJ",
        Fi => "FI",
        Fr => "FR",
        Pf => "PF",
        Ga => "GA",
        Gm => "GM",
        Ge => "GE",
        De => "DE",
        Gh => "GH",
        Gi => "GI",
        Gr => "GR",
        Gl => "GL",
        Gd => "GD",
        Gu => "GU",
        Gt => "GT",
        Gg => "GG",
        Gn => "GN",
        Gw => "GW",
        Gy => "GY",
        Ht => "HT",
        Hn => "HN",
        Hk => "HK",
        Hu => "HU",
        Is => "IS",
        In => "IN",
        Id => "ID",
        Ir => "IR",
        Iq => "IQ",
        Ie => "IE",
        Im => "IM",
        Il => "IL",
        It => "IT",
        Ci => "CI",
        Jm => "JM",
        Jp => "JP",
        Je => "JE",
        Jo => "JO",
        Kz => "KZ",
        Ke => "KE",
        Ki => "KI",
        Kw => "KW",
        Kg => "KG",
        La => "LA",
        Lv => "LV",
        Lb => "LB",
        Ls => "LS",
        Lr => "LR",
        Ly => "LY",
        Li => "LI",
        Lt => "LT",
        Lu => "LU",
        Mo => "MO",
        Mk => "MK",
        Mg => "MG",
        Mw => "MW",
        My => "MY",
        Mv => "MV",
        Ml => "ML",
        Mt => "MT",
        Mh => "MH",
        Mr => "MR",
        Mu => "MU",
        Yt => "YT",
        Mx => "MX",
        Fm => "FM",
        Md => "MD",
        Mc => "MC",
        Mn => "MN",
        Me => "ME",
        Ms => "MS",
        Ma => "MA",
        Mz => "MZ",
        Mm => "MM",
        Na => "NA",
        Nr => "NR",
        Np => "NP",
        Nl => "NL",
        An => "AN",
        Nc => "NC",
        Nz => "NZ",
        Ni => "NI",
        Ne => "NE",
        Ng => "NG",
        Nu => "NU",
        Kp => "KP",
        Mp => "MP",
        No => "NO",
        Om => "OM",
        Pk => "PK",
        Pw => "PW",
        Pa => "PA",
        Pg => "PG",
        Py => "PY",
        Pe => "PE",
        Ph => "PH",
        Pn => "PN",
        Pl => "PL",
        Pt => "PT",
        Pr => "PR",
        Qa => "QA",
        Cg => "CG",
        Re => "RE",
        Ro => "RO",
        Ru => "RU",
        Rw => "RW",
        Bl => "BL",
        Sh => "SH",
        Kn => "KN",
        Lc => "LC",
        Mf => "MF",
        Pm => "PM",
        Vc => "VC",
        Ws => "WS",
        Sm => "SM",
        St => "ST",
        Sa => "SA",
        Sn => "SN",
        Rs => "RS",
        Sc => "SC",
        Sl => "SL",
        Sg => "SG",
        Sx => "SX",
        Sk => "SK",
        Si => "SI",
        Sb => "SB",
        So => "SO",
        Za => "ZA",
        Kr => "KR",
        Es => "ES",
        Lk => "LK",
        Sd => "SD",
        Sr => "SR",
        Sj => "SJ",
        Sz => "SZ",
        Se => "SE",
        Ch => "CH",
        Sy => "SY",
        Tw => "TW",
        Tj => "TJ",
        Tz => "TZ",
        Th => "TH",
        Tg => "TG",
        Tk => "TK",
        To => "TO",
        Tt => "TT",
        Tn => "TN",
        Tr => "TR",
        Tm => "TM",
        Tc => "TC",
        Tv => "TV",
        Vi => "VI",
        Ug => "UG",
        Ua => "UA",
        Ae => "AE",
        Gb => "GB",
        Us => "US",
        Uy => "UY",
        Uz => "UZ",
        Vu => "VU",
        Va => "VA",
        Ve => "VE",
        Vn => "VN",
        Wf => "WF",
        Eh => "EH",
        Ye => "YE",
        Zm => "ZM",
        Zw => "ZW",
    }
}

string_enum! {
    pub enum QueueType {
        Standard => "STANDARD",
        Agent => "AGENT",
    }
}

string_enum! {
    pub enum StringComparisonType {
        StartsWith => "STARTS_WITH",
        Contains => "CONTAINS",
        Exact => "EXACT",
    }
}

string_enum! {
    pub enum HierarchyGroupMatchType {
        Exact => "EXACT",
        WithChildGroups => "WITH_CHILD_GROUPS",
    }
}

structure! {
    /// Narrows historical and current metric queries.
    pub struct Filters, FiltersBuilder {
        /// Queue IDs or ARNs. Up to 100 queues may be given.
        queues, set_queues, get_queues: List(String),
        /// The channel to use to filter the metrics.
        channels, set_channels, get_channels: List(Channel),
        /// Routing profile IDs or ARNs.
        routing_profiles, set_routing_profiles, get_routing_profiles: List(String),
    }
}

structure! {
    /// A historical metric to retrieve.
    pub struct HistoricalMetric, HistoricalMetricBuilder {
        name, set_name, get_name: Member(HistoricalMetricName),
        /// The threshold for the metric, used with service level metrics.
        threshold, set_threshold, get_threshold: Member(Threshold),
        statistic, set_statistic, get_statistic: Member(Statistic),
        unit, set_unit, get_unit: Member(Unit),
    }
}

structure! {
    /// Threshold applied to a service level metric.
    pub struct Threshold, ThresholdBuilder {
        comparison, set_comparison, get_comparison: Member(Comparison),
        threshold_value, set_threshold_value, get_threshold_value: Prim(f64),
    }
}

structure! {
    pub struct HistoricalMetricResult, HistoricalMetricResultBuilder {
        dimensions, set_dimensions, get_dimensions: Member(Dimensions),
        collections, set_collections, get_collections: List(HistoricalMetricData),
    }
}

structure! {
    pub struct HistoricalMetricData, HistoricalMetricDataBuilder {
        metric, set_metric, get_metric: Member(HistoricalMetric),
        value, set_value, get_value: Prim(f64),
    }
}

structure! {
    /// The dimensions a metric result is grouped by.
    pub struct Dimensions, DimensionsBuilder {
        queue, set_queue, get_queue: Member(QueueReference),
        channel, set_channel, get_channel: Member(Channel),
        routing_profile, set_routing_profile, get_routing_profile: Member(RoutingProfileReference),
    }
}

structure! {
    pub struct QueueReference, QueueReferenceBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
    }
}

structure! {
    pub struct RoutingProfileReference, RoutingProfileReferenceBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
    }
}

structure! {
    /// A real-time metric to retrieve.
    pub struct CurrentMetric, CurrentMetricBuilder {
        name, set_name, get_name: Member(CurrentMetricName),
        unit, set_unit, get_unit: Member(Unit),
    }
}

structure! {
    pub struct CurrentMetricResult, CurrentMetricResultBuilder {
        dimensions, set_dimensions, get_dimensions: Member(Dimensions),
        collections, set_collections, get_collections: List(CurrentMetricData),
    }
}

structure! {
    pub struct CurrentMetricData, CurrentMetricDataBuilder {
        metric, set_metric, get_metric: Member(CurrentMetric),
        value, set_value, get_value: Prim(f64),
    }
}

structure! {
    /// A filter for `GetMetricDataV2`, such as `QUEUE` with a list of queue IDs.
    pub struct FilterV2, FilterV2Builder {
        filter_key, set_filter_key, get_filter_key: Str(String),
        filter_values, set_filter_values, get_filter_values: List(String),
    }
}

structure! {
    /// A metric requested from `GetMetricDataV2`. Names are open-ended strings.
    pub struct MetricV2, MetricV2Builder {
        name, set_name, get_name: Str(String),
        threshold, set_threshold, get_threshold: List(ThresholdV2),
        metric_filters, set_metric_filters, get_metric_filters: List(MetricFilterV2),
    }
}

structure! {
    pub struct ThresholdV2, ThresholdV2Builder {
        comparison, set_comparison, get_comparison: Str(String),
        threshold_value, set_threshold_value, get_threshold_value: Prim(f64),
    }
}

structure! {
    pub struct MetricFilterV2, MetricFilterV2Builder {
        metric_filter_key, set_metric_filter_key, get_metric_filter_key: Str(String),
        metric_filter_values, set_metric_filter_values, get_metric_filter_values: List(String),
        /// Excludes the listed values instead of matching them.
        negate, set_negate, get_negate: Prim(bool),
    }
}

structure! {
    pub struct MetricResultV2, MetricResultV2Builder {
        dimensions, set_dimensions, get_dimensions: Map(String),
        collections, set_collections, get_collections: List(MetricDataV2),
    }
}

structure! {
    pub struct MetricDataV2, MetricDataV2Builder {
        metric, set_metric, get_metric: Member(MetricV2),
        value, set_value, get_value: Prim(f64),
    }
}

structure! {
    /// Federation credentials for the Connect console.
    pub struct Credentials, CredentialsBuilder {
        access_token, set_access_token, get_access_token: Secret(String),
        access_token_expiration, set_access_token_expiration, get_access_token_expiration: Member(Instant),
        refresh_token, set_refresh_token, get_refresh_token: Secret(String),
        refresh_token_expiration, set_refresh_token_expiration, get_refresh_token_expiration: Member(Instant),
    }
}

structure! {
    /// A user account in a Connect instance.
    pub struct User, UserBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        username, set_username, get_username: Str(String),
        identity_info, set_identity_info, get_identity_info: Member(UserIdentityInfo),
        phone_config, set_phone_config, get_phone_config: Member(UserPhoneConfig),
        /// The identifier of the user account in the directory used for identity management.
        directory_user_id, set_directory_user_id, get_directory_user_id: Str(String),
        security_profile_ids, set_security_profile_ids, get_security_profile_ids: List(String),
        routing_profile_id, set_routing_profile_id, get_routing_profile_id: Str(String),
        hierarchy_group_id, set_hierarchy_group_id, get_hierarchy_group_id: Str(String),
        tags, set_tags, get_tags: Map(String),
    }
}

structure! {
    pub struct UserIdentityInfo, UserIdentityInfoBuilder {
        first_name, set_first_name, get_first_name: Str(String),
        last_name, set_last_name, get_last_name: Str(String),
        email, set_email, get_email: Str(String),
    }
}

structure! {
    pub struct UserIdentityInfoLite, UserIdentityInfoLiteBuilder {
        first_name, set_first_name, get_first_name: Str(String),
        last_name, set_last_name, get_last_name: Str(String),
    }
}

structure! {
    /// Phone settings for a user.
    pub struct UserPhoneConfig, UserPhoneConfigBuilder {
        phone_type, set_phone_type, get_phone_type: Member(PhoneType),
        auto_accept, set_auto_accept, get_auto_accept: Prim(bool),
        /// After contact work (ACW) timeout in seconds.
        after_contact_work_time_limit, set_after_contact_work_time_limit, get_after_contact_work_time_limit: Prim(i32),
        desk_phone_number, set_desk_phone_number, get_desk_phone_number: Str(String),
    }
}

structure! {
    pub struct HierarchyGroup, HierarchyGroupBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        name, set_name, get_name: Str(String),
        level_id, set_level_id, get_level_id: Str(String),
        hierarchy_path, set_hierarchy_path, get_hierarchy_path: Member(HierarchyPath),
    }
}

structure! {
    /// The groups above a hierarchy group, from level one downward.
    pub struct HierarchyPath, HierarchyPathBuilder {
        level_one, set_level_one, get_level_one: Member(HierarchyGroupSummary),
        level_two, set_level_two, get_level_two: Member(HierarchyGroupSummary),
        level_three, set_level_three, get_level_three: Member(HierarchyGroupSummary),
        level_four, set_level_four, get_level_four: Member(HierarchyGroupSummary),
        level_five, set_level_five, get_level_five: Member(HierarchyGroupSummary),
    }
}

structure! {
    pub struct HierarchyGroupSummary, HierarchyGroupSummaryBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        name, set_name, get_name: Str(String),
    }
}

structure! {
    pub struct HierarchyStructure, HierarchyStructureBuilder {
        level_one, set_level_one, get_level_one: Member(HierarchyLevel),
        level_two, set_level_two, get_level_two: Member(HierarchyLevel),
        level_three, set_level_three, get_level_three: Member(HierarchyLevel),
        level_four, set_level_four, get_level_four: Member(HierarchyLevel),
        level_five, set_level_five, get_level_five: Member(HierarchyLevel),
    }
}

structure! {
    pub struct HierarchyLevel, HierarchyLevelBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        name, set_name, get_name: Str(String),
    }
}

structure! {
    pub struct ContactFlowSummary, ContactFlowSummaryBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        name, set_name, get_name: Str(String),
        contact_flow_type, set_contact_flow_type, get_contact_flow_type: Member(ContactFlowType),
    }
}

structure! {
    pub struct HoursOfOperationSummary, HoursOfOperationSummaryBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        name, set_name, get_name: Str(String),
    }
}

structure! {
    pub struct PhoneNumberSummary, PhoneNumberSummaryBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        phone_number, set_phone_number, get_phone_number: Str(String),
        phone_number_type, set_phone_number_type, get_phone_number_type: Member(PhoneNumberType),
        phone_number_country_code, set_phone_number_country_code, get_phone_number_country_code: Member(PhoneNumberCountryCode),
    }
}

structure! {
    pub struct QueueSummary, QueueSummaryBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        name, set_name, get_name: Str(String),
        queue_type, set_queue_type, get_queue_type: Member(QueueType),
    }
}

structure! {
    pub struct RoutingProfileSummary, RoutingProfileSummaryBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        name, set_name, get_name: Str(String),
    }
}

structure! {
    pub struct SecurityProfileSummary, SecurityProfileSummaryBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        name, set_name, get_name: Str(String),
    }
}

structure! {
    pub struct UserSummary, UserSummaryBuilder {
        id, set_id, get_id: Str(String),
        arn, set_arn, get_arn: Str(String),
        username, set_username, get_username: Str(String),
    }
}

structure! {
    /// Search criteria for `SearchUsers`.
    ///
    /// Criteria nest: `or_conditions` and `and_conditions` hold further criteria, while
    /// `string_condition` and `hierarchy_group_condition` are the leaves.
    pub struct UserSearchCriteria, UserSearchCriteriaBuilder {
        or_conditions, set_or_conditions, get_or_conditions: List(UserSearchCriteria),
        and_conditions, set_and_conditions, get_and_conditions: List(UserSearchCriteria),
        string_condition, set_string_condition, get_string_condition: Member(StringCondition),
        hierarchy_group_condition, set_hierarchy_group_condition, get_hierarchy_group_condition: Member(HierarchyGroupCondition),
    }
}

structure! {
    pub struct StringCondition, StringConditionBuilder {
        /// One of `Name`, `Username`, `FirstName`, `LastName` and so on.
        field_name, set_field_name, get_field_name: Str(String),
        value, set_value, get_value: Str(String),
        comparison_type, set_comparison_type, get_comparison_type: Member(StringComparisonType),
    }
}

structure! {
    pub struct HierarchyGroupCondition, HierarchyGroupConditionBuilder {
        value, set_value, get_value: Str(String),
        hierarchy_group_match_type, set_hierarchy_group_match_type, get_hierarchy_group_match_type: Member(HierarchyGroupMatchType),
    }
}

structure! {
    pub struct UserSearchFilter, UserSearchFilterBuilder {
        tag_filter, set_tag_filter, get_tag_filter: Member(ControlPlaneTagFilter),
    }
}

structure! {
    /// Tag based filter: an OR of ANDs, a plain AND, or a single condition.
    pub struct ControlPlaneTagFilter, ControlPlaneTagFilterBuilder {
        /// Each inner list is ANDed; the outer list is ORed.
        or_conditions, set_or_conditions, get_or_conditions: List(Vec<TagCondition>),
        and_conditions, set_and_conditions, get_and_conditions: List(TagCondition),
        tag_condition, set_tag_condition, get_tag_condition: Member(TagCondition),
    }
}

structure! {
    pub struct TagCondition, TagConditionBuilder {
        tag_key, set_tag_key, get_tag_key: Str(String),
        tag_value, set_tag_value, get_tag_value: Str(String),
    }
}

structure! {
    pub struct UserSearchSummary, UserSearchSummaryBuilder {
        arn, set_arn, get_arn: Str(String),
        directory_user_id, set_directory_user_id, get_directory_user_id: Str(String),
        hierarchy_group_id, set_hierarchy_group_id, get_hierarchy_group_id: Str(String),
        id, set_id, get_id: Str(String),
        identity_info, set_identity_info, get_identity_info: Member(UserIdentityInfoLite),
        phone_config, set_phone_config, get_phone_config: Member(UserPhoneConfig),
        routing_profile_id, set_routing_profile_id, get_routing_profile_id: Str(String),
        security_profile_ids, set_security_profile_ids, get_security_profile_ids: List(String),
        tags, set_tags, get_tags: Map(String),
        username, set_username, get_username: Str(String),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn filters_accept_enum_or_raw_channel() {
        let typed = Filters::builder().channels(Channel::Voice).build();
        let raw = Filters::builder().channels("VOICE").build();
        assert_eq!(typed, raw);
        assert_eq!(raw.channels(), Some(&[Channel::Voice][..]));
    }

    #[test]
    fn unknown_enum_values_survive() {
        let code = PhoneNumberCountryCode::from("XK");
        assert_eq!(code, PhoneNumberCountryCode::Unknown("XK".to_owned()));
        assert_eq!(code.as_str(), "XK");
        assert_eq!(PhoneNumberCountryCode::from("US"), PhoneNumberCountryCode::Us);
        assert_eq!(HistoricalMetricName::values().len(), 25);
    }

    #[test]
    fn credentials_debug_is_redacted() {
        let credentials = Credentials::builder()
            .access_token("secret-access")
            .refresh_token("secret-refresh")
            .access_token_expiration(Instant::from_epoch_seconds(1_600_000_000))
            .build();
        let debug = format!("{:?}", credentials);
        assert!(!debug.contains("secret-access"));
        assert!(!debug.contains("secret-refresh"));
        assert!(debug.contains("access_token_expiration"));
    }

    #[test]
    fn nested_tag_filter_serializes_as_list_of_lists() {
        let condition = TagCondition::builder().tag_key("team").tag_value("support").build();
        let filter = ControlPlaneTagFilter::builder()
            .or_conditions(vec![condition.clone()])
            .build();
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            serde_json::json!({"OrConditions": [[{"TagKey": "team", "TagValue": "support"}]]})
        );
    }

    #[test]
    fn recursive_search_criteria() {
        let leaf = |value: &str| {
            UserSearchCriteria::builder()
                .string_condition(
                    StringCondition::builder()
                        .field_name("Username")
                        .value(value)
                        .comparison_type(StringComparisonType::StartsWith)
                        .build(),
                )
                .build()
        };
        let criteria = UserSearchCriteria::builder()
            .or_conditions(leaf("ana"))
            .or_conditions(leaf("bo"))
            .build();
        assert_eq!(criteria.or_conditions().map(|c| c.len()), Some(2));
        let json = serde_json::to_string(&criteria).unwrap();
        let parsed: UserSearchCriteria = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, criteria);
    }
}

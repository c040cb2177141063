/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use connect::input::GetMetricDataInput;
use connect::model::{
    Channel, Comparison, CurrentMetricName, Filters, HistoricalMetric, HistoricalMetricName,
    Statistic, Threshold, Unit,
};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn channel() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("VOICE".to_owned()),
        Just("CHAT".to_owned()),
        Just("TASK".to_owned()),
        "[A-Z_]{1,12}",
    ]
}

fn filters() -> impl Strategy<Value = Filters> {
    (
        prop::collection::vec("[a-z0-9-]{1,16}", 0..4),
        prop::collection::vec(channel(), 0..3),
    )
        .prop_map(|(queues, channels)| {
            let mut builder = Filters::builder();
            for queue in queues {
                builder = builder.queues(queue);
            }
            for channel in channels {
                builder = builder.channels(channel);
            }
            builder.build()
        })
}

fn historical_metric() -> impl Strategy<Value = HistoricalMetric> {
    (
        prop::sample::select(HistoricalMetricName::values()),
        prop::option::of(-1.0e6..1.0e6_f64),
    )
        .prop_map(|(name, threshold)| {
            let builder = HistoricalMetric::builder()
                .name(name)
                .statistic(Statistic::Sum)
                .unit(Unit::Count);
            match threshold {
                Some(value) => builder
                    .threshold(
                        Threshold::builder()
                            .comparison(Comparison::Lt)
                            .threshold_value(value)
                            .build(),
                    )
                    .build(),
                None => builder.build(),
            }
        })
}

proptest! {
    #[test]
    fn equal_values_hash_equally(filters in filters(), metric in historical_metric()) {
        let input = GetMetricDataInput::builder()
            .instance_id("abc")
            .filters(filters)
            .historical_metrics(metric)
            .build();
        let copy = input.clone().into_builder().build();
        prop_assert_eq!(&input, &copy);
        prop_assert_eq!(hash_of(&input), hash_of(&copy));
    }

    #[test]
    fn enum_and_wire_string_are_interchangeable(raw in channel()) {
        let typed = Channel::from(raw.as_str());
        prop_assert_eq!(typed.as_str(), raw.as_str());
        let by_enum = Filters::builder().channels(typed).build();
        let by_string = Filters::builder().channels(raw.clone()).build();
        prop_assert_eq!(&by_enum, &by_string);
        prop_assert_eq!(hash_of(&by_enum), hash_of(&by_string));
    }

    #[test]
    fn unknown_payload_matches_parsed_value(raw in channel()) {
        let spelled = Filters::builder().channels(Channel::Unknown(raw.clone())).build();
        let parsed = Filters::builder().channels(raw.as_str()).build();
        prop_assert_eq!(&spelled, &parsed);
        prop_assert_eq!(hash_of(&spelled), hash_of(&parsed));
        let json = serde_json::to_string(&spelled).unwrap();
        let round_tripped: Filters = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&round_tripped, &spelled);
    }

    #[test]
    fn stored_lists_do_not_alias_the_caller(mut queues in prop::collection::vec("[a-z]{1,8}", 0..5)) {
        let filters = Filters::builder().set_queues(Some(queues.clone())).build();
        let before = queues.clone();
        queues.push("late-addition".to_owned());
        queues.iter_mut().for_each(|queue| queue.insert(0, '!'));
        prop_assert_eq!(filters.queues(), Some(&before[..]));
    }

    #[test]
    fn set_and_unset_members_differ_both_ways(value in -1.0e6..1.0e6_f64, queue in "[a-z]{1,8}") {
        let unset = Threshold::builder().build();
        let set = Threshold::builder().threshold_value(value).build();
        prop_assert!(unset != set && set != unset);

        let no_list = Filters::builder().build();
        let with_list = Filters::builder().queues(queue).build();
        prop_assert!(no_list != with_list && with_list != no_list);
    }

    #[test]
    fn appending_makes_values_unequal(filters in filters(), queue in "[a-z]{1,8}") {
        let extended = filters.clone().into_builder().queues(queue).build();
        prop_assert_ne!(&filters, &extended);
        let expected = filters.queues().map_or(0, |queues| queues.len()) + 1;
        prop_assert_eq!(extended.queues().map(|queues| queues.len()), Some(expected));
    }
}

#[test]
fn unset_list_differs_from_empty_list() {
    let unset = Filters::builder().build();
    let empty = Filters::builder().set_queues(Some(Vec::new())).build();
    assert_ne!(unset, empty);
    assert_ne!(empty, unset);
    assert_eq!(unset.queues(), None);
    assert_eq!(empty.queues(), Some(&[][..]));
}

#[test]
fn debug_lists_only_populated_members() {
    let filters = Filters::builder().queues("q1").channels(Channel::Voice).build();
    assert_eq!(
        format!("{:?}", filters),
        r#"Filters { queues: ["q1"], channels: [Voice] }"#
    );
    let metric = CurrentMetricName::from("SLOTS_ACTIVE");
    assert_eq!(metric, CurrentMetricName::SlotsActive);
}

#[test]
fn unknown_voice_is_voice() {
    let spelled = Filters::builder()
        .channels(Channel::Unknown("VOICE".to_owned()))
        .build();
    let parsed = Filters::builder().channels("VOICE").build();
    assert_eq!(spelled, parsed);
    assert_eq!(hash_of(&spelled), hash_of(&parsed));
    assert_eq!(Channel::Unknown("VOICE".to_owned()), Channel::Voice);
}

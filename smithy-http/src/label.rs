/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values into HTTP path labels

use crate::urlencode::BASE_SET;
use percent_encoding::AsciiSet;

const GREEDY: &AsciiSet = &BASE_SET.remove(b'/');

/// Percent-encodes `t` for use as a single path segment.
///
/// A greedy label may span several segments, so `/` is left as-is.
pub fn fmt_string<T: AsRef<str>>(t: T, greedy: bool) -> String {
    let uri_set = if greedy { GREEDY } else { BASE_SET };
    percent_encoding::utf8_percent_encode(t.as_ref(), uri_set).to_string()
}

#[cfg(test)]
mod test {
    use crate::label::fmt_string;

    #[test]
    fn arns_are_fully_encoded() {
        assert_eq!(
            fmt_string("arn:aws:connect:us-west-2:123456789012:instance/abc", false),
            "arn%3Aaws%3Aconnect%3Aus-west-2%3A123456789012%3Ainstance%2Fabc"
        );
    }

    #[test]
    fn greedy_labels_keep_slashes() {
        assert_eq!(fmt_string("a b/c", true), "a%20b/c");
        assert_eq!(fmt_string("a b/c", false), "a%20b%2Fc");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(fmt_string("Abc-123_x.y~z", false), "Abc-123_x.y~z");
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Macros that stamp out model shapes.
//!
//! Every shape follows one template: optional members, borrowed getters, a consuming
//! builder, structural equality and hashing, and a `Debug` impl that lists only the
//! populated members. The macros expand to code that names `::serde`, so the calling
//! crate must depend on `serde`.

/// Defines a model structure and its builder.
///
/// Each member is declared as `name, set_name, get_name: Kind(Type)` where `Kind` is one of
/// [`member kinds`](crate::shape::kind). A single `#[serde(...)]` attribute may follow a
/// member's docs to adjust its wire name or skip it.
///
/// ```rust
/// smithy_types::structure! {
///     /// Contains the name of a queue.
///     pub struct Queue, QueueBuilder {
///         /// The name of the queue.
///         name, set_name, get_name: Str(String),
///         tags, set_tags, get_tags: Map(String),
///     }
/// }
///
/// let queue = Queue::builder().name("BasicQueue").tags("team", "support").build();
/// assert_eq!(queue.name(), Some("BasicQueue"));
/// assert_eq!(format!("{:?}", queue), r#"Queue { name: "BasicQueue", tags: {"team": "support"} }"#);
/// ```
#[macro_export]
macro_rules! structure {
    (
        $(#[doc = $struct_doc:literal])*
        pub struct $name:ident, $builder:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[serde($($serde:tt)*)])?
                $field:ident, $setter:ident, $getter:ident: $kind:ident($ty:ty)
            ),* $(,)?
        }
    ) => {
        $(#[doc = $struct_doc])*
        #[non_exhaustive]
        #[derive(Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "PascalCase", default)]
        pub struct $name {
            $(
                $(#[doc = $doc])*
                #[serde(skip_serializing_if = "Option::is_none")]
                $(#[serde($($serde)*)])?
                $field: ::std::option::Option<$crate::shape::kind::$kind<$ty>>,
            )*
        }

        impl $name {
            $(
                $crate::__shape_getter!({ $(#[doc = $doc])* } $kind $field $ty);
            )*

            /// Creates a new builder-style object to manufacture this shape.
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Converts this shape back into a builder holding the same members.
            pub fn into_builder(self) -> $builder {
                $builder {
                    $($field: self.$field,)*
                }
            }
        }

        #[doc = concat!("A builder for [`", stringify!($name), "`].")]
        #[non_exhaustive]
        #[derive(Clone, Default, PartialEq)]
        pub struct $builder {
            $(
                $field: ::std::option::Option<$crate::shape::kind::$kind<$ty>>,
            )*
        }

        impl $builder {
            $(
                $crate::__shape_builder_methods!({ $(#[doc = $doc])* } $kind $field $setter $getter $ty);
            )*

            #[doc = concat!("Consumes the builder and constructs a [`", stringify!($name), "`].")]
            pub fn build(self) -> $name {
                $name {
                    $($field: self.$field,)*
                }
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut formatter = f.debug_struct(stringify!($name));
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        $crate::__shape_debug_member!($kind formatter $field value);
                    }
                )*
                formatter.finish()
            }
        }

        impl ::std::fmt::Debug for $builder {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut formatter = f.debug_struct(stringify!($builder));
                $(
                    if let ::std::option::Option::Some(value) = &self.$field {
                        $crate::__shape_debug_member!($kind formatter $field value);
                    }
                )*
                formatter.finish()
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $(
                    $crate::shape::ShapeHash::shape_hash(&self.$field, state);
                )*
                let _ = state;
            }
        }

        impl $crate::shape::ShapeHash for $name {
            fn shape_hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self, state)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __shape_getter {
    ({ $(#[$meta:meta])* } Str $field:ident $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> ::std::option::Option<&str> {
            self.$field.as_deref()
        }
    };
    ({ $(#[$meta:meta])* } Secret $field:ident $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> ::std::option::Option<&str> {
            self.$field.as_deref()
        }
    };
    ({ $(#[$meta:meta])* } Prim $field:ident $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> ::std::option::Option<$ty> {
            self.$field
        }
    };
    ({ $(#[$meta:meta])* } Member $field:ident $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> ::std::option::Option<&$ty> {
            self.$field.as_ref()
        }
    };
    ({ $(#[$meta:meta])* } List $field:ident $ty:ty) => {
        $(#[$meta])*
        pub fn $field(&self) -> ::std::option::Option<&[$ty]> {
            self.$field.as_deref()
        }
    };
    ({ $(#[$meta:meta])* } Map $field:ident $ty:ty) => {
        $(#[$meta])*
        pub fn $field(
            &self,
        ) -> ::std::option::Option<&::std::collections::HashMap<::std::string::String, $ty>> {
            self.$field.as_ref()
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __shape_builder_methods {
    ({ $(#[$meta:meta])* } List $field:ident $setter:ident $getter:ident $ty:ty) => {
        /// Appends an item to this list member, creating the list on first use.
        ///
        $(#[$meta])*
        pub fn $field(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            let mut items = self.$field.unwrap_or_default();
            items.push(input.into());
            self.$field = ::std::option::Option::Some(items);
            self
        }

        $(#[$meta])*
        pub fn $setter(mut self, input: ::std::option::Option<::std::vec::Vec<$ty>>) -> Self {
            self.$field = input;
            self
        }

        $(#[$meta])*
        pub fn $getter(&self) -> &::std::option::Option<::std::vec::Vec<$ty>> {
            &self.$field
        }
    };
    ({ $(#[$meta:meta])* } Map $field:ident $setter:ident $getter:ident $ty:ty) => {
        /// Adds a key-value pair to this map member, creating the map on first use.
        ///
        $(#[$meta])*
        pub fn $field(
            mut self,
            key: impl ::std::convert::Into<::std::string::String>,
            value: impl ::std::convert::Into<$ty>,
        ) -> Self {
            let mut entries = self.$field.unwrap_or_default();
            entries.insert(key.into(), value.into());
            self.$field = ::std::option::Option::Some(entries);
            self
        }

        $(#[$meta])*
        pub fn $setter(
            mut self,
            input: ::std::option::Option<::std::collections::HashMap<::std::string::String, $ty>>,
        ) -> Self {
            self.$field = input;
            self
        }

        $(#[$meta])*
        pub fn $getter(
            &self,
        ) -> &::std::option::Option<::std::collections::HashMap<::std::string::String, $ty>> {
            &self.$field
        }
    };
    ({ $(#[$meta:meta])* } $kind:ident $field:ident $setter:ident $getter:ident $ty:ty) => {
        $(#[$meta])*
        pub fn $field(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            self.$field = ::std::option::Option::Some(input.into());
            self
        }

        $(#[$meta])*
        pub fn $setter(mut self, input: ::std::option::Option<$ty>) -> Self {
            self.$field = input;
            self
        }

        $(#[$meta])*
        pub fn $getter(&self) -> &::std::option::Option<$ty> {
            &self.$field
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __shape_debug_member {
    (Secret $formatter:ident $field:ident $value:ident) => {
        let _ = $value;
        $formatter.field(stringify!($field), &"*** Sensitive Data Redacted ***");
    };
    ($kind:ident $formatter:ident $field:ident $value:ident) => {
        $formatter.field(stringify!($field), $value);
    };
}

/// Defines a string-backed enum that tolerates values unknown to this model version.
///
/// Known values map onto variants; anything else is kept verbatim in `Unknown`, so a
/// raw string and the matching variant always produce the same value.
///
/// ```rust
/// smithy_types::string_enum! {
///     pub enum Channel {
///         Voice => "VOICE",
///         Chat => "CHAT",
///     }
/// }
///
/// assert_eq!(Channel::from("VOICE"), Channel::Voice);
/// assert_eq!(Channel::from("SMOKE_SIGNAL").as_str(), "SMOKE_SIGNAL");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[doc = $doc:literal])*
        pub enum $name:ident {
            $(
                $(#[doc = $variant_doc:literal])*
                $variant:ident => $value:literal
            ),* $(,)?
        }
    ) => {
        $(#[doc = $doc])*
        #[non_exhaustive]
        #[derive(Clone, Debug)]
        pub enum $name {
            $(
                $(#[doc = $variant_doc])*
                $variant,
            )*
            /// A value not known to this version of the model.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Returns the wire value.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)*
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Returns every wire value known to this version of the model.
            pub fn values() -> &'static [&'static str] {
                &[$($value),*]
            }
        }

        // Equality, ordering and hashing follow the wire value, so `Unknown` holding a
        // known spelling is the same value as the named variant.
        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(::std::cmp::Ord::cmp(self, other))
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.as_str(), state)
            }
        }

        impl<'a> ::std::convert::From<&'a str> for $name {
            fn from(s: &'a str) -> Self {
                match s {
                    $($value => $name::$variant,)*
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(s: ::std::string::String) -> Self {
                $name::from(s.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                ::std::result::Result::Ok($name::from(s))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                ::std::result::Result::Ok($name::from(value))
            }
        }

        impl $crate::shape::ShapeHash for $name {
            fn shape_hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self, state)
            }
        }
    };
}

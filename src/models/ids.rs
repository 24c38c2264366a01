//! Strongly-typed ID wrappers for transactions and categories
//!
//! A category id can never be passed where a transaction id is expected.
//! Ids print in a short prefixed form (`txn-1a2b3c4d`) and parse from either
//! that prefix plus a full UUID or a bare UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of hex digits shown in the short form
const SHORT_LEN: usize = 8;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Prefix used by the short display form
            pub const PREFIX: &'static str = $prefix;

            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse a bare UUID
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Uuid::parse_str(s).map(Self)
            }

            /// Whether `short` (with or without the prefix) is a prefix of
            /// this id's UUID hex digits
            ///
            /// Hyphens are ignored and case does not matter, so both the
            /// displayed form and a truncated hyphenated UUID match.
            pub fn matches_short(&self, short: &str) -> bool {
                let short = short.strip_prefix(Self::PREFIX).unwrap_or(short);
                let hex: String = short
                    .chars()
                    .filter(|c| *c != '-')
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                !hex.is_empty() && self.0.simple().to_string().starts_with(&hex)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let full = self.0.simple().to_string();
                write!(f, "{}{}", Self::PREFIX, &full[..SHORT_LEN])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s.strip_prefix(Self::PREFIX).unwrap_or(s))
            }
        }
    };
}

define_id!(
    /// Identifier of a stored transaction
    TransactionId,
    "txn-"
);
define_id!(
    /// Identifier of a category
    CategoryId,
    "cat-"
);

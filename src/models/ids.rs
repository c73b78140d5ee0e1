//! Strongly-typed ID wrappers for all record types
//!
//! IDs are UUID v7, so they carry their creation time. The short display
//! form uses the trailing (random) hex digits, which stay distinct for
//! records created within the same millisecond.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Number of hex digits shown in the short display form
const SHORT_LEN: usize = 8;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new time-ordered ID
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse a full UUID, with or without the display prefix
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                s.parse()
            }

            /// The short form without prefix (last hex digits)
            pub fn short(&self) -> String {
                let hex = self.0.simple().to_string();
                hex[hex.len() - SHORT_LEN..].to_string()
            }

            /// Check whether a user-supplied identifier names this ID
            ///
            /// Accepts the full UUID, the short display form, or either of
            /// those with the display prefix.
            pub fn matches(&self, identifier: &str) -> bool {
                let identifier = identifier.trim().to_lowercase();
                let bare = identifier
                    .strip_prefix($display_prefix)
                    .unwrap_or(&identifier);

                if let Ok(uuid) = Uuid::parse_str(bare) {
                    return uuid == self.0;
                }
                bare.len() == SHORT_LEN && self.short() == bare
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.short())
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
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(GoalId, "gol-");
define_id!(DebtId, "dbt-");

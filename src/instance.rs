//! Instance identity for the instance-aware variant.

use std::fmt;

use serde::Deserialize;
use strum::Display;

/// Identity used when `INSTANCE_NAME` is not set.
pub const DEFAULT_INSTANCE_NAME: &str = "Instance-2";

/// Label distinguishing deployed copies of the service.
///
/// Resolved once at startup and never changed afterwards. Any string is
/// valid, the empty string included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceIdentity(String);

impl InstanceIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which payload shape the service answers `/files` with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ServiceVariant {
    /// `{"files":[...]}`
    #[default]
    Plain,
    /// `{"instance":"...","files":[...]}`
    InstanceAware,
}

impl ServiceVariant {
    pub fn includes_instance(self) -> bool {
        matches!(self, Self::InstanceAware)
    }
}

//! Configuration options for index building and selection behavior.

use serde::{Deserialize, Serialize};

/// How to treat a parent whose children carry different type ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiblingTypePolicy {
    /// Fail the build with `IndexError::MixedSiblingTypes`.
    #[default]
    Reject,
    /// Report a warning and let the first child's type name the level.
    Warn,
}

/// Whether embedded type stubs are reconciled against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeStubPolicy {
    /// Report mismatches as warnings.
    #[default]
    Warn,
    /// Skip reconciliation entirely.
    Ignore,
}

/// Options controlling resolver behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverOptions {
    /// Select the only option of a level on the caller's behalf, one level per
    /// call. Default: false.
    pub auto_advance: bool,

    /// Sibling type homogeneity handling. Default: reject.
    pub sibling_types: SiblingTypePolicy,

    /// Embedded type stub handling. Default: warn.
    pub type_stubs: TypeStubPolicy,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_auto_advance(mut self, enable: bool) -> Self {
        self.auto_advance = enable;
        self
    }

    #[must_use]
    pub fn with_sibling_types(mut self, policy: SiblingTypePolicy) -> Self {
        self.sibling_types = policy;
        self
    }

    #[must_use]
    pub fn with_type_stubs(mut self, policy: TypeStubPolicy) -> Self {
        self.type_stubs = policy;
        self
    }
}

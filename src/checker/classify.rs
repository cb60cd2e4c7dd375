// src/checker/classify.rs
// =============================================================================
// Decides what kind of link a raw target is, before any I/O happens.
//
// Order matters - the first matching rule wins:
// 1. mailto:, tel:, #anchor -> excluded
// 2. http://, https://      -> external (checked over the network)
// 3. /path                  -> internal (checked on disk)
// 4. anything else          -> excluded (relative links aren't supported)
// =============================================================================

use serde::Serialize;

/// Why a link was skipped instead of checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// mailto:, tel: or a same-page #anchor
    ProtocolOrAnchor,
    /// A path that is neither absolute nor root-relative
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum LinkKind {
    External,
    Internal,
    Excluded(SkipReason),
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::ProtocolOrAnchor => "Protocol excluded",
            SkipReason::Relative => "Relative link",
        }
    }
}

pub fn classify(link: &str) -> LinkKind {
    if link.starts_with("mailto:") || link.starts_with("tel:") || link.starts_with('#') {
        LinkKind::Excluded(SkipReason::ProtocolOrAnchor)
    } else if link.starts_with("http://") || link.starts_with("https://") {
        LinkKind::External
    } else if link.starts_with('/') {
        LinkKind::Internal
    } else {
        LinkKind::Excluded(SkipReason::Relative)
    }
}

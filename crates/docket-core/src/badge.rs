//! Display attribute mapping for status values.
//!
//! Every status enum maps totally onto a [`BadgeSpec`]; front-ends render
//! the badge without any string-keyed branching.

use crate::types::{DocumentStatus, RequirementStatus};

/// Display attributes for a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeSpec {
    /// Label shown next to the icon.
    pub label: &'static str,
    /// Color tone for the badge surface.
    pub tone: BadgeTone,
    /// Icon rendered inside the badge.
    pub icon: BadgeIcon,
}

/// Color tone for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Muted,
    Success,
    Warning,
    Danger,
}

/// Icon rendered inside a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeIcon {
    CircleDashed,
    Clock,
    CheckCircle,
    XCircle,
    Loader,
}

impl DocumentStatus {
    /// Badge shown for this document status.
    pub fn badge(&self) -> BadgeSpec {
        match self {
            DocumentStatus::Draft => BadgeSpec {
                label: "Draft",
                tone: BadgeTone::Muted,
                icon: BadgeIcon::CircleDashed,
            },
            DocumentStatus::Published => BadgeSpec {
                label: "Published",
                tone: BadgeTone::Success,
                icon: BadgeIcon::CheckCircle,
            },
            DocumentStatus::Deprecated => BadgeSpec {
                label: "Deprecated",
                tone: BadgeTone::Danger,
                icon: BadgeIcon::XCircle,
            },
        }
    }
}

impl RequirementStatus {
    /// Badge shown for this requirement status.
    pub fn badge(&self) -> BadgeSpec {
        match self {
            RequirementStatus::Draft => BadgeSpec {
                label: "Draft",
                tone: BadgeTone::Muted,
                icon: BadgeIcon::CircleDashed,
            },
            RequirementStatus::Pending => BadgeSpec {
                label: "Pending",
                tone: BadgeTone::Warning,
                icon: BadgeIcon::Clock,
            },
            RequirementStatus::Approved => BadgeSpec {
                label: "Approved",
                tone: BadgeTone::Success,
                icon: BadgeIcon::CheckCircle,
            },
            RequirementStatus::Rejected => BadgeSpec {
                label: "Rejected",
                tone: BadgeTone::Danger,
                icon: BadgeIcon::XCircle,
            },
        }
    }
}

/// Badge shown while an assistant reply is still being revealed.
pub fn in_progress_badge() -> BadgeSpec {
    BadgeSpec {
        label: "In Progress",
        tone: BadgeTone::Warning,
        icon: BadgeIcon::Loader,
    }
}

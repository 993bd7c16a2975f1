//! Curation status derivation.
//!
//! Status is derived, never stored: the three flag columns plus the
//! document reference are evaluated in a fixed precedence order. Manual
//! approval wins over everything; a record with no local document cannot
//! be worked on and masks the AI outcome; AI approval wins over AI
//! rejection; everything else is pending.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use crate::record::ArticleRecord;

/// Review state of a curation record, in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurationStatus {
    /// A human curator approved the record, overriding the AI outcome.
    ManualApproved,
    /// No local document file is available to review.
    Unavailable,
    /// The AI classification service approved the record.
    ApprovedAi,
    /// The AI classification service rejected the record.
    RejectedAi,
    /// Not yet classified.
    Pending,
}

/// Visual tone for a status chip. Names follow the stylesheet's palette
/// classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Success,
    Error,
    Warning,
}

impl Tone {
    /// CSS class suffix for this tone.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Icon glyph associated with a status chip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Check,
    Block,
    Cancel,
    Hourglass,
}

/// Display metadata for a derived status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusInfo {
    pub status: CurationStatus,
    /// User-facing label.
    pub label: &'static str,
    pub tone: Tone,
    pub icon: Icon,
}

impl CurationStatus {
    /// Derive the status of `record`. Total: any combination of flags
    /// yields exactly one status.
    #[must_use]
    pub fn derive(record: &ArticleRecord) -> Self {
        if record.is_manual_approved() {
            return Self::ManualApproved;
        }
        if !record.has_local_document() {
            return Self::Unavailable;
        }
        if record.is_ai_approved() {
            return Self::ApprovedAi;
        }
        if record.is_ai_rejected() {
            return Self::RejectedAi;
        }
        Self::Pending
    }

    /// Stable machine-readable tag, used for filter values and CLI args.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ManualApproved => "manual_approved",
            Self::Unavailable => "unavailable",
            Self::ApprovedAi => "approved_ai",
            Self::RejectedAi => "rejected_ai",
            Self::Pending => "pending",
        }
    }

    /// Parse a tag produced by [`CurationStatus::as_str`].
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "manual_approved" => Some(Self::ManualApproved),
            "unavailable" => Some(Self::Unavailable),
            "approved_ai" => Some(Self::ApprovedAi),
            "rejected_ai" => Some(Self::RejectedAi),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }

    /// All statuses, in precedence order.
    #[must_use]
    pub fn all() -> [Self; 5] {
        [
            Self::ManualApproved,
            Self::Unavailable,
            Self::ApprovedAi,
            Self::RejectedAi,
            Self::Pending,
        ]
    }

    /// Display metadata for this status.
    #[must_use]
    pub fn info(self) -> StatusInfo {
        match self {
            Self::ManualApproved => StatusInfo {
                status: self,
                label: "Aprovado Manualmente",
                tone: Tone::Primary,
                icon: Icon::Check,
            },
            Self::Unavailable => StatusInfo {
                status: self,
                label: "Indisponível (Sem arquivo local)",
                tone: Tone::Secondary,
                icon: Icon::Block,
            },
            Self::ApprovedAi => StatusInfo {
                status: self,
                label: "Aprovado (IA)",
                tone: Tone::Success,
                icon: Icon::Check,
            },
            Self::RejectedAi => StatusInfo {
                status: self,
                label: "Rejeitado (IA)",
                tone: Tone::Error,
                icon: Icon::Cancel,
            },
            Self::Pending => StatusInfo {
                status: self,
                label: "Pendente",
                tone: Tone::Warning,
                icon: Icon::Hourglass,
            },
        }
    }
}

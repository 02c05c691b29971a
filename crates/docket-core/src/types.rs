//! Core data types shared across the workbench API.

use chrono::{DateTime, Utc};
use docket_protocol::MessageId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Message stored in a conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Message identifier; finalized reveals receive a fresh one.
    pub id: MessageId,
    /// Role that produced the message.
    pub role: Role,
    /// Message content; mutates in place while a reveal is active.
    pub content: String,
    /// Timestamp for the message.
    pub created_at: DateTime<Utc>,
    /// Whether an active reveal is still filling this message.
    pub in_progress: bool,
}

impl Message {
    /// Build a finalized message with a fresh identifier.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
            in_progress: false,
        }
    }
}

/// Speaker role for a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// User-authored message.
    User,
    /// Assistant-authored message.
    Assistant,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Parse a role from a lowercase string.
    pub fn parse(value: &str) -> Self {
        if value == "assistant" {
            Role::Assistant
        } else {
            Role::User
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Role::parse(value))
    }
}

/// Lifecycle status of a knowledge-base document.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Uploaded but not yet published.
    Draft,
    /// Visible to readers.
    Published,
    /// Superseded; kept for reference only.
    Deprecated,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Published => "published",
            DocumentStatus::Deprecated => "deprecated",
        }
    }
}

/// Optional descriptive metadata captured at upload time.
///
/// Absent fields stay empty; they are never defaulted to placeholder text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocumentMetadata {
    /// External document number, e.g. "GLB 11100.5".
    pub document_number: Option<String>,
    /// Effective dates in submission order.
    pub effective_dates: Vec<String>,
    /// Intended audience labels.
    pub audience: Vec<String>,
    /// Applicable regions.
    pub regions: Vec<String>,
    /// Applicable brands.
    pub brands: Vec<String>,
}

impl DocumentMetadata {
    /// Whether no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.document_number.is_none()
            && self.effective_dates.is_empty()
            && self.audience.is_empty()
            && self.regions.is_empty()
            && self.brands.is_empty()
    }
}

/// Document record held by the registry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentRecord {
    /// Identifier, unique within a registry.
    pub id: String,
    /// Display name shown in listings.
    pub name: String,
    /// Free-text category.
    pub category: String,
    /// Lifecycle status.
    pub status: DocumentStatus,
    /// Version, positive and monotonically non-decreasing.
    pub version: u32,
    /// Upload timestamp.
    pub uploaded_at: DateTime<Utc>,
    /// Optional metadata captured at upload time.
    pub metadata: Option<DocumentMetadata>,
}

impl DocumentRecord {
    /// Build a freshly uploaded record: version 1, draft status.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            status: DocumentStatus::Draft,
            version: 1,
            uploaded_at: Utc::now(),
            metadata: None,
        }
    }

    /// Attach upload metadata.
    pub fn with_metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Override the lifecycle status.
    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }
}

/// Review status of a functional requirement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequirementStatus {
    /// Generated or authored but not submitted.
    Draft,
    /// Awaiting review.
    Pending,
    /// Accepted by a reviewer.
    Approved,
    /// Declined by a reviewer.
    Rejected,
}

impl RequirementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementStatus::Draft => "draft",
            RequirementStatus::Pending => "pending",
            RequirementStatus::Approved => "approved",
            RequirementStatus::Rejected => "rejected",
        }
    }
}

/// Priority assigned to a functional requirement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

/// Functional requirement tracked on the board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequirementRecord {
    /// Identifier, unique within a board.
    pub id: String,
    /// Short title shown in listings.
    pub title: String,
    /// Longer description of the requirement.
    pub description: String,
    /// Review status.
    pub status: RequirementStatus,
    /// Assigned priority.
    pub priority: Priority,
    /// Author display name.
    pub author: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl RequirementRecord {
    /// Build a new draft requirement.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status: RequirementStatus::Draft,
            priority,
            author: author.into(),
            created_at: Utc::now(),
        }
    }

    /// Override the review status.
    pub fn with_status(mut self, status: RequirementStatus) -> Self {
        self.status = status;
        self
    }
}

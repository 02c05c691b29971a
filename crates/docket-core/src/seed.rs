//! Demo datasets seeded into new workbenches.
//!
//! These replace module-level mock data: callers inject them through the
//! container constructors, so no process-wide state exists.

use crate::types::{
    DocumentRecord, DocumentStatus, Priority, RequirementRecord, RequirementStatus,
};

/// Demo knowledge-base documents.
pub fn demo_documents() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord::new("DOC-001", "Technical Architecture.pdf", "Technical")
            .with_status(DocumentStatus::Published),
        DocumentRecord::new("DOC-002", "User Manual.docx", "User Guides")
            .with_status(DocumentStatus::Published),
        DocumentRecord::new("DOC-003", "API Specifications.md", "Technical"),
    ]
}

/// Demo functional requirements.
pub fn demo_requirements() -> Vec<RequirementRecord> {
    vec![
        RequirementRecord::new(
            "FR-001",
            "User Authentication System",
            "Implement JWT based authentication",
            Priority::High,
            "John Doe",
        )
        .with_status(RequirementStatus::Pending),
        RequirementRecord::new(
            "FR-002",
            "Document Upload Feature",
            "Allow PDF, DOCX uploads up to 10MB",
            Priority::Medium,
            "Jane Smith",
        )
        .with_status(RequirementStatus::Approved),
        RequirementRecord::new(
            "FR-003",
            "Search Functionality",
            "Full-text search across documents",
            Priority::Low,
            "Mike Johnson",
        )
        .with_status(RequirementStatus::Rejected),
    ]
}

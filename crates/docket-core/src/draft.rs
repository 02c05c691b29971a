//! Functional requirement draft generation.
//!
//! Renders the markdown draft that the assistant reveals in the chat view.
//! Generation is local and deterministic; there is no model call behind it.

use crate::error::DocketCoreError;
use crate::types::Priority;
use log::debug;
use std::fmt::Write;

/// Inputs collected by the draft generator form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRequest {
    /// Project name; required.
    pub project_name: String,
    /// Free-form project description.
    pub description: String,
    /// Requested priority.
    pub priority: Priority,
    /// Names of uploaded source documents.
    pub source_documents: Vec<String>,
}

impl DraftRequest {
    pub fn new(
        project_name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            description: description.into(),
            priority,
            source_documents: Vec::new(),
        }
    }

    /// Attach the uploaded source document names.
    pub fn with_source_documents(mut self, source_documents: Vec<String>) -> Self {
        self.source_documents = source_documents;
        self
    }

    /// Render the draft markdown for this request.
    pub fn generate(&self) -> Result<String, DocketCoreError> {
        if self.project_name.trim().is_empty() {
            return Err(DocketCoreError::Validation(
                "project name is required".to_string(),
            ));
        }
        debug!(
            "generating draft (project_name={}, sources={})",
            self.project_name,
            self.source_documents.len()
        );

        let mut draft = String::new();
        let _ = writeln!(draft, "# Functional Requirements Document");
        let _ = writeln!(draft);
        let _ = writeln!(draft, "**Project:** {}", self.project_name.trim());
        let _ = writeln!(draft, "**Priority:** {}", self.priority.as_str());
        if !self.description.trim().is_empty() {
            let _ = writeln!(draft);
            let _ = writeln!(draft, "## Overview");
            let _ = writeln!(draft, "{}", self.description.trim());
        }
        let _ = writeln!(draft);
        let _ = writeln!(draft, "## Requirements");
        let _ = writeln!(draft, "1. Sample requirement 1");
        let _ = writeln!(draft, "2. Sample requirement 2");
        let _ = writeln!(draft, "3. Sample requirement 3");
        if !self.source_documents.is_empty() {
            let _ = writeln!(draft);
            let _ = writeln!(draft, "## Source Documents");
            for name in &self.source_documents {
                let _ = writeln!(draft, "- {name}");
            }
        }
        Ok(draft)
    }
}

//! In-memory document registry and requirement board.
//!
//! Both containers keep insertion order as display order and enforce
//! identifier uniqueness. Removal is archival: there is no soft delete.

use crate::error::DocketCoreError;
use crate::types::{DocumentRecord, DocumentStatus, RequirementRecord, RequirementStatus};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered collection of knowledge-base documents for one session.
#[derive(Debug, Default)]
pub struct DocumentRegistry {
    records: Vec<DocumentRecord>,
}

/// Aggregate counts for the knowledge-base view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct DocumentStats {
    pub total: usize,
    pub draft: usize,
    pub published: usize,
    pub deprecated: usize,
    /// Number of distinct categories in use.
    pub categories: usize,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from constructor-injected seed records.
    pub fn with_records(seed: Vec<DocumentRecord>) -> Result<Self, DocketCoreError> {
        let mut registry = Self::new();
        for record in seed {
            registry.add(record)?;
        }
        Ok(registry)
    }

    /// Insert a record at the end of the display order.
    pub fn add(&mut self, record: DocumentRecord) -> Result<(), DocketCoreError> {
        if self.records.iter().any(|existing| existing.id == record.id) {
            return Err(DocketCoreError::DuplicateId(record.id));
        }
        info!(
            "adding document (id={}, name={}, category={})",
            record.id, record.name, record.category
        );
        self.records.push(record);
        Ok(())
    }

    /// Remove a record, returning it.
    pub fn remove(&mut self, id: &str) -> Result<DocumentRecord, DocketCoreError> {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            warn!("document not found for removal (id={})", id);
            return Err(DocketCoreError::NotFound(id.to_string()));
        };
        info!("removing document (id={})", id);
        Ok(self.records.remove(index))
    }

    /// Set the lifecycle status of a record. Transitions are unrestricted.
    pub fn set_status(&mut self, id: &str, status: DocumentStatus) -> Result<(), DocketCoreError> {
        let record = self.get_mut(id)?;
        debug!("setting document status (id={}, status={})", id, status.as_str());
        record.status = status;
        Ok(())
    }

    /// Increment a record's version by one, returning the new version.
    pub fn bump_version(&mut self, id: &str) -> Result<u32, DocketCoreError> {
        let record = self.get_mut(id)?;
        record.version += 1;
        debug!("bumped document version (id={}, version={})", id, record.version);
        Ok(record.version)
    }

    /// Case-insensitive substring search over name, category, and document
    /// number. An empty query returns every record; order is preserved.
    pub fn search(&self, query: &str) -> Vec<&DocumentRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|record| {
                record.name.to_lowercase().contains(&query)
                    || record.category.to_lowercase().contains(&query)
                    || record
                        .metadata
                        .as_ref()
                        .and_then(|metadata| metadata.document_number.as_deref())
                        .is_some_and(|number| number.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Fetch a record by id.
    pub fn get(&self, id: &str) -> Option<&DocumentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// All records in display order.
    pub fn records(&self) -> &[DocumentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate counts for the dashboard stat cards.
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats {
            total: self.records.len(),
            ..DocumentStats::default()
        };
        let mut categories = HashSet::new();
        for record in &self.records {
            match record.status {
                DocumentStatus::Draft => stats.draft += 1,
                DocumentStatus::Published => stats.published += 1,
                DocumentStatus::Deprecated => stats.deprecated += 1,
            }
            if !record.category.is_empty() {
                categories.insert(record.category.as_str());
            }
        }
        stats.categories = categories.len();
        stats
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut DocumentRecord, DocketCoreError> {
        self.records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| DocketCoreError::NotFound(id.to_string()))
    }
}

/// Ordered collection of functional requirements for one session.
#[derive(Debug, Default)]
pub struct RequirementBoard {
    records: Vec<RequirementRecord>,
}

/// Aggregate counts for the requirement board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RequirementStats {
    pub total: usize,
    pub draft: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl RequirementBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from constructor-injected seed records.
    pub fn with_records(seed: Vec<RequirementRecord>) -> Result<Self, DocketCoreError> {
        let mut board = Self::new();
        for record in seed {
            board.add(record)?;
        }
        Ok(board)
    }

    /// Insert a requirement at the end of the display order.
    pub fn add(&mut self, record: RequirementRecord) -> Result<(), DocketCoreError> {
        if self.records.iter().any(|existing| existing.id == record.id) {
            return Err(DocketCoreError::DuplicateId(record.id));
        }
        info!("adding requirement (id={}, title={})", record.id, record.title);
        self.records.push(record);
        Ok(())
    }

    /// Remove a requirement, returning it.
    pub fn remove(&mut self, id: &str) -> Result<RequirementRecord, DocketCoreError> {
        let Some(index) = self.records.iter().position(|record| record.id == id) else {
            warn!("requirement not found for removal (id={})", id);
            return Err(DocketCoreError::NotFound(id.to_string()));
        };
        info!("removing requirement (id={})", id);
        Ok(self.records.remove(index))
    }

    /// Set the review status of a requirement. Transitions are unrestricted.
    pub fn set_status(
        &mut self,
        id: &str,
        status: RequirementStatus,
    ) -> Result<(), DocketCoreError> {
        let record = self.get_mut(id)?;
        debug!(
            "setting requirement status (id={}, status={})",
            id,
            status.as_str()
        );
        record.status = status;
        Ok(())
    }

    /// Approve a requirement; shorthand for a status transition.
    pub fn approve(&mut self, id: &str) -> Result<(), DocketCoreError> {
        self.set_status(id, RequirementStatus::Approved)
    }

    /// Reject a requirement; shorthand for a status transition.
    pub fn reject(&mut self, id: &str) -> Result<(), DocketCoreError> {
        self.set_status(id, RequirementStatus::Rejected)
    }

    /// Case-insensitive substring search over id, title, and description.
    /// An empty query returns every record; order is preserved.
    pub fn search(&self, query: &str) -> Vec<&RequirementRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|record| {
                record.id.to_lowercase().contains(&query)
                    || record.title.to_lowercase().contains(&query)
                    || record.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Fetch a requirement by id.
    pub fn get(&self, id: &str) -> Option<&RequirementRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// All requirements in display order.
    pub fn records(&self) -> &[RequirementRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregate counts for the status board.
    pub fn stats(&self) -> RequirementStats {
        let mut stats = RequirementStats {
            total: self.records.len(),
            ..RequirementStats::default()
        };
        for record in &self.records {
            match record.status {
                RequirementStatus::Draft => stats.draft += 1,
                RequirementStatus::Pending => stats.pending += 1,
                RequirementStatus::Approved => stats.approved += 1,
                RequirementStatus::Rejected => stats.rejected += 1,
            }
        }
        stats
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut RequirementRecord, DocketCoreError> {
        self.records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| DocketCoreError::NotFound(id.to_string()))
    }
}

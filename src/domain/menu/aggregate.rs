//! Menu aggregate root.
//!
//! # Ownership
//!
//! Menus own their sections and items. Dinners and reviews are referenced
//! by id only and are managed by their own aggregates.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    bounded_text, AverageRating, DinnerId, DomainError, HostId, MenuId, MenuReviewId, Timestamp,
    MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
};

use super::MenuSection;

/// Menu aggregate - a host's published set of dishes.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `name` is 1-100 characters, `description` 1-500 characters
/// - at least one section, and every section has at least one item
/// - `average_rating` reports no value until rated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MenuRecord")]
pub struct Menu {
    id: MenuId,
    name: String,
    description: String,
    host_id: HostId,
    average_rating: AverageRating,
    sections: Vec<MenuSection>,
    dinner_ids: Vec<DinnerId>,
    menu_review_ids: Vec<MenuReviewId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Menu {
    /// Creates a menu from a fully formed section tree.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `sections` is empty
    /// - `ValidationFailed` / `EmptyField` if name or description is invalid
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
        host_id: HostId,
        sections: Vec<MenuSection>,
    ) -> Result<Self, DomainError> {
        let name = bounded_text("name", name.into(), MAX_NAME_LENGTH)?;
        let description = bounded_text("description", description.into(), MAX_DESCRIPTION_LENGTH)?;
        if sections.is_empty() {
            return Err(no_sections());
        }

        let now = Timestamp::now();
        Ok(Self {
            id: MenuId::new_unique(),
            name,
            description,
            host_id,
            average_rating: AverageRating::new(),
            sections,
            dinner_ids: Vec::new(),
            menu_review_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &MenuId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the host who published this menu.
    pub fn host_id(&self) -> &HostId {
        &self.host_id
    }

    pub fn average_rating(&self) -> &AverageRating {
        &self.average_rating
    }

    /// Returns the sections in menu order.
    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    /// Returns ids of dinners serving this menu (not owned).
    pub fn dinner_ids(&self) -> &[DinnerId] {
        &self.dinner_ids
    }

    /// Returns ids of reviews left on this menu (not owned).
    pub fn menu_review_ids(&self) -> &[MenuReviewId] {
        &self.menu_review_ids
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items().len()).sum()
    }
}

fn no_sections() -> DomainError {
    DomainError::validation("sections", "Sections must contain at least one section")
}

/// Stored shape of a menu, checked before it becomes a `Menu`.
///
/// Each section checks its own items while being deserialized.
#[derive(Deserialize)]
struct MenuRecord {
    id: MenuId,
    name: String,
    description: String,
    host_id: HostId,
    average_rating: AverageRating,
    sections: Vec<MenuSection>,
    dinner_ids: Vec<DinnerId>,
    menu_review_ids: Vec<MenuReviewId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl TryFrom<MenuRecord> for Menu {
    type Error = DomainError;

    fn try_from(record: MenuRecord) -> Result<Self, Self::Error> {
        if record.sections.is_empty() {
            return Err(no_sections());
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            host_id: record.host_id,
            average_rating: record.average_rating,
            sections: record.sections,
            dinner_ids: record.dinner_ids,
            menu_review_ids: record.menu_review_ids,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

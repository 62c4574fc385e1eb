//! Entities owned by the Menu aggregate.
//!
//! Neither type is addressable outside its parent: a `MenuItem` lives in
//! exactly one `MenuSection`, and a `MenuSection` in exactly one `Menu`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    bounded_text, DomainError, MenuItemId, MenuSectionId, MAX_NAME_LENGTH,
    MAX_SHORT_DESCRIPTION_LENGTH,
};

/// A single dish on a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    id: MenuItemId,
    name: String,
    description: String,
}

impl MenuItem {
    /// Creates an item with a fresh id.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` / `EmptyField` if name or description is blank or over 100 characters
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: MenuItemId::new_unique(),
            name: bounded_text("name", name.into(), MAX_NAME_LENGTH)?,
            description: bounded_text(
                "description",
                description.into(),
                MAX_SHORT_DESCRIPTION_LENGTH,
            )?,
        })
    }

    pub fn id(&self) -> &MenuItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// An ordered group of items, e.g. "Starters".
///
/// # Invariants
///
/// - contains at least one item, also when deserialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MenuSectionRecord")]
pub struct MenuSection {
    id: MenuSectionId,
    name: String,
    description: String,
    items: Vec<MenuItem>,
}

impl MenuSection {
    /// Creates a section with a fresh id owning `items`.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if `items` is empty
    /// - `ValidationFailed` / `EmptyField` if name or description is invalid
    pub fn create(
        name: impl Into<String>,
        description: impl Into<String>,
        items: Vec<MenuItem>,
    ) -> Result<Self, DomainError> {
        let name = bounded_text("name", name.into(), MAX_NAME_LENGTH)?;
        let description = bounded_text(
            "description",
            description.into(),
            MAX_SHORT_DESCRIPTION_LENGTH,
        )?;
        if items.is_empty() {
            return Err(no_items(&name));
        }

        Ok(Self {
            id: MenuSectionId::new_unique(),
            name,
            description,
            items,
        })
    }

    pub fn id(&self) -> &MenuSectionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the items in menu order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

fn no_items(section_name: &str) -> DomainError {
    DomainError::validation(
        "items",
        format!("Section '{}' must contain at least one item", section_name),
    )
}

/// Stored shape of a section, checked before it becomes a `MenuSection`.
#[derive(Deserialize)]
struct MenuSectionRecord {
    id: MenuSectionId,
    name: String,
    description: String,
    items: Vec<MenuItem>,
}

impl TryFrom<MenuSectionRecord> for MenuSection {
    type Error = DomainError;

    fn try_from(record: MenuSectionRecord) -> Result<Self, Self::Error> {
        if record.items.is_empty() {
            return Err(no_items(&record.name));
        }
        Ok(Self {
            id: record.id,
            name: record.name,
            description: record.description,
            items: record.items,
        })
    }
}

//! HTTP DTOs for menu endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::{CreateMenuCommand, MenuItemCommand, MenuSectionCommand};
use crate::domain::foundation::AverageRating;
use crate::domain::menu::{Menu, MenuItem, MenuSection};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a menu. The host comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMenuRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub sections: Vec<MenuSectionRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuSectionRequest {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<MenuItemRequest>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItemRequest {
    pub name: String,
    pub description: String,
}

impl CreateMenuRequest {
    pub fn into_command(self, host_id: String) -> CreateMenuCommand {
        CreateMenuCommand {
            host_id,
            name: self.name,
            description: self.description,
            sections: self
                .sections
                .into_iter()
                .map(|section| MenuSectionCommand {
                    name: section.name,
                    description: section.description,
                    items: section
                        .items
                        .into_iter()
                        .map(|item| MenuItemCommand {
                            name: item.name,
                            description: item.description,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Menu as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct MenuResponse {
    pub id: String,
    pub host_id: String,
    pub name: String,
    pub description: String,
    pub average_rating: AverageRatingResponse,
    pub sections: Vec<MenuSectionResponse>,
    pub dinner_ids: Vec<String>,
    pub menu_review_ids: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AverageRatingResponse {
    pub value: Option<f64>,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuSectionResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<MenuItemResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItemResponse {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&AverageRating> for AverageRatingResponse {
    fn from(rating: &AverageRating) -> Self {
        Self {
            value: rating.value(),
            count: rating.count(),
        }
    }
}

impl From<&MenuItem> for MenuItemResponse {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            description: item.description().to_string(),
        }
    }
}

impl From<&MenuSection> for MenuSectionResponse {
    fn from(section: &MenuSection) -> Self {
        Self {
            id: section.id().to_string(),
            name: section.name().to_string(),
            description: section.description().to_string(),
            items: section.items().iter().map(Into::into).collect(),
        }
    }
}

impl From<&Menu> for MenuResponse {
    fn from(menu: &Menu) -> Self {
        Self {
            id: menu.id().to_string(),
            host_id: menu.host_id().to_string(),
            name: menu.name().to_string(),
            description: menu.description().to_string(),
            average_rating: menu.average_rating().into(),
            sections: menu.sections().iter().map(Into::into).collect(),
            dinner_ids: menu.dinner_ids().iter().map(ToString::to_string).collect(),
            menu_review_ids: menu
                .menu_review_ids()
                .iter()
                .map(ToString::to_string)
                .collect(),
            created_at: menu.created_at().as_datetime().to_rfc3339(),
            updated_at: menu.updated_at().as_datetime().to_rfc3339(),
        }
    }
}

//! CreateMenuHandler - Command handler for publishing a host's menu.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::application::validation::{not_blank, violations};
use crate::domain::foundation::{DomainError, ErrorList, HostId};
use crate::domain::menu::{Menu, MenuItem, MenuSection};
use crate::ports::MenuRepository;

/// Command to create a menu with its full section tree.
#[derive(Debug, Clone, Validate)]
pub struct CreateMenuCommand {
    /// Raw host identifier, parsed by the handler.
    pub host_id: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 500, message = "Description must be at most 500 characters")
    )]
    pub description: String,
    #[validate(
        length(min = 1, message = "Sections must contain at least one section"),
        nested
    )]
    pub sections: Vec<MenuSectionCommand>,
}

#[derive(Debug, Clone, Validate, serde::Serialize)]
pub struct MenuSectionCommand {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Description must be at most 100 characters")
    )]
    pub description: String,
    #[validate(
        length(min = 1, message = "Section must contain at least one item"),
        nested
    )]
    pub items: Vec<MenuItemCommand>,
}

#[derive(Debug, Clone, Validate, serde::Serialize)]
pub struct MenuItemCommand {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Description must be at most 100 characters")
    )]
    pub description: String,
}

/// Handler for creating menus.
pub struct CreateMenuHandler {
    menus: Arc<dyn MenuRepository>,
}

impl CreateMenuHandler {
    pub fn new(menus: Arc<dyn MenuRepository>) -> Self {
        Self { menus }
    }

    #[tracing::instrument(name = "create_menu", skip_all)]
    pub async fn handle(&self, cmd: CreateMenuCommand) -> Result<Menu, ErrorList> {
        // 1. Validate input, host id included
        let host_id = match (HostId::parse(&cmd.host_id), ErrorList::from_vec(violations(&cmd))) {
            (Ok(id), None) => id,
            (Ok(_), Some(errors)) => return Err(errors),
            (Err(e), others) => {
                let mut errors = ErrorList::from(e);
                errors.extend(others.into_iter().flat_map(ErrorList::into_vec));
                return Err(errors);
            }
        };

        // 2. Build the section tree
        let sections = cmd
            .sections
            .into_iter()
            .map(build_section)
            .collect::<Result<Vec<_>, DomainError>>()?;

        // 3. Create and persist
        let menu = Menu::create(cmd.name, cmd.description, host_id, sections)?;
        self.menus.add(&menu).await?;

        info!(menu_id = %menu.id(), host_id = %menu.host_id(), "Menu created");
        Ok(menu)
    }
}

fn build_section(section: MenuSectionCommand) -> Result<MenuSection, DomainError> {
    let items = section
        .items
        .into_iter()
        .map(|item| MenuItem::create(item.name, item.description))
        .collect::<Result<Vec<_>, DomainError>>()?;
    MenuSection::create(section.name, section.description, items)
}

use std::rc::Rc;
use thiserror::Error;

use super::project::{Category, Project};

const EMBEDDED_CATALOG: &str = include_str!("../../assets/projects.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Project at position {index} has an empty name")]
    EmptyName { index: usize },
    #[error("Project '{name}' declares the filter-only 'all' category")]
    PseudoCategory { name: String },
}

/// Parses and validates the catalog bundled into the binary.
pub fn load_embedded() -> Result<Rc<Vec<Project>>, CatalogError> {
    let projects = parse(EMBEDDED_CATALOG)?;
    log::info!("Loaded {} projects from embedded catalog", projects.len());
    Ok(Rc::new(projects))
}

pub fn parse(json: &str) -> Result<Vec<Project>, CatalogError> {
    let projects: Vec<Project> = serde_json::from_str(json)?;
    for (index, project) in projects.iter().enumerate() {
        if project.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { index });
        }
        if project.category == Category::All {
            return Err(CatalogError::PseudoCategory {
                name: project.name.clone(),
            });
        }
    }
    Ok(projects)
}

pub mod featured_projects;
pub mod gallery_modal;
pub mod hero;
pub mod services;
pub mod tech;

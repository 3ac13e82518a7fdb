//! Browser-independent state for the featured projects section.

pub mod autoplay;
pub mod carousel;
pub mod catalog;
pub mod filter;
pub mod gallery;
pub mod layout;
pub mod project;
pub mod state;

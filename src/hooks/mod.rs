//! Reusable data hooks

pub mod request;
pub mod use_auth;
pub mod use_projects;

pub use use_auth::{use_auth, UseAuth};
pub use use_projects::{use_projects, ProjectQuery, UseProjects};

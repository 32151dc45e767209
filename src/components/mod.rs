//! Reusable UI components

pub mod badge;
pub mod footer;
pub mod hero;
pub mod loading;
pub mod navbar;
pub mod project_card;
pub mod skills;
pub mod terminal;

pub use badge::Badge;
pub use footer::Footer;
pub use hero::Hero;
pub use loading::SkeletonGrid;
pub use navbar::Navbar;
pub use project_card::ProjectCard;
pub use skills::Skills;
pub use terminal::Terminal;

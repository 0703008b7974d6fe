mod app_config;
pub mod categories;
mod config;
mod error;
pub mod products;

pub use app_config::AppConfig;
pub use categories::{
    badge_label, category_heading, category_label, is_all_categories, ALL_CATEGORIES_SLUG,
    ALL_CATEGORIES_TITLE,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use products::{Product, SortKey, ViewKind};

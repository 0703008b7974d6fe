pub mod client;
pub mod error;
pub mod fallback;
pub mod filter;
pub mod loader;
pub mod page;
pub mod parse;
pub mod render;
pub mod session;
pub mod sort;
pub mod store;
pub mod types;

pub use client::{manifest_url, ManifestClient};
pub use error::CatalogError;
pub use fallback::fallback_products;
pub use filter::{category_from_address, select_view, sync_category_address, FilterTrigger};
pub use loader::{load_catalog, CatalogSource, FallbackReason, LoadNotice, LoadOutcome};
pub use page::HtmlPage;
pub use render::{render, RenderTarget};
pub use session::PageSession;
pub use sort::sort_products;
pub use store::{CatalogStore, ViewState};

pub mod catalog;
pub mod directory;
pub mod domain;
pub mod filter;
pub mod ports;

pub use catalog::{Catalog, CatalogError};
pub use directory::Directory;
pub use domain::{
    parse_tags, Category, CategoryMeta, Pricing, SortKey, Tool, ToolDraft, ToolId, User,
    DEFAULT_POPULARITY,
};
pub use filter::{filter_and_sort, Filter};
pub use ports::{Credentials, CredentialVerifier, FavoritesStore, PortError, PortResult, SeedSource};

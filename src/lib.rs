//! Artist CMS: descriptor-driven REST CRUD for the site's content tables.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{ResourceDescriptor, ResourceRegistry, Settings, ALL_RESOURCES};
pub use error::{Action, AppError, ConfigError, ResourceError};
pub use routes::{app, common_routes, resource_routes};
pub use seed::{seed_all, SeedReport};
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_resource_tables};

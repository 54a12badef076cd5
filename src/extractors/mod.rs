pub mod resource;

pub use resource::{RecordId, Resource};

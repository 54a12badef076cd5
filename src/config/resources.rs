//! The six resource kinds served by the site backend and a lookup registry.

use crate::config::descriptor::{ColumnType, FieldSpec, ResourceDescriptor, CREATED_AT_COLUMN};
use std::collections::HashMap;

const MEDIA_TYPES: &[&str] = &["image", "video"];

const NEWS_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", ColumnType::Varchar(255)),
    FieldSpec::required("type", ColumnType::Varchar(50)).one_of(MEDIA_TYPES),
    FieldSpec::required("url", ColumnType::Text),
    FieldSpec::optional("description", ColumnType::Text),
];

const RELEASE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", ColumnType::Varchar(255)),
    FieldSpec::required("date", ColumnType::Varchar(100)),
    FieldSpec::required("image_url", ColumnType::Text),
];

const GALLERY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("type", ColumnType::Varchar(50)).one_of(MEDIA_TYPES),
    FieldSpec::required("url", ColumnType::Text),
    FieldSpec::required("title", ColumnType::Varchar(255)),
];

const EVENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", ColumnType::Varchar(255)),
    FieldSpec::required("date", ColumnType::Varchar(100)),
    FieldSpec::required("location", ColumnType::Varchar(255)),
    FieldSpec::optional("ticket_url", ColumnType::Text),
];

const MILESTONE_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("year", ColumnType::Varchar(10)),
    FieldSpec::required("text", ColumnType::Text),
];

const INDUSTRIAL_PROJECT_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("title", ColumnType::Varchar(255)),
    FieldSpec::required("description", ColumnType::Text),
];

pub static NEWS: ResourceDescriptor = ResourceDescriptor {
    path_segment: "news",
    table: "news",
    singular: "news",
    plural: "news",
    fields: NEWS_FIELDS,
    order_by: CREATED_AT_COLUMN,
};

pub static RELEASES: ResourceDescriptor = ResourceDescriptor {
    path_segment: "releases",
    table: "releases",
    singular: "release",
    plural: "releases",
    fields: RELEASE_FIELDS,
    order_by: CREATED_AT_COLUMN,
};

pub static GALLERY: ResourceDescriptor = ResourceDescriptor {
    path_segment: "gallery",
    table: "gallery",
    singular: "gallery item",
    plural: "gallery",
    fields: GALLERY_FIELDS,
    order_by: CREATED_AT_COLUMN,
};

pub static EVENTS: ResourceDescriptor = ResourceDescriptor {
    path_segment: "events",
    table: "events",
    singular: "event",
    plural: "events",
    fields: EVENT_FIELDS,
    order_by: "date",
};

pub static MILESTONES: ResourceDescriptor = ResourceDescriptor {
    path_segment: "milestones",
    table: "milestones",
    singular: "milestone",
    plural: "milestones",
    fields: MILESTONE_FIELDS,
    order_by: "year",
};

pub static INDUSTRIAL_PROJECTS: ResourceDescriptor = ResourceDescriptor {
    path_segment: "industrial-projects",
    table: "industrial_projects",
    singular: "industrial project",
    plural: "industrial projects",
    fields: INDUSTRIAL_PROJECT_FIELDS,
    order_by: CREATED_AT_COLUMN,
};

/// Every served resource kind, in seeding order.
pub static ALL_RESOURCES: [&ResourceDescriptor; 6] = [
    &NEWS,
    &RELEASES,
    &GALLERY,
    &EVENTS,
    &MILESTONES,
    &INDUSTRIAL_PROJECTS,
];

/// Path segment -> descriptor lookup used by the router.
#[derive(Clone, Debug)]
pub struct ResourceRegistry {
    ordered: Vec<&'static ResourceDescriptor>,
    by_path: HashMap<&'static str, &'static ResourceDescriptor>,
}

impl ResourceRegistry {
    pub fn new(resources: &[&'static ResourceDescriptor]) -> Self {
        let by_path = resources.iter().map(|r| (r.path_segment, *r)).collect();
        ResourceRegistry {
            ordered: resources.to_vec(),
            by_path,
        }
    }

    pub fn get(&self, path_segment: &str) -> Option<&'static ResourceDescriptor> {
        self.by_path.get(path_segment).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ResourceDescriptor> + '_ {
        self.ordered.iter().copied()
    }
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        ResourceRegistry::new(&ALL_RESOURCES)
    }
}

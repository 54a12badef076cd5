//! Demonstration content for a fresh site. Inserted through the same create path the API uses.
//! No idempotency: every run appends another copy of each row.

use crate::config::{ResourceDescriptor, EVENTS, GALLERY, INDUSTRIAL_PROJECTS, MILESTONES, NEWS, RELEASES};
use crate::error::AppError;
use crate::service::CrudService;
use serde_json::{json, Value};
use sqlx::PgPool;

/// Rows inserted per resource kind by one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: Vec<(&'static str, usize)>,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.inserted.iter().map(|(_, n)| n).sum()
    }
}

/// The fixed demonstration rows, in insertion order.
pub fn demo_rows() -> Vec<(&'static ResourceDescriptor, Vec<Value>)> {
    vec![
        (
            &NEWS,
            vec![
                json!({
                    "title": "New Industrial EP Release",
                    "type": "image",
                    "url": "https://via.placeholder.com/800x400/1a1a1a/E53935?text=INDUSTRIAL+EP",
                    "description": "Latest dark techno release featuring 4 tracks of pure industrial energy"
                }),
                json!({
                    "title": "Berlin Underground Performance",
                    "type": "video",
                    "url": "https://via.placeholder.com/800x400/1a1a1a/FB8C00?text=LIVE+BERLIN",
                    "description": "Live performance from the underground Berlin scene"
                }),
                json!({
                    "title": "Studio Session Behind the Scenes",
                    "type": "image",
                    "url": "https://via.placeholder.com/800x400/1a1a1a/FDD835?text=STUDIO+SESSION",
                    "description": "Exclusive look into the creative process"
                }),
            ],
        ),
        (
            &RELEASES,
            vec![
                json!({
                    "title": "RITUALS EP",
                    "date": "September 2025",
                    "imageUrl": "https://via.placeholder.com/300x200/E53935/ffffff?text=RITUALS"
                }),
                json!({
                    "title": "FREQUENCIES Single",
                    "date": "October 2025",
                    "imageUrl": "https://via.placeholder.com/300x200/FB8C00/ffffff?text=FREQUENCIES"
                }),
            ],
        ),
        (
            &GALLERY,
            vec![
                json!({
                    "type": "image",
                    "url": "https://via.placeholder.com/400x400/1a1a1a/FB8C00?text=Photo+1",
                    "title": "Studio Session"
                }),
                json!({
                    "type": "image",
                    "url": "https://via.placeholder.com/400x400/1a1a1a/E53935?text=Photo+2",
                    "title": "Live Performance"
                }),
                json!({
                    "type": "video",
                    "url": "https://via.placeholder.com/400x400/1a1a1a/FDD835?text=Video+1",
                    "title": "Behind the Scenes"
                }),
            ],
        ),
        (
            &EVENTS,
            vec![
                json!({
                    "title": "Industrial Night Berlin",
                    "date": "2025-08-15",
                    "location": "Berghain, Berlin",
                    "ticketUrl": "#"
                }),
                json!({
                    "title": "Techno Underground Festival",
                    "date": "2025-09-20",
                    "location": "Amsterdam, Netherlands",
                    "ticketUrl": "#"
                }),
                json!({
                    "title": "ANDHRAY Solo Show",
                    "date": "2025-10-10",
                    "location": "Paris, France",
                    "ticketUrl": "#"
                }),
            ],
        ),
        (
            &MILESTONES,
            vec![
                json!({"year": "2021", "text": "Started producing industrial techno"}),
                json!({"year": "2022", "text": "First major festival performance"}),
                json!({"year": "2023", "text": "Founded Industrial Girls Records"}),
                json!({"year": "2024", "text": "International tour across 10 countries"}),
            ],
        ),
        (
            &INDUSTRIAL_PROJECTS,
            vec![
                json!({"title": "Label Releases", "description": "25+ artists featured"}),
                json!({"title": "Collaborations", "description": "International partnerships"}),
                json!({"title": "Events", "description": "Monthly showcases"}),
            ],
        ),
    ]
}

/// Insert every demonstration row, one resource kind at a time.
/// Stops at the first failure; rows inserted before it are kept.
pub async fn seed_all(pool: &PgPool) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();
    for (resource, rows) in demo_rows() {
        for row in &rows {
            let body = row
                .as_object()
                .ok_or_else(|| AppError::Validation(format!("seed row for {} is not an object", resource.table)))?;
            CrudService::create(pool, resource, body).await?;
        }
        tracing::info!(resource = resource.path_segment, rows = rows.len(), "seeded");
        report.inserted.push((resource.path_segment, rows.len()));
    }
    Ok(report)
}

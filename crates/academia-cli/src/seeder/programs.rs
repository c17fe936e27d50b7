//! Program generation and insertion.

use academia_models::{FacultyId, ProgramId};
use fake::Fake;
use fake::faker::company::en::Buzzword;
use rayon::prelude::*;
use sqlx::query_builder::Separated;
use sqlx::{PgPool, Postgres};
use std::time::Instant;

use super::batch::{SeedRow, insert_batch, run_tag};
use super::models::ProgramSeed;

impl SeedRow for ProgramSeed {
    const TABLE: &'static str = "programs";
    const COLUMNS: &'static str = "name, faculty_id";

    fn bind<'args>(&'args self, mut row: Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(&self.name).push_bind(self.faculty_id);
    }
}

/// Generates `per_faculty` programs for each faculty.
pub fn generate_programs(faculty_ids: &[FacultyId], per_faculty: usize) -> Vec<ProgramSeed> {
    let tag = run_tag();
    faculty_ids
        .par_iter()
        .enumerate()
        .flat_map_iter(|(faculty_idx, &faculty_id)| {
            let tag = tag.clone();
            (0..per_faculty).map(move |i| {
                let topic: String = Buzzword().fake();
                ProgramSeed {
                    name: format!("{topic} Engineering {tag}-{faculty_idx}-{i}"),
                    faculty_id,
                }
            })
        })
        .collect()
}

pub async fn seed_programs(
    db: &PgPool,
    faculty_ids: &[FacultyId],
    per_faculty: usize,
) -> anyhow::Result<Vec<ProgramId>> {
    let start_time = Instant::now();
    println!(
        "🎓 Seeding {} programs ({} per faculty)...",
        faculty_ids.len() * per_faculty,
        per_faculty
    );

    let programs = generate_programs(faculty_ids, per_faculty);
    let ids: Vec<ProgramId> = insert_batch(db, &programs)
        .await?
        .into_iter()
        .map(ProgramId::from)
        .collect();

    println!(
        "   ✓ Inserted {} programs in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

//! Professor generation and insertion.

use academia_models::{ProfessorId, SubjectId};
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::query_builder::Separated;
use sqlx::{PgPool, Postgres};
use std::time::Instant;

use super::batch::{SeedRow, insert_batch};
use super::models::ProfessorSeed;

impl SeedRow for ProfessorSeed {
    const TABLE: &'static str = "professors";
    const COLUMNS: &'static str = "first_name, last_name, subject_id";

    fn bind<'args>(&'args self, mut row: Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(&self.first_name)
            .push_bind(&self.last_name)
            .push_bind(self.subject_id);
    }
}

/// Generates `per_subject` professors for each subject. Names need not be unique.
pub fn generate_professors(subject_ids: &[SubjectId], per_subject: usize) -> Vec<ProfessorSeed> {
    subject_ids
        .par_iter()
        .flat_map_iter(|&subject_id| {
            (0..per_subject).map(move |_| ProfessorSeed {
                first_name: FirstName().fake(),
                last_name: LastName().fake(),
                subject_id,
            })
        })
        .collect()
}

pub async fn seed_professors(
    db: &PgPool,
    subject_ids: &[SubjectId],
    per_subject: usize,
) -> anyhow::Result<Vec<ProfessorId>> {
    let start_time = Instant::now();
    println!(
        "🧑‍🏫 Seeding {} professors ({} per subject)...",
        subject_ids.len() * per_subject,
        per_subject
    );

    let professors = generate_professors(subject_ids, per_subject);
    let ids: Vec<ProfessorId> = insert_batch(db, &professors)
        .await?
        .into_iter()
        .map(ProfessorId::from)
        .collect();

    println!(
        "   ✓ Inserted {} professors in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

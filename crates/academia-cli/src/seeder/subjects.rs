//! Subject generation and insertion.

use academia_models::{ProgramId, SubjectId};
use fake::Fake;
use fake::faker::lorem::en::Word;
use rayon::prelude::*;
use sqlx::query_builder::Separated;
use sqlx::{PgPool, Postgres};
use std::time::Instant;

use super::batch::{SeedRow, insert_batch, run_tag};
use super::models::SubjectSeed;

const LEVELS: [&str; 4] = ["I", "II", "III", "IV"];

impl SeedRow for SubjectSeed {
    const TABLE: &'static str = "subjects";
    const COLUMNS: &'static str = "name, program_id";

    fn bind<'args>(&'args self, mut row: Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(&self.name).push_bind(self.program_id);
    }
}

/// Generates `per_program` subjects for each program.
pub fn generate_subjects(program_ids: &[ProgramId], per_program: usize) -> Vec<SubjectSeed> {
    let tag = run_tag();
    program_ids
        .par_iter()
        .enumerate()
        .flat_map_iter(|(program_idx, &program_id)| {
            let tag = tag.clone();
            (0..per_program).map(move |i| {
                let word: String = Word().fake();
                let level = LEVELS[i % LEVELS.len()];
                SubjectSeed {
                    name: format!("{word} {level} {tag}-{program_idx}-{i}"),
                    program_id,
                }
            })
        })
        .collect()
}

pub async fn seed_subjects(
    db: &PgPool,
    program_ids: &[ProgramId],
    per_program: usize,
) -> anyhow::Result<Vec<SubjectId>> {
    let start_time = Instant::now();
    println!(
        "📖 Seeding {} subjects ({} per program)...",
        program_ids.len() * per_program,
        per_program
    );

    let subjects = generate_subjects(program_ids, per_program);
    let ids: Vec<SubjectId> = insert_batch(db, &subjects)
        .await?
        .into_iter()
        .map(SubjectId::from)
        .collect();

    println!(
        "   ✓ Inserted {} subjects in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

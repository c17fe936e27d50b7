//! Faculty generation and insertion.

use academia_models::FacultyId;
use fake::Fake;
use fake::faker::company::en::Industry;
use fake::faker::name::en::Name;
use rayon::prelude::*;
use sqlx::query_builder::Separated;
use sqlx::{PgPool, Postgres};
use std::time::Instant;

use super::batch::{SeedRow, insert_batch, run_tag};
use super::models::FacultySeed;

impl SeedRow for FacultySeed {
    const TABLE: &'static str = "faculties";
    const COLUMNS: &'static str = "name, director";

    fn bind<'args>(&'args self, mut row: Separated<'_, 'args, Postgres, &'static str>) {
        row.push_bind(&self.name).push_bind(&self.director);
    }
}

/// Generates faculties in parallel. Roughly one in five has no director.
pub fn generate_faculties(count: usize) -> Vec<FacultySeed> {
    let tag = run_tag();
    (0..count)
        .into_par_iter()
        .map(|i| {
            let field: String = Industry().fake();
            let director = (i % 5 != 4).then(|| Name().fake::<String>());
            FacultySeed {
                name: format!("Faculty of {field} {tag}-{i}"),
                director,
            }
        })
        .collect()
}

pub async fn seed_faculties(db: &PgPool, count: usize) -> anyhow::Result<Vec<FacultyId>> {
    let start_time = Instant::now();
    println!("🏛️  Seeding {} faculties...", count);

    let faculties = generate_faculties(count);
    let ids: Vec<FacultyId> = insert_batch(db, &faculties)
        .await?
        .into_iter()
        .map(FacultyId::from)
        .collect();

    println!(
        "   ✓ Inserted {} faculties in {:?}",
        ids.len(),
        start_time.elapsed()
    );
    Ok(ids)
}

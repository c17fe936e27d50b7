//! Database seeding for faculties, programs, subjects and professors.
//!
//! Rows are generated in parallel with Rayon and written with multi-value
//! INSERT statements, one transaction per table. Each level of the hierarchy
//! references the ids returned by the level above it.

pub mod batch;
pub mod faculties;
pub mod models;
pub mod professors;
pub mod programs;
pub mod subjects;

pub use models::SeedConfig;

use sqlx::PgPool;
use std::time::Instant;

/// Row counts produced by [`seed_all`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub faculties: usize,
    pub programs: usize,
    pub subjects: usize,
    pub professors: usize,
}

pub async fn seed_all(db: &PgPool, config: &SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!("   - Faculties: {}", config.faculties);
    println!(
        "   - Programs per faculty: {}, Subjects per program: {}, Professors per subject: {}",
        config.programs_per_faculty, config.subjects_per_program, config.professors_per_subject
    );

    let faculty_ids = faculties::seed_faculties(db, config.faculties).await?;
    let program_ids =
        programs::seed_programs(db, &faculty_ids, config.programs_per_faculty).await?;
    let subject_ids =
        subjects::seed_subjects(db, &program_ids, config.subjects_per_program).await?;
    let professor_ids =
        professors::seed_professors(db, &subject_ids, config.professors_per_subject).await?;

    let summary = SeedSummary {
        faculties: faculty_ids.len(),
        programs: program_ids.len(),
        subjects: subject_ids.len(),
        professors: professor_ids.len(),
    };

    println!(
        "\n✅ Seeding complete! Created {} faculties, {} programs, {} subjects, {} professors in {:?}",
        summary.faculties,
        summary.programs,
        summary.subjects,
        summary.professors,
        start_time.elapsed()
    );

    Ok(summary)
}

/// Deletes every row from the four academic tables, children first.
pub async fn clear_all(db: &PgPool) -> anyhow::Result<u64> {
    let start_time = Instant::now();
    println!("🗑️  Clearing academic records...");

    let mut tx = db.begin().await?;
    let mut deleted = 0;
    for table in ["professors", "subjects", "programs", "faculties"] {
        let rows = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await?
            .rows_affected();
        println!("   ✓ Deleted {} rows from {}", rows, table);
        deleted += rows;
    }
    tx.commit().await?;

    println!("✅ Cleared {} rows in {:?}", deleted, start_time.elapsed());
    Ok(deleted)
}

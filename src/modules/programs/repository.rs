use std::collections::HashMap;

use academia_models::{
    CreateProgramDto, FacultyId, FacultySummary, Program, ProgramDetail, ProgramId,
    SubjectSummary, UpdateProgramDto,
};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::repository::{CrudRepository, Page, RepoFuture, RepositoryError};

const COLUMNS: &str = "id, name, faculty_id, created_at, updated_at";

#[derive(FromRow)]
struct SubjectRow {
    program_id: ProgramId,
    #[sqlx(flatten)]
    subject: SubjectSummary,
}

#[derive(Debug, Clone)]
pub struct PgProgramRepository {
    db: PgPool,
}

impl PgProgramRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Attaches each program's faculty and subjects.
    async fn with_relations(
        &self,
        programs: Vec<Program>,
    ) -> Result<Vec<ProgramDetail>, RepositoryError> {
        let ids: Vec<ProgramId> = programs.iter().map(|p| p.id).collect();
        let faculty_ids: Vec<FacultyId> = programs.iter().filter_map(|p| p.faculty_id).collect();

        let faculties: HashMap<FacultyId, FacultySummary> = sqlx::query_as::<_, FacultySummary>(
            "SELECT id, name, director FROM faculties WHERE id = ANY($1)",
        )
        .bind(&faculty_ids)
        .fetch_all(&self.db)
        .await?
        .into_iter()
        .map(|f| (f.id, f))
        .collect();

        let rows = sqlx::query_as::<_, SubjectRow>(
            "SELECT id, name, program_id FROM subjects WHERE program_id = ANY($1) ORDER BY name",
        )
        .bind(&ids)
        .fetch_all(&self.db)
        .await?;

        let mut subjects: HashMap<ProgramId, Vec<SubjectSummary>> = HashMap::new();
        for row in rows {
            subjects.entry(row.program_id).or_default().push(row.subject);
        }

        Ok(programs
            .into_iter()
            .map(|program| {
                let faculty = program
                    .faculty_id
                    .and_then(|id| faculties.get(&id).cloned());
                let children = subjects.remove(&program.id).unwrap_or_default();
                ProgramDetail::new(program, faculty, children)
            })
            .collect())
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "programs"))]
    async fn list_programs(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Page<ProgramDetail>, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM programs")
            .fetch_one(&self.db)
            .await?;

        let programs = sqlx::query_as::<_, Program>(&format!(
            "SELECT {COLUMNS} FROM programs ORDER BY created_at, id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(Page {
            items: self.with_relations(programs).await?,
            total,
        })
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "programs"))]
    async fn get_program(&self, id: ProgramId) -> Result<ProgramDetail, RepositoryError> {
        let program = sqlx::query_as::<_, Program>(&format!(
            "SELECT {COLUMNS} FROM programs WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(RepositoryError::not_found::<Program>)?;

        let mut details = self.with_relations(vec![program]).await?;
        details.pop().ok_or_else(RepositoryError::not_found::<Program>)
    }

    #[instrument(skip(self), fields(db.operation = "INSERT", db.table = "programs"))]
    async fn create_program(&self, dto: CreateProgramDto) -> Result<Program, RepositoryError> {
        sqlx::query_as::<_, Program>(&format!(
            "INSERT INTO programs (name, faculty_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(dto.faculty_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from_write::<Program>)
    }

    #[instrument(skip(self), fields(db.operation = "UPDATE", db.table = "programs"))]
    async fn update_program(
        &self,
        id: ProgramId,
        dto: UpdateProgramDto,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE programs
               SET name = COALESCE($1, name),
                   faculty_id = COALESCE($2, faculty_id),
                   updated_at = NOW()
               WHERE id = $3"#,
        )
        .bind(&dto.name)
        .bind(dto.faculty_id)
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from_write::<Program>)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Program>());
        }

        Ok(())
    }

    #[instrument(skip(self), fields(db.operation = "DELETE", db.table = "programs"))]
    async fn delete_program(&self, id: ProgramId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM programs WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Program>());
        }

        Ok(())
    }
}

impl CrudRepository<Program> for PgProgramRepository {
    fn list(&self, offset: i64, limit: i64) -> RepoFuture<'_, Page<ProgramDetail>> {
        Box::pin(self.list_programs(offset, limit))
    }

    fn get(&self, id: ProgramId) -> RepoFuture<'_, ProgramDetail> {
        Box::pin(self.get_program(id))
    }

    fn create(&self, dto: CreateProgramDto) -> RepoFuture<'_, Program> {
        Box::pin(self.create_program(dto))
    }

    fn update(&self, id: ProgramId, dto: UpdateProgramDto) -> RepoFuture<'_, ()> {
        Box::pin(self.update_program(id, dto))
    }

    fn delete(&self, id: ProgramId) -> RepoFuture<'_, ()> {
        Box::pin(self.delete_program(id))
    }
}

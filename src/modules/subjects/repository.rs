use std::collections::HashMap;

use academia_models::{
    CreateSubjectDto, ProfessorSummary, ProgramId, ProgramRef, Subject, SubjectDetail, SubjectId,
    UpdateSubjectDto,
};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::repository::{CrudRepository, Page, RepoFuture, RepositoryError};

const COLUMNS: &str = "id, name, program_id, created_at, updated_at";

#[derive(FromRow)]
struct ProfessorRow {
    subject_id: SubjectId,
    #[sqlx(flatten)]
    professor: ProfessorSummary,
}

#[derive(Debug, Clone)]
pub struct PgSubjectRepository {
    db: PgPool,
}

impl PgSubjectRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Attaches each subject's program and professors.
    async fn with_relations(
        &self,
        subjects: Vec<Subject>,
    ) -> Result<Vec<SubjectDetail>, RepositoryError> {
        let ids: Vec<SubjectId> = subjects.iter().map(|s| s.id).collect();
        let program_ids: Vec<ProgramId> = subjects.iter().filter_map(|s| s.program_id).collect();

        let programs: HashMap<ProgramId, ProgramRef> = sqlx::query_as::<_, ProgramRef>(
            "SELECT id, name, faculty_id FROM programs WHERE id = ANY($1)",
        )
        .bind(&program_ids)
        .fetch_all(&self.db)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

        let rows = sqlx::query_as::<_, ProfessorRow>(
            r#"SELECT id, first_name, last_name, subject_id
               FROM professors
               WHERE subject_id = ANY($1)
               ORDER BY last_name, first_name"#,
        )
        .bind(&ids)
        .fetch_all(&self.db)
        .await?;

        let mut professors: HashMap<SubjectId, Vec<ProfessorSummary>> = HashMap::new();
        for row in rows {
            professors
                .entry(row.subject_id)
                .or_default()
                .push(row.professor);
        }

        Ok(subjects
            .into_iter()
            .map(|subject| {
                let program = subject
                    .program_id
                    .and_then(|id| programs.get(&id).cloned());
                let children = professors.remove(&subject.id).unwrap_or_default();
                SubjectDetail::new(subject, program, children)
            })
            .collect())
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "subjects"))]
    async fn list_subjects(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Page<SubjectDetail>, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM subjects")
            .fetch_one(&self.db)
            .await?;

        let subjects = sqlx::query_as::<_, Subject>(&format!(
            "SELECT {COLUMNS} FROM subjects ORDER BY created_at, id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(Page {
            items: self.with_relations(subjects).await?,
            total,
        })
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "subjects"))]
    async fn get_subject(&self, id: SubjectId) -> Result<SubjectDetail, RepositoryError> {
        let subject = sqlx::query_as::<_, Subject>(&format!(
            "SELECT {COLUMNS} FROM subjects WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(RepositoryError::not_found::<Subject>)?;

        let mut details = self.with_relations(vec![subject]).await?;
        details.pop().ok_or_else(RepositoryError::not_found::<Subject>)
    }

    #[instrument(skip(self), fields(db.operation = "INSERT", db.table = "subjects"))]
    async fn create_subject(&self, dto: CreateSubjectDto) -> Result<Subject, RepositoryError> {
        sqlx::query_as::<_, Subject>(&format!(
            "INSERT INTO subjects (name, program_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(dto.program_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from_write::<Subject>)
    }

    #[instrument(skip(self), fields(db.operation = "UPDATE", db.table = "subjects"))]
    async fn update_subject(
        &self,
        id: SubjectId,
        dto: UpdateSubjectDto,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE subjects
               SET name = COALESCE($1, name),
                   program_id = COALESCE($2, program_id),
                   updated_at = NOW()
               WHERE id = $3"#,
        )
        .bind(&dto.name)
        .bind(dto.program_id)
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from_write::<Subject>)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Subject>());
        }

        Ok(())
    }

    #[instrument(skip(self), fields(db.operation = "DELETE", db.table = "subjects"))]
    async fn delete_subject(&self, id: SubjectId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Subject>());
        }

        Ok(())
    }
}

impl CrudRepository<Subject> for PgSubjectRepository {
    fn list(&self, offset: i64, limit: i64) -> RepoFuture<'_, Page<SubjectDetail>> {
        Box::pin(self.list_subjects(offset, limit))
    }

    fn get(&self, id: SubjectId) -> RepoFuture<'_, SubjectDetail> {
        Box::pin(self.get_subject(id))
    }

    fn create(&self, dto: CreateSubjectDto) -> RepoFuture<'_, Subject> {
        Box::pin(self.create_subject(dto))
    }

    fn update(&self, id: SubjectId, dto: UpdateSubjectDto) -> RepoFuture<'_, ()> {
        Box::pin(self.update_subject(id, dto))
    }

    fn delete(&self, id: SubjectId) -> RepoFuture<'_, ()> {
        Box::pin(self.delete_subject(id))
    }
}

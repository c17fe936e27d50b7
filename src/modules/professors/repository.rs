use std::collections::HashMap;

use academia_models::{
    CreateProfessorDto, Professor, ProfessorDetail, ProfessorId, SubjectId, SubjectSummary,
    UpdateProfessorDto,
};
use sqlx::PgPool;
use tracing::instrument;

use crate::repository::{CrudRepository, Page, RepoFuture, RepositoryError};

const COLUMNS: &str = "id, first_name, last_name, subject_id, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PgProfessorRepository {
    db: PgPool,
}

impl PgProfessorRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    async fn with_subjects(
        &self,
        professors: Vec<Professor>,
    ) -> Result<Vec<ProfessorDetail>, RepositoryError> {
        let subject_ids: Vec<SubjectId> =
            professors.iter().filter_map(|p| p.subject_id).collect();

        let subjects: HashMap<SubjectId, SubjectSummary> = sqlx::query_as::<_, SubjectSummary>(
            "SELECT id, name FROM subjects WHERE id = ANY($1)",
        )
        .bind(&subject_ids)
        .fetch_all(&self.db)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

        Ok(professors
            .into_iter()
            .map(|professor| {
                let subject = professor
                    .subject_id
                    .and_then(|id| subjects.get(&id).cloned());
                ProfessorDetail::new(professor, subject)
            })
            .collect())
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "professors"))]
    async fn list_professors(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Page<ProfessorDetail>, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM professors")
            .fetch_one(&self.db)
            .await?;

        let professors = sqlx::query_as::<_, Professor>(&format!(
            "SELECT {COLUMNS} FROM professors ORDER BY created_at, id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(Page {
            items: self.with_subjects(professors).await?,
            total,
        })
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "professors"))]
    async fn get_professor(&self, id: ProfessorId) -> Result<ProfessorDetail, RepositoryError> {
        let professor = sqlx::query_as::<_, Professor>(&format!(
            "SELECT {COLUMNS} FROM professors WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(RepositoryError::not_found::<Professor>)?;

        let mut details = self.with_subjects(vec![professor]).await?;
        details
            .pop()
            .ok_or_else(RepositoryError::not_found::<Professor>)
    }

    #[instrument(skip(self), fields(db.operation = "INSERT", db.table = "professors"))]
    async fn create_professor(
        &self,
        dto: CreateProfessorDto,
    ) -> Result<Professor, RepositoryError> {
        sqlx::query_as::<_, Professor>(&format!(
            r#"INSERT INTO professors (first_name, last_name, subject_id)
               VALUES ($1, $2, $3)
               RETURNING {COLUMNS}"#
        ))
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(dto.subject_id)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from_write::<Professor>)
    }

    #[instrument(skip(self), fields(db.operation = "UPDATE", db.table = "professors"))]
    async fn update_professor(
        &self,
        id: ProfessorId,
        dto: UpdateProfessorDto,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE professors
               SET first_name = COALESCE($1, first_name),
                   last_name = COALESCE($2, last_name),
                   subject_id = COALESCE($3, subject_id),
                   updated_at = NOW()
               WHERE id = $4"#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(dto.subject_id)
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from_write::<Professor>)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Professor>());
        }

        Ok(())
    }

    #[instrument(skip(self), fields(db.operation = "DELETE", db.table = "professors"))]
    async fn delete_professor(&self, id: ProfessorId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM professors WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Professor>());
        }

        Ok(())
    }
}

impl CrudRepository<Professor> for PgProfessorRepository {
    fn list(&self, offset: i64, limit: i64) -> RepoFuture<'_, Page<ProfessorDetail>> {
        Box::pin(self.list_professors(offset, limit))
    }

    fn get(&self, id: ProfessorId) -> RepoFuture<'_, ProfessorDetail> {
        Box::pin(self.get_professor(id))
    }

    fn create(&self, dto: CreateProfessorDto) -> RepoFuture<'_, Professor> {
        Box::pin(self.create_professor(dto))
    }

    fn update(&self, id: ProfessorId, dto: UpdateProfessorDto) -> RepoFuture<'_, ()> {
        Box::pin(self.update_professor(id, dto))
    }

    fn delete(&self, id: ProfessorId) -> RepoFuture<'_, ()> {
        Box::pin(self.delete_professor(id))
    }
}

use std::collections::HashMap;

use academia_models::{
    CreateFacultyDto, Faculty, FacultyDetail, FacultyId, ProgramSummary, UpdateFacultyDto,
};
use sqlx::{FromRow, PgPool};
use tracing::instrument;

use crate::repository::{CrudRepository, Page, RepoFuture, RepositoryError};

const COLUMNS: &str = "id, name, director, created_at, updated_at";

#[derive(FromRow)]
struct ProgramRow {
    faculty_id: FacultyId,
    #[sqlx(flatten)]
    program: ProgramSummary,
}

#[derive(Debug, Clone)]
pub struct PgFacultyRepository {
    db: PgPool,
}

impl PgFacultyRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Attaches each faculty's programs, fetched in one query.
    async fn with_programs(
        &self,
        faculties: Vec<Faculty>,
    ) -> Result<Vec<FacultyDetail>, RepositoryError> {
        let ids: Vec<FacultyId> = faculties.iter().map(|f| f.id).collect();

        let rows = sqlx::query_as::<_, ProgramRow>(
            "SELECT id, name, faculty_id FROM programs WHERE faculty_id = ANY($1) ORDER BY name",
        )
        .bind(&ids)
        .fetch_all(&self.db)
        .await?;

        let mut programs: HashMap<FacultyId, Vec<ProgramSummary>> = HashMap::new();
        for row in rows {
            programs.entry(row.faculty_id).or_default().push(row.program);
        }

        Ok(faculties
            .into_iter()
            .map(|faculty| {
                let children = programs.remove(&faculty.id).unwrap_or_default();
                FacultyDetail::new(faculty, children)
            })
            .collect())
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "faculties"))]
    async fn list_faculties(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<Page<FacultyDetail>, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM faculties")
            .fetch_one(&self.db)
            .await?;

        let faculties = sqlx::query_as::<_, Faculty>(&format!(
            "SELECT {COLUMNS} FROM faculties ORDER BY created_at, id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(Page {
            items: self.with_programs(faculties).await?,
            total,
        })
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "faculties"))]
    async fn get_faculty(&self, id: FacultyId) -> Result<FacultyDetail, RepositoryError> {
        let faculty = sqlx::query_as::<_, Faculty>(&format!(
            "SELECT {COLUMNS} FROM faculties WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(RepositoryError::not_found::<Faculty>)?;

        let mut details = self.with_programs(vec![faculty]).await?;
        details.pop().ok_or_else(RepositoryError::not_found::<Faculty>)
    }

    #[instrument(skip(self), fields(db.operation = "INSERT", db.table = "faculties"))]
    async fn create_faculty(&self, dto: CreateFacultyDto) -> Result<Faculty, RepositoryError> {
        sqlx::query_as::<_, Faculty>(&format!(
            "INSERT INTO faculties (name, director) VALUES ($1, $2) RETURNING {COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.director)
        .fetch_one(&self.db)
        .await
        .map_err(RepositoryError::from_write::<Faculty>)
    }

    #[instrument(skip(self), fields(db.operation = "UPDATE", db.table = "faculties"))]
    async fn update_faculty(
        &self,
        id: FacultyId,
        dto: UpdateFacultyDto,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE faculties
               SET name = COALESCE($1, name),
                   director = COALESCE($2, director),
                   updated_at = NOW()
               WHERE id = $3"#,
        )
        .bind(&dto.name)
        .bind(&dto.director)
        .bind(id)
        .execute(&self.db)
        .await
        .map_err(RepositoryError::from_write::<Faculty>)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Faculty>());
        }

        Ok(())
    }

    #[instrument(skip(self), fields(db.operation = "DELETE", db.table = "faculties"))]
    async fn delete_faculty(&self, id: FacultyId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM faculties WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found::<Faculty>());
        }

        Ok(())
    }
}

impl CrudRepository<Faculty> for PgFacultyRepository {
    fn list(&self, offset: i64, limit: i64) -> RepoFuture<'_, Page<FacultyDetail>> {
        Box::pin(self.list_faculties(offset, limit))
    }

    fn get(&self, id: FacultyId) -> RepoFuture<'_, FacultyDetail> {
        Box::pin(self.get_faculty(id))
    }

    fn create(&self, dto: CreateFacultyDto) -> RepoFuture<'_, Faculty> {
        Box::pin(self.create_faculty(dto))
    }

    fn update(&self, id: FacultyId, dto: UpdateFacultyDto) -> RepoFuture<'_, ()> {
        Box::pin(self.update_faculty(id, dto))
    }

    fn delete(&self, id: FacultyId) -> RepoFuture<'_, ()> {
        Box::pin(self.delete_faculty(id))
    }
}

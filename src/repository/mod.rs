//! Storage seam for the four entity resources.
//!
//! Controllers only see [`CrudRepository`]; the server wires in the Postgres
//! implementations from each module, tests wire in [`memory::MemoryRepository`].
//! Methods return boxed futures so the trait stays usable as
//! `Arc<dyn CrudRepository<E>>`.

use std::future::Future;
use std::pin::Pin;

use academia_core::AppError;
use academia_models::{
    CreateFacultyDto, CreateProfessorDto, CreateProgramDto, CreateSubjectDto, Faculty,
    FacultyDetail, FacultyId, Professor, ProfessorDetail, ProfessorId, Program, ProgramDetail,
    ProgramId, Subject, SubjectDetail, SubjectId, UpdateFacultyDto, UpdateProfessorDto,
    UpdateProgramDto, UpdateSubjectDto,
};
use thiserror::Error;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

pub type RepoFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, RepositoryError>> + Send + 'a>>;

/// Types and labels tied to one entity kind.
pub trait Resource: Send + Sync + 'static {
    type Id: Copy + PartialEq + Send + Sync + std::fmt::Debug + 'static;
    type Detail: Send + 'static;
    type Create: Send + 'static;
    type Update: Send + 'static;

    /// Singular name used in messages, e.g. `Faculty`.
    const NAME: &'static str;
    /// Name of the parent entity referenced by the foreign key, if any.
    const PARENT: Option<&'static str>;
}

impl Resource for Faculty {
    type Id = FacultyId;
    type Detail = FacultyDetail;
    type Create = CreateFacultyDto;
    type Update = UpdateFacultyDto;

    const NAME: &'static str = "Faculty";
    const PARENT: Option<&'static str> = None;
}

impl Resource for Program {
    type Id = ProgramId;
    type Detail = ProgramDetail;
    type Create = CreateProgramDto;
    type Update = UpdateProgramDto;

    const NAME: &'static str = "Program";
    const PARENT: Option<&'static str> = Some("Faculty");
}

impl Resource for Subject {
    type Id = SubjectId;
    type Detail = SubjectDetail;
    type Create = CreateSubjectDto;
    type Update = UpdateSubjectDto;

    const NAME: &'static str = "Subject";
    const PARENT: Option<&'static str> = Some("Program");
}

impl Resource for Professor {
    type Id = ProfessorId;
    type Detail = ProfessorDetail;
    type Create = CreateProfessorDto;
    type Update = UpdateProfessorDto;

    const NAME: &'static str = "Professor";
    const PARENT: Option<&'static str> = Some("Subject");
}

/// One page of rows plus the total row count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// CRUD over one entity kind.
///
/// `offset >= 0` and `limit >= 1` are guaranteed by the caller.
pub trait CrudRepository<E: Resource>: Send + Sync {
    fn list(&self, offset: i64, limit: i64) -> RepoFuture<'_, Page<E::Detail>>;

    fn get(&self, id: E::Id) -> RepoFuture<'_, E::Detail>;

    fn create(&self, dto: E::Create) -> RepoFuture<'_, E>;

    /// Omitted fields of `dto` keep their current value.
    fn update(&self, id: E::Id, dto: E::Update) -> RepoFuture<'_, ()>;

    fn delete(&self, id: E::Id) -> RepoFuture<'_, ()>;
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Unique or foreign-key violation.
    #[error("{0}")]
    ConstraintViolation(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl RepositoryError {
    pub fn not_found<E: Resource>() -> Self {
        Self::NotFound(E::NAME)
    }

    pub fn duplicate_name<E: Resource>() -> Self {
        Self::ConstraintViolation(format!(
            "A {} with this name already exists",
            E::NAME.to_lowercase()
        ))
    }

    pub fn missing_parent<E: Resource>() -> Self {
        Self::ConstraintViolation(format!(
            "Referenced {} does not exist",
            E::PARENT.unwrap_or("record").to_lowercase()
        ))
    }

    /// Classifies a failed INSERT or UPDATE on `E`'s table.
    pub fn from_write<E: Resource>(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return Self::duplicate_name::<E>();
        }
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_foreign_key_violation()
        {
            return Self::missing_parent::<E>();
        }
        Self::from(err)
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(name) => {
                AppError::not_found(anyhow::anyhow!("{} not found", name))
            }
            RepositoryError::ConstraintViolation(message) => {
                AppError::bad_request(anyhow::anyhow!(message))
            }
            RepositoryError::Internal(cause) => {
                tracing::error!(error = ?cause, "Repository operation failed");
                AppError::internal(anyhow::anyhow!("Internal server error"))
            }
        }
    }
}

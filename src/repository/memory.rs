//! In-memory [`CrudRepository`] for tests.
//!
//! Enforces name uniqueness like the database does and counts every call, so
//! tests can assert that a rejected request never reached storage. Relations
//! are not resolved: details come back with empty embeds.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use academia_models::{
    CreateFacultyDto, CreateProfessorDto, CreateProgramDto, CreateSubjectDto, Faculty,
    FacultyDetail, FacultyId, Professor, ProfessorDetail, ProfessorId, Program, ProgramDetail,
    ProgramId, Subject, SubjectDetail, SubjectId, UpdateFacultyDto, UpdateProfessorDto,
    UpdateProgramDto, UpdateSubjectDto,
};
use chrono::{DateTime, Utc};

use super::{CrudRepository, Page, RepoFuture, RepositoryError, Resource};

/// Entity that can live in a [`MemoryRepository`].
pub trait MemoryRecord: Resource + Clone {
    fn id(&self) -> Self::Id;

    /// Name that must be unique across records, if the entity has one.
    fn unique_name(&self) -> Option<&str>;

    fn from_create(dto: Self::Create, now: DateTime<Utc>) -> Self;

    fn apply_update(&mut self, dto: Self::Update, now: DateTime<Utc>);

    fn into_detail(self) -> Self::Detail;
}

/// Number of calls per repository operation.
#[derive(Debug, Default)]
pub struct CallCounts {
    list: AtomicUsize,
    get: AtomicUsize,
    create: AtomicUsize,
    update: AtomicUsize,
    delete: AtomicUsize,
}

impl CallCounts {
    pub fn list(&self) -> usize {
        self.list.load(Ordering::SeqCst)
    }

    pub fn get(&self) -> usize {
        self.get.load(Ordering::SeqCst)
    }

    pub fn create(&self) -> usize {
        self.create.load(Ordering::SeqCst)
    }

    pub fn update(&self) -> usize {
        self.update.load(Ordering::SeqCst)
    }

    pub fn delete(&self) -> usize {
        self.delete.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.list() + self.get() + self.create() + self.update() + self.delete()
    }
}

fn bump(counter: &AtomicUsize) {
    counter.fetch_add(1, Ordering::SeqCst);
}

pub struct MemoryRepository<E: MemoryRecord> {
    records: Mutex<Vec<E>>,
    calls: CallCounts,
}

impl<E: MemoryRecord> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: MemoryRecord> MemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<E>) -> Self {
        Self {
            records: Mutex::new(records),
            calls: CallCounts::default(),
        }
    }

    pub fn calls(&self) -> &CallCounts {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Vec<E>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn name_taken(records: &[E], candidate: &E) -> bool {
        let Some(name) = candidate.unique_name() else {
            return false;
        };
        records
            .iter()
            .any(|r| r.id() != candidate.id() && r.unique_name() == Some(name))
    }
}

impl<E: MemoryRecord> CrudRepository<E> for MemoryRepository<E> {
    fn list(&self, offset: i64, limit: i64) -> RepoFuture<'_, Page<E::Detail>> {
        bump(&self.calls.list);
        let result = {
            let records = self.lock();
            let items = records
                .iter()
                .skip(offset.max(0) as usize)
                .take(limit.max(0) as usize)
                .cloned()
                .map(E::into_detail)
                .collect();
            Ok(Page {
                items,
                total: records.len() as i64,
            })
        };
        Box::pin(async move { result })
    }

    fn get(&self, id: E::Id) -> RepoFuture<'_, E::Detail> {
        bump(&self.calls.get);
        let result = self
            .lock()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .map(E::into_detail)
            .ok_or_else(RepositoryError::not_found::<E>);
        Box::pin(async move { result })
    }

    fn create(&self, dto: E::Create) -> RepoFuture<'_, E> {
        bump(&self.calls.create);
        let result = {
            let mut records = self.lock();
            let record = E::from_create(dto, Utc::now());
            if Self::name_taken(&records, &record) {
                Err(RepositoryError::duplicate_name::<E>())
            } else {
                records.push(record.clone());
                Ok(record)
            }
        };
        Box::pin(async move { result })
    }

    fn update(&self, id: E::Id, dto: E::Update) -> RepoFuture<'_, ()> {
        bump(&self.calls.update);
        let result = {
            let mut records = self.lock();
            match records.iter().position(|r| r.id() == id) {
                None => Err(RepositoryError::not_found::<E>()),
                Some(index) => {
                    let mut updated = records[index].clone();
                    updated.apply_update(dto, Utc::now());
                    if Self::name_taken(&records, &updated) {
                        Err(RepositoryError::duplicate_name::<E>())
                    } else {
                        records[index] = updated;
                        Ok(())
                    }
                }
            }
        };
        Box::pin(async move { result })
    }

    fn delete(&self, id: E::Id) -> RepoFuture<'_, ()> {
        bump(&self.calls.delete);
        let result = {
            let mut records = self.lock();
            match records.iter().position(|r| r.id() == id) {
                Some(index) => {
                    records.remove(index);
                    Ok(())
                }
                None => Err(RepositoryError::not_found::<E>()),
            }
        };
        Box::pin(async move { result })
    }
}

impl MemoryRecord for Faculty {
    fn id(&self) -> FacultyId {
        self.id
    }

    fn unique_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn from_create(dto: CreateFacultyDto, now: DateTime<Utc>) -> Self {
        Self {
            id: FacultyId::new(),
            name: dto.name,
            director: dto.director,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, dto: UpdateFacultyDto, now: DateTime<Utc>) {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if dto.director.is_some() {
            self.director = dto.director;
        }
        self.updated_at = now;
    }

    fn into_detail(self) -> FacultyDetail {
        self.into()
    }
}

impl MemoryRecord for Program {
    fn id(&self) -> ProgramId {
        self.id
    }

    fn unique_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn from_create(dto: CreateProgramDto, now: DateTime<Utc>) -> Self {
        Self {
            id: ProgramId::new(),
            name: dto.name,
            faculty_id: dto.faculty_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, dto: UpdateProgramDto, now: DateTime<Utc>) {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if dto.faculty_id.is_some() {
            self.faculty_id = dto.faculty_id;
        }
        self.updated_at = now;
    }

    fn into_detail(self) -> ProgramDetail {
        self.into()
    }
}

impl MemoryRecord for Subject {
    fn id(&self) -> SubjectId {
        self.id
    }

    fn unique_name(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn from_create(dto: CreateSubjectDto, now: DateTime<Utc>) -> Self {
        Self {
            id: SubjectId::new(),
            name: dto.name,
            program_id: dto.program_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, dto: UpdateSubjectDto, now: DateTime<Utc>) {
        if let Some(name) = dto.name {
            self.name = name;
        }
        if dto.program_id.is_some() {
            self.program_id = dto.program_id;
        }
        self.updated_at = now;
    }

    fn into_detail(self) -> SubjectDetail {
        self.into()
    }
}

impl MemoryRecord for Professor {
    fn id(&self) -> ProfessorId {
        self.id
    }

    fn unique_name(&self) -> Option<&str> {
        None
    }

    fn from_create(dto: CreateProfessorDto, now: DateTime<Utc>) -> Self {
        Self {
            id: ProfessorId::new(),
            first_name: dto.first_name,
            last_name: dto.last_name,
            subject_id: dto.subject_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_update(&mut self, dto: UpdateProfessorDto, now: DateTime<Utc>) {
        if let Some(first_name) = dto.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = dto.last_name {
            self.last_name = last_name;
        }
        if dto.subject_id.is_some() {
            self.subject_id = dto.subject_id;
        }
        self.updated_at = now;
    }

    fn into_detail(self) -> ProfessorDetail {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faculty_dto(name: &str) -> CreateFacultyDto {
        CreateFacultyDto {
            name: name.to_string(),
            director: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_name() {
        let repo = MemoryRepository::<Faculty>::new();
        repo.create(faculty_dto("Ingeniería")).await.unwrap();

        let result = repo.create(faculty_dto("Ingeniería")).await;
        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation(_))
        ));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.calls().create(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_omitted_fields() {
        let repo = MemoryRepository::<Faculty>::new();
        let created = repo
            .create(CreateFacultyDto {
                name: "Ciencias".to_string(),
                director: Some("Gómez".to_string()),
            })
            .await
            .unwrap();

        repo.update(
            created.id,
            UpdateFacultyDto {
                name: Some("Ciencias Exactas".to_string()),
                director: None,
            },
        )
        .await
        .unwrap();

        let detail = repo.get(created.id).await.unwrap();
        assert_eq!(detail.name, "Ciencias Exactas");
        assert_eq!(detail.director.as_deref(), Some("Gómez"));
    }

    #[tokio::test]
    async fn test_update_to_taken_name_fails() {
        let repo = MemoryRepository::<Subject>::new();
        repo.create(CreateSubjectDto {
            name: "Álgebra".to_string(),
            program_id: None,
        })
        .await
        .unwrap();
        let other = repo
            .create(CreateSubjectDto {
                name: "Física".to_string(),
                program_id: None,
            })
            .await
            .unwrap();

        let result = repo
            .update(
                other.id,
                UpdateSubjectDto {
                    name: Some("Álgebra".to_string()),
                    program_id: None,
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(RepositoryError::ConstraintViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_twice_is_not_found() {
        let repo = MemoryRepository::<Faculty>::new();
        let created = repo.create(faculty_dto("Artes")).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert!(matches!(
            repo.delete(created.id).await,
            Err(RepositoryError::NotFound("Faculty"))
        ));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_list_pages_and_counts() {
        let repo = MemoryRepository::<Faculty>::new();
        for i in 0..7 {
            repo.create(faculty_dto(&format!("Facultad {i}"))).await.unwrap();
        }

        let page = repo.list(5, 5).await.unwrap();
        assert_eq!(page.total, 7);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Facultad 5");
        assert_eq!(repo.calls().list(), 1);
    }

    #[tokio::test]
    async fn test_professors_allow_same_name() {
        let repo = MemoryRepository::<Professor>::new();
        for _ in 0..2 {
            repo.create(CreateProfessorDto {
                first_name: "Ana".to_string(),
                last_name: "García".to_string(),
                subject_id: None,
            })
            .await
            .unwrap();
        }
        assert_eq!(repo.len(), 2);
    }
}

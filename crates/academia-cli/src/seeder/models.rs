//! Seed rows and the fan-out configuration used to generate them.

use academia_models::{FacultyId, ProgramId, SubjectId};

/// Seed data for a faculty row.
#[derive(Debug, Clone)]
pub struct FacultySeed {
    pub name: String,
    pub director: Option<String>,
}

/// Seed data for a program row.
#[derive(Debug, Clone)]
pub struct ProgramSeed {
    pub name: String,
    pub faculty_id: FacultyId,
}

/// Seed data for a subject row.
#[derive(Debug, Clone)]
pub struct SubjectSeed {
    pub name: String,
    pub program_id: ProgramId,
}

/// Seed data for a professor row.
#[derive(Debug, Clone)]
pub struct ProfessorSeed {
    pub first_name: String,
    pub last_name: String,
    pub subject_id: SubjectId,
}

/// How many rows to create at each level of the hierarchy.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub faculties: usize,
    pub programs_per_faculty: usize,
    pub subjects_per_program: usize,
    pub professors_per_subject: usize,
}

impl SeedConfig {
    pub fn new(faculties: usize) -> Self {
        Self {
            faculties,
            ..Self::default()
        }
    }

    pub fn with_programs(mut self, per_faculty: usize) -> Self {
        self.programs_per_faculty = per_faculty;
        self
    }

    pub fn with_subjects(mut self, per_program: usize) -> Self {
        self.subjects_per_program = per_program;
        self
    }

    pub fn with_professors(mut self, per_subject: usize) -> Self {
        self.professors_per_subject = per_subject;
        self
    }

    pub fn total_programs(&self) -> usize {
        self.faculties * self.programs_per_faculty
    }

    pub fn total_subjects(&self) -> usize {
        self.total_programs() * self.subjects_per_program
    }

    pub fn total_professors(&self) -> usize {
        self.total_subjects() * self.professors_per_subject
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            faculties: 4,
            programs_per_faculty: 3,
            subjects_per_program: 6,
            professors_per_subject: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_multiply_down_the_hierarchy() {
        let config = SeedConfig::new(2)
            .with_programs(3)
            .with_subjects(4)
            .with_professors(5);

        assert_eq!(config.total_programs(), 6);
        assert_eq!(config.total_subjects(), 24);
        assert_eq!(config.total_professors(), 120);
    }

    #[test]
    fn test_new_keeps_default_fan_out() {
        let config = SeedConfig::new(10);
        assert_eq!(config.faculties, 10);
        assert_eq!(config.programs_per_faculty, 3);
        assert_eq!(config.subjects_per_program, 6);
        assert_eq!(config.professors_per_subject, 2);
    }
}

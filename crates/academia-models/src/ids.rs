//! Strongly-typed ids for the four entities.
//!
//! Each id is a transparent wrapper around a `Uuid`: it serializes as the bare
//! UUID string, binds as a Postgres `uuid`, and cannot be passed where another
//! entity's id is expected.
//!
//! ```ignore
//! fn load_program(id: ProgramId) { /* ... */ }
//!
//! load_program(ProgramId::new());   // OK
//! // load_program(FacultyId::new()); // mismatched types
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema)]
        #[serde(transparent)]
        #[sqlx(transparent)]
        #[schema(value_type = String, format = "uuid")]
        pub struct $name(pub Uuid);

        impl $name {
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Id of a faculty.
    FacultyId
);

define_id!(
    /// Id of a degree program.
    ProgramId
);

define_id!(
    /// Id of a subject.
    SubjectId
);

define_id!(
    /// Id of a professor.
    ProfessorId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_bare_uuid() {
        let uuid = Uuid::from_u128(0x1234);
        let id = FacultyId::from(uuid);
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            format!("\"{}\"", uuid)
        );
    }

    #[test]
    fn test_deserialize_rejects_non_uuid() {
        assert!(serde_json::from_str::<ProgramId>("\"42\"").is_err());
    }

    #[test]
    fn test_from_str_and_display_agree() {
        let id = SubjectId::new();
        let parsed: SubjectId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!(format!("{:?}", id).starts_with("SubjectId("));
    }

    #[test]
    fn test_new_ids_are_distinct() {
        assert_ne!(ProfessorId::new(), ProfessorId::new());
    }
}

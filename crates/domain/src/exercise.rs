use derive_more::{Deref, Display};

use crate::{BodyPart, BodyPartCatalog, BodyPartSelection, ReadError, SearchQuery};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_body_part_catalog(&self) -> Result<BodyPartCatalog, ReadError>;
    async fn get_exercises(&self, selection: &BodyPartSelection)
    -> Result<Vec<Exercise>, ReadError>;
    async fn search_exercises(&self, query: &SearchQuery) -> Result<Vec<Exercise>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_body_parts(&self) -> Result<Vec<BodyPart>, ReadError>;
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercises_by_body_part(
        &self,
        body_part: &BodyPart,
    ) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub target: String,
    pub equipment: String,
    pub body_part: BodyPart,
    pub gif_url: Option<String>,
    pub secondary_muscles: Vec<String>,
    pub instructions: Vec<String>,
}

impl Exercise {
    /// The fields a search query is matched against.
    #[must_use]
    pub fn searchable_fields(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.target.as_str(),
            self.equipment.as_str(),
            self.body_part.as_ref(),
        ]
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_exercise_searchable_fields() {
        assert_eq!(
            Exercise {
                id: "0001".into(),
                name: "Bicep Curl".into(),
                target: "biceps".into(),
                equipment: "dumbbell".into(),
                body_part: BodyPart::from("upper arms"),
                gif_url: None,
                secondary_muscles: vec![],
                instructions: vec![],
            }
            .searchable_fields(),
            ["Bicep Curl", "biceps", "dumbbell", "upper arms"]
        );
    }

    #[test]
    fn test_exercise_id_from() {
        assert_eq!(ExerciseID::from("0001"), ExerciseID::from("0001".to_string()));
        assert_eq!(ExerciseID::from("0001").to_string(), "0001");
        assert_eq!(*ExerciseID::from("0042"), "0042");
    }
}

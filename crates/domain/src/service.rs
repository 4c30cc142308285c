use log::{debug, error};

use crate::{
    BodyPartCatalog, BodyPartSelection, Exercise, ExerciseRepository, ExerciseService, ReadError,
    SearchQuery,
};

#[derive(Clone)]
pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        if let Err(ref err) = result {
            if err.is_no_connection() {
                debug!("failed to {} {}: {err}", $action, $entity);
            } else {
                error!("failed to {} {}: {err}", $action, $entity);
            }
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_body_part_catalog(&self) -> Result<BodyPartCatalog, ReadError> {
        let body_parts = log_on_error!(self.repository.read_body_parts(), "get", "body parts")?;
        Ok(BodyPartCatalog::new(body_parts))
    }

    async fn get_exercises(
        &self,
        selection: &BodyPartSelection,
    ) -> Result<Vec<Exercise>, ReadError> {
        match selection {
            BodyPartSelection::All => {
                log_on_error!(self.repository.read_exercises(), "get", "exercises")
            }
            BodyPartSelection::Only(body_part) => log_on_error!(
                self.repository.read_exercises_by_body_part(body_part),
                "get",
                "exercises by body part"
            ),
        }
    }

    async fn search_exercises(&self, query: &SearchQuery) -> Result<Vec<Exercise>, ReadError> {
        let exercises = log_on_error!(self.repository.read_exercises(), "search", "exercises")?;
        let total = exercises.len();
        let matches = query.filter(exercises);
        debug!(
            "search for \"{}\" matched {} of {total} exercises",
            query.as_str(),
            matches.len()
        );
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{BodyPart, StorageError};

    struct MockRepository {
        body_parts: Result<Vec<BodyPart>, String>,
        exercises: Result<Vec<Exercise>, String>,
        calls: RefCell<Vec<String>>,
    }

    impl MockRepository {
        fn new(
            body_parts: Result<Vec<BodyPart>, String>,
            exercises: Result<Vec<Exercise>, String>,
        ) -> Self {
            Self {
                body_parts,
                exercises,
                calls: RefCell::new(vec![]),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    fn to_read_error(err: &str) -> ReadError {
        if err == "no connection" {
            ReadError::Storage(StorageError::NoConnection)
        } else {
            ReadError::Storage(StorageError::InvalidResponse(err.to_string()))
        }
    }

    impl ExerciseRepository for MockRepository {
        async fn read_body_parts(&self) -> Result<Vec<BodyPart>, ReadError> {
            self.calls.borrow_mut().push("read_body_parts".into());
            self.body_parts.clone().map_err(|err| to_read_error(&err))
        }

        async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
            self.calls.borrow_mut().push("read_exercises".into());
            self.exercises.clone().map_err(|err| to_read_error(&err))
        }

        async fn read_exercises_by_body_part(
            &self,
            body_part: &BodyPart,
        ) -> Result<Vec<Exercise>, ReadError> {
            self.calls
                .borrow_mut()
                .push(format!("read_exercises_by_body_part({body_part})"));
            self.exercises
                .clone()
                .map(|exercises| {
                    exercises
                        .into_iter()
                        .filter(|e| &e.body_part == body_part)
                        .collect()
                })
                .map_err(|err| to_read_error(&err))
        }
    }

    fn exercise(id: &str, name: &str, target: &str, equipment: &str, body_part: &str) -> Exercise {
        Exercise {
            id: id.into(),
            name: name.into(),
            target: target.into(),
            equipment: equipment.into(),
            body_part: body_part.into(),
            gif_url: None,
            secondary_muscles: vec![],
            instructions: vec![],
        }
    }

    fn exercises() -> Vec<Exercise> {
        vec![
            exercise("0001", "Bicep Curl", "biceps", "dumbbell", "upper arms"),
            exercise("0002", "Push Up", "pectorals", "body weight", "chest"),
            exercise("0003", "Barbell Row", "lats", "barbell", "back"),
        ]
    }

    #[test]
    fn test_get_body_part_catalog() {
        let service = Service::new(MockRepository::new(
            Ok(vec![BodyPart::from("back"), BodyPart::from("chest")]),
            Ok(vec![]),
        ));

        assert_eq!(
            block_on(service.get_body_part_catalog()).unwrap().as_slice(),
            &[
                BodyPart::all(),
                BodyPart::from("back"),
                BodyPart::from("chest")
            ]
        );
        assert_eq!(service.repository.calls(), vec!["read_body_parts"]);
    }

    #[test]
    fn test_get_body_part_catalog_invalid_response() {
        let service = Service::new(MockRepository::new(
            Err("expected array".into()),
            Ok(vec![]),
        ));

        assert!(matches!(
            block_on(service.get_body_part_catalog()),
            Err(ReadError::Storage(StorageError::InvalidResponse(_)))
        ));
    }

    #[test]
    fn test_get_exercises() {
        let service = Service::new(MockRepository::new(Ok(vec![]), Ok(exercises())));

        assert_eq!(
            block_on(service.get_exercises(&BodyPartSelection::All)).unwrap(),
            exercises()
        );
        assert_eq!(
            block_on(service.get_exercises(&BodyPartSelection::Only(BodyPart::from("chest"))))
                .unwrap(),
            vec![exercises()[1].clone()]
        );
        assert_eq!(
            service.repository.calls(),
            vec!["read_exercises", "read_exercises_by_body_part(chest)"]
        );
    }

    #[test]
    fn test_search_exercises() {
        let service = Service::new(MockRepository::new(Ok(vec![]), Ok(exercises())));

        assert_eq!(
            block_on(service.search_exercises(&SearchQuery::new("bicep").unwrap())).unwrap(),
            vec![exercises()[0].clone()]
        );
        assert_eq!(
            block_on(service.search_exercises(&SearchQuery::new("chest").unwrap())).unwrap(),
            vec![exercises()[1].clone()]
        );
        assert_eq!(
            block_on(service.search_exercises(&SearchQuery::new("xyz123").unwrap())).unwrap(),
            vec![]
        );
        assert_eq!(
            service.repository.calls(),
            vec!["read_exercises", "read_exercises", "read_exercises"]
        );
    }

    #[test]
    fn test_search_exercises_no_connection() {
        let service = Service::new(MockRepository::new(Ok(vec![]), Err("no connection".into())));

        assert!(matches!(
            block_on(service.search_exercises(&SearchQuery::new("bicep").unwrap())),
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
    }
}

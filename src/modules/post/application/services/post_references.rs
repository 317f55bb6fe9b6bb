use std::sync::Arc;

use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::breed::application::ports::outgoing::BreedQuery;
use crate::circle::application::domain::entities::CircleId;
use crate::circle::application::domain::policies::is_circle_member;
use crate::circle::application::ports::outgoing::CircleQuery;
use crate::post::application::ports::incoming::use_cases::create_post::{
    INVALID_BREED, INVALID_CIRCLE,
};
use crate::shared::permissions::Denial;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceError {
    Invalid(FieldErrors),
    Forbidden(Denial),
    Repository(String),
}

/// Checks the breed and circle a post points at.
#[derive(Clone)]
pub struct PostReferences {
    breeds: Arc<dyn BreedQuery + Send + Sync>,
    circles: Arc<dyn CircleQuery + Send + Sync>,
}

impl PostReferences {
    pub fn new(
        breeds: Arc<dyn BreedQuery + Send + Sync>,
        circles: Arc<dyn CircleQuery + Send + Sync>,
    ) -> Self {
        Self { breeds, circles }
    }

    pub async fn check_breed(&self, breed_id: Uuid) -> Result<(), ReferenceError> {
        match self.breeds.find_by_id(breed_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(ReferenceError::Invalid(FieldErrors::single(
                "breed",
                INVALID_BREED,
            ))),
            Err(e) => Err(ReferenceError::Repository(e.to_string())),
        }
    }

    /// Active circle the requester belongs to.
    pub async fn member_circle(
        &self,
        requester: UserId,
        slug_name: &str,
    ) -> Result<CircleId, ReferenceError> {
        let circle = self
            .circles
            .find_by_slug(slug_name)
            .await
            .map_err(|e| ReferenceError::Repository(e.to_string()))?
            .filter(|c| c.is_active)
            .ok_or_else(|| {
                ReferenceError::Invalid(FieldErrors::single("circle", INVALID_CIRCLE))
            })?;

        let membership = self
            .circles
            .find_subscription(requester, circle.id)
            .await
            .map_err(|e| ReferenceError::Repository(e.to_string()))?;

        is_circle_member(membership.as_ref()).map_err(ReferenceError::Forbidden)?;

        Ok(circle.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::application::domain::policies::test_fixtures::account;
    use crate::breed::application::domain::entities::{test_fixtures::breed, Animal};
    use crate::breed::application::services::mocks::MockBreedQuery;
    use crate::circle::application::domain::policies::test_fixtures::{circle, subscription};
    use crate::circle::application::domain::policies::NOT_CIRCLE_MEMBER;
    use crate::circle::application::services::mocks::MockCircleQuery;

    fn references(breeds: MockBreedQuery, circles: MockCircleQuery) -> PostReferences {
        PostReferences::new(Arc::new(breeds), Arc::new(circles))
    }

    #[tokio::test]
    async fn unknown_breed_is_invalid() {
        let refs = references(
            MockBreedQuery::with(vec![breed(Animal::Dog, "Beagle")]),
            MockCircleQuery::default(),
        );

        let err = refs.check_breed(Uuid::new_v4()).await.unwrap_err();

        assert_eq!(
            err,
            ReferenceError::Invalid(FieldErrors::single("breed", INVALID_BREED))
        );
    }

    #[tokio::test]
    async fn member_gets_circle_id() {
        let ana = account("ana");
        let c = circle("quito");
        let refs = references(
            MockBreedQuery::default(),
            MockCircleQuery::with(vec![c.clone()], vec![subscription(ana.id, &c, false)]),
        );

        assert_eq!(refs.member_circle(ana.id, "quito").await, Ok(c.id));
    }

    #[tokio::test]
    async fn non_member_is_forbidden_and_inactive_is_invalid() {
        let ana = account("ana");
        let open = circle("quito");
        let mut closed = circle("closed");
        closed.is_active = false;
        let refs = references(
            MockBreedQuery::default(),
            MockCircleQuery::with(
                vec![open, closed.clone()],
                vec![subscription(ana.id, &closed, true)],
            ),
        );

        assert_eq!(
            refs.member_circle(ana.id, "quito").await,
            Err(ReferenceError::Forbidden(NOT_CIRCLE_MEMBER))
        );
        assert_eq!(
            refs.member_circle(ana.id, "closed").await,
            Err(ReferenceError::Invalid(FieldErrors::single(
                "circle",
                INVALID_CIRCLE
            )))
        );
    }
}

use async_trait::async_trait;

use crate::account::application::domain::entities::UserId;
use crate::circle::application::ports::outgoing::{CircleChanges, CircleSummary};
use crate::shared::permissions::Denial;
use crate::shared::validation::{optional_text, required_text, FieldErrors};

use super::create_circle::{check_slug, NAME_MAX, PHOTO_MAX, SLUG_MAX};

/// Raw PATCH fields. A blank string clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct UpdateCircleInput {
    pub name: Option<String>,
    pub slug_name: Option<String>,
    pub about: Option<String>,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateCircleCommand {
    requester: UserId,
    slug_name: String,
    changes: CircleChanges,
}

impl UpdateCircleCommand {
    pub fn new(
        requester: UserId,
        slug_name: &str,
        input: UpdateCircleInput,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut changes = CircleChanges::default();

        if let Some(name) = &input.name {
            changes.name = required_text(&mut errors, "name", name, NAME_MAX);
        }

        if let Some(slug) = &input.slug_name {
            changes.slug_name = required_text(&mut errors, "slug_name", slug, SLUG_MAX);
            check_slug(&mut errors, &changes.slug_name);
        }

        if let Some(about) = &input.about {
            changes.about = Some(optional_text(&mut errors, "about", Some(about), None));
        }

        if let Some(photo) = &input.profile_photo {
            changes.profile_photo = Some(optional_text(
                &mut errors,
                "profile_photo",
                Some(photo),
                Some(PHOTO_MAX),
            ));
        }

        if let Some(photo) = &input.cover_photo {
            changes.cover_photo = Some(optional_text(
                &mut errors,
                "cover_photo",
                Some(photo),
                Some(PHOTO_MAX),
            ));
        }

        errors.into_result()?;

        Ok(Self {
            requester,
            slug_name: slug_name.to_string(),
            changes,
        })
    }

    pub fn requester(&self) -> UserId {
        self.requester
    }

    /// Circle being edited, as addressed in the URL.
    pub fn slug_name(&self) -> &str {
        &self.slug_name
    }

    pub fn changes(&self) -> &CircleChanges {
        &self.changes
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateCircleError {
    #[error("Circle not found")]
    CircleNotFound,

    #[error("{0}")]
    Forbidden(Denial),

    #[error("Invalid circle data: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateCircleUseCase: Send + Sync {
    async fn execute(&self, command: UpdateCircleCommand)
        -> Result<CircleSummary, UpdateCircleError>;
}

use async_trait::async_trait;

use crate::account::application::domain::entities::UserId;
use crate::circle::application::ports::outgoing::{CircleSummary, NewCircle};
use crate::shared::validation::{is_valid_slug, optional_text, required_text, FieldErrors};

pub const INVALID_SLUG: &str =
    "Enter a valid \"slug\" consisting of letters, numbers, underscores or hyphens.";
pub const SLUG_TAKEN: &str = "A circle with this slugname already exists.";

pub(crate) const NAME_MAX: usize = 64;
pub(crate) const SLUG_MAX: usize = 32;
pub(crate) const PHOTO_MAX: usize = 255;

#[derive(Debug, Clone, Default)]
pub struct CreateCircleInput {
    pub name: String,
    pub slug_name: String,
    pub about: Option<String>,
    pub profile_photo: Option<String>,
    pub cover_photo: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateCircleCommand {
    requester: UserId,
    data: NewCircle,
}

/// Checks a slug already run through `required_text`.
pub(crate) fn check_slug(errors: &mut FieldErrors, slug: &Option<String>) {
    if let Some(slug) = slug {
        if !is_valid_slug(slug) {
            errors.add("slug_name", INVALID_SLUG);
        }
    }
}

impl CreateCircleCommand {
    pub fn new(requester: UserId, input: CreateCircleInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = required_text(&mut errors, "name", &input.name, NAME_MAX);
        let slug_name = required_text(&mut errors, "slug_name", &input.slug_name, SLUG_MAX);
        check_slug(&mut errors, &slug_name);

        let about = optional_text(&mut errors, "about", input.about.as_deref(), None);
        let profile_photo = optional_text(
            &mut errors,
            "profile_photo",
            input.profile_photo.as_deref(),
            Some(PHOTO_MAX),
        );
        let cover_photo = optional_text(
            &mut errors,
            "cover_photo",
            input.cover_photo.as_deref(),
            Some(PHOTO_MAX),
        );

        errors.into_result()?;

        Ok(Self {
            requester,
            data: NewCircle {
                name: name.unwrap_or_default(),
                slug_name: slug_name.unwrap_or_default(),
                about,
                profile_photo,
                cover_photo,
            },
        })
    }

    pub fn requester(&self) -> UserId {
        self.requester
    }

    pub fn data(&self) -> &NewCircle {
        &self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCircleError {
    #[error("Invalid circle data: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCircleUseCase: Send + Sync {
    async fn execute(&self, command: CreateCircleCommand)
        -> Result<CircleSummary, CreateCircleError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::post::application::domain::entities::PostState;
use crate::post::application::ports::outgoing::{NewPost, PostDetail};
use crate::shared::permissions::Denial;
use crate::shared::validation::{
    check_coordinate, choice, optional_text, required_text, FieldErrors,
};

pub const INVALID_BREED: &str = "Invalid breed.";
pub const INVALID_CIRCLE: &str = "Invalid circle.";

pub(crate) const NAME_MAX: usize = 32;
pub(crate) const PHOTO_MAX: usize = 255;

/// Raw request fields; choices arrive as their wire values.
#[derive(Debug, Clone, Default)]
pub struct CreatePostInput {
    pub breed: String,
    /// Circle slug_name
    pub circle: Option<String>,
    pub name: Option<String>,
    pub information: String,
    pub tag: String,
    pub state: Option<String>,
    pub color_primary: String,
    pub color_secondary: Option<String>,
    pub size: String,
    pub photo_first: String,
    pub photo_second: Option<String>,
    pub photo_third: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Parses the breed reference; the service checks that it exists.
pub(crate) fn parse_breed(errors: &mut FieldErrors, raw: &str) -> Option<Uuid> {
    match Uuid::parse_str(raw.trim()) {
        Ok(id) => Some(id),
        Err(_) => {
            errors.add("breed", INVALID_BREED);
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    data: NewPost,
    circle_slug: Option<String>,
}

impl CreatePostCommand {
    pub fn new(requester: UserId, input: CreatePostInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let breed_id = parse_breed(&mut errors, &input.breed);
        let circle_slug = optional_text(&mut errors, "circle", input.circle.as_deref(), None);

        let name = optional_text(&mut errors, "name", input.name.as_deref(), Some(NAME_MAX));
        let information = required_text(&mut errors, "information", &input.information, usize::MAX);

        let tag = choice(&mut errors, "tag", &input.tag);
        let state = match input.state.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => choice(&mut errors, "state", raw),
            None => Some(PostState::Open),
        };
        let color_primary = choice(&mut errors, "color_primary", &input.color_primary);
        let color_secondary = match input
            .color_secondary
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(raw) => choice(&mut errors, "color_secondary", raw),
            None => None,
        };
        let size = choice(&mut errors, "size", &input.size);

        let photo_first = required_text(&mut errors, "photo_first", &input.photo_first, PHOTO_MAX);
        let photo_second = optional_text(
            &mut errors,
            "photo_second",
            input.photo_second.as_deref(),
            Some(PHOTO_MAX),
        );
        let photo_third = optional_text(
            &mut errors,
            "photo_third",
            input.photo_third.as_deref(),
            Some(PHOTO_MAX),
        );

        let latitude = input.latitude.unwrap_or(0.0);
        let longitude = input.longitude.unwrap_or(0.0);
        check_coordinate(&mut errors, "latitude", latitude, 90.0);
        check_coordinate(&mut errors, "longitude", longitude, 180.0);

        errors.into_result()?;

        match (breed_id, information, tag, state, color_primary, size, photo_first) {
            (
                Some(breed_id),
                Some(information),
                Some(tag),
                Some(state),
                Some(color_primary),
                Some(size),
                Some(photo_first),
            ) => Ok(Self {
                data: NewPost {
                    user_id: requester,
                    breed_id,
                    circle_id: None,
                    name,
                    information,
                    tag,
                    state,
                    color_primary,
                    color_secondary,
                    size,
                    photo_first,
                    photo_second,
                    photo_third,
                    latitude,
                    longitude,
                },
                circle_slug,
            }),
            _ => Err(FieldErrors::non_field("Invalid post data.")),
        }
    }

    pub fn requester(&self) -> UserId {
        self.data.user_id
    }

    /// Post fields with `circle_id` still unresolved.
    pub fn data(&self) -> &NewPost {
        &self.data
    }

    pub fn circle_slug(&self) -> Option<&str> {
        self.circle_slug.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreatePostError {
    #[error("Invalid post data: {0}")]
    Validation(FieldErrors),

    #[error("{0}")]
    Forbidden(Denial),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, command: CreatePostCommand) -> Result<PostDetail, CreatePostError>;
}

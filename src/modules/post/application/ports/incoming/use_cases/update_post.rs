use async_trait::async_trait;
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::post::application::ports::outgoing::{PostChanges, PostDetail};
use crate::shared::permissions::Denial;
use crate::shared::validation::{
    check_coordinate, choice, optional_text, required_text, FieldErrors,
};

use super::create_post::{parse_breed, NAME_MAX, PHOTO_MAX};

/// Raw PATCH fields. A blank string clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostInput {
    pub breed: Option<String>,
    pub circle: Option<String>,
    pub name: Option<String>,
    pub information: Option<String>,
    pub tag: Option<String>,
    pub state: Option<String>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    pub size: Option<String>,
    pub photo_first: Option<String>,
    pub photo_second: Option<String>,
    pub photo_third: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    requester: UserId,
    post_id: Uuid,
    changes: PostChanges,
    circle_slug: Option<Option<String>>,
}

impl UpdatePostCommand {
    pub fn new(requester: UserId, post_id: Uuid, input: UpdatePostInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut changes = PostChanges::default();

        if let Some(raw) = &input.breed {
            changes.breed_id = parse_breed(&mut errors, raw);
        }

        let circle_slug = input
            .circle
            .as_deref()
            .map(|raw| optional_text(&mut errors, "circle", Some(raw), None));

        if let Some(name) = &input.name {
            changes.name = Some(optional_text(&mut errors, "name", Some(name), Some(NAME_MAX)));
        }

        if let Some(information) = &input.information {
            changes.information =
                required_text(&mut errors, "information", information, usize::MAX);
        }

        if let Some(raw) = &input.tag {
            changes.tag = choice(&mut errors, "tag", raw);
        }

        if let Some(raw) = &input.state {
            changes.state = choice(&mut errors, "state", raw);
        }

        if let Some(raw) = &input.color_primary {
            changes.color_primary = choice(&mut errors, "color_primary", raw);
        }

        if let Some(raw) = &input.color_secondary {
            changes.color_secondary = if raw.trim().is_empty() {
                Some(None)
            } else {
                choice(&mut errors, "color_secondary", raw).map(Some)
            };
        }

        if let Some(raw) = &input.size {
            changes.size = choice(&mut errors, "size", raw);
        }

        if let Some(photo) = &input.photo_first {
            changes.photo_first = required_text(&mut errors, "photo_first", photo, PHOTO_MAX);
        }

        if let Some(photo) = &input.photo_second {
            changes.photo_second = Some(optional_text(
                &mut errors,
                "photo_second",
                Some(photo),
                Some(PHOTO_MAX),
            ));
        }

        if let Some(photo) = &input.photo_third {
            changes.photo_third = Some(optional_text(
                &mut errors,
                "photo_third",
                Some(photo),
                Some(PHOTO_MAX),
            ));
        }

        if let Some(latitude) = input.latitude {
            check_coordinate(&mut errors, "latitude", latitude, 90.0);
            changes.latitude = Some(latitude);
        }

        if let Some(longitude) = input.longitude {
            check_coordinate(&mut errors, "longitude", longitude, 180.0);
            changes.longitude = Some(longitude);
        }

        errors.into_result()?;

        Ok(Self {
            requester,
            post_id,
            changes,
            circle_slug,
        })
    }

    pub fn requester(&self) -> UserId {
        self.requester
    }

    pub fn post_id(&self) -> Uuid {
        self.post_id
    }

    /// Column changes; `circle_id` is filled in by the service.
    pub fn changes(&self) -> &PostChanges {
        &self.changes
    }

    /// `Some(None)` moves the post out of its circle.
    pub fn circle_slug(&self) -> Option<Option<&str>> {
        self.circle_slug.as_ref().map(|slug| slug.as_deref())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdatePostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("{0}")]
    Forbidden(Denial),

    #[error("Invalid post data: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(&self, command: UpdatePostCommand) -> Result<PostDetail, UpdatePostError>;
}

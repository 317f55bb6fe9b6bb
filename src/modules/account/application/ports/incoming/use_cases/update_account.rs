use async_trait::async_trait;

use crate::account::application::domain::entities::UserId;
use crate::account::application::ports::outgoing::{AccountChanges, AccountSummary};
use crate::shared::permissions::Denial;
use crate::shared::validation::{
    check_coordinate, is_valid_phone, is_valid_username, optional_text, required_text,
    FieldErrors,
};

use super::sign_up::{INVALID_PHONE, INVALID_USERNAME};

//
// ──────────────────────────────────────────────────────────
// Update Account Command
// ──────────────────────────────────────────────────────────
//

/// Raw PATCH fields. A blank string clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct UpdateAccountInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub phone: Option<String>,
    pub biography: Option<String>,
    pub profile_photo: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct UpdateAccountCommand {
    requester: UserId,
    username: String,
    changes: AccountChanges,
}

impl UpdateAccountCommand {
    pub fn new(
        requester: UserId,
        username: &str,
        input: UpdateAccountInput,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let mut changes = AccountChanges::default();

        if let Some(first_name) = &input.first_name {
            changes.first_name = required_text(&mut errors, "first_name", first_name, 30);
        }

        if let Some(last_name) = &input.last_name {
            changes.last_name = required_text(&mut errors, "last_name", last_name, 150);
        }

        if let Some(new_username) = &input.username {
            changes.username = required_text(&mut errors, "username", new_username, 150);
            if let Some(name) = &changes.username {
                if !is_valid_username(name) {
                    errors.add("username", INVALID_USERNAME);
                }
            }
        }

        if let Some(phone) = &input.phone {
            let phone = optional_text(&mut errors, "phone", Some(phone), Some(16));
            if let Some(p) = &phone {
                if !is_valid_phone(p) {
                    errors.add("phone", INVALID_PHONE);
                }
            }
            changes.phone = Some(phone);
        }

        if let Some(biography) = &input.biography {
            changes.biography = Some(optional_text(&mut errors, "biography", Some(biography), None));
        }

        if let Some(photo) = &input.profile_photo {
            changes.profile_photo = Some(optional_text(
                &mut errors,
                "profile_photo",
                Some(photo),
                Some(255),
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
            username: username.to_string(),
            changes,
        })
    }

    pub fn requester(&self) -> UserId {
        self.requester
    }

    /// Account being edited, as addressed in the URL.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn changes(&self) -> &AccountChanges {
        &self.changes
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateAccountError {
    #[error("Account not found")]
    AccountNotFound,

    #[error("{0}")]
    Forbidden(Denial),

    #[error("Invalid account data: {0}")]
    Validation(FieldErrors),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        command: UpdateAccountCommand,
    ) -> Result<AccountSummary, UpdateAccountError>;
}

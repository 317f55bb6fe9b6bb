use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::account::application::domain::entities::UserId;
use crate::circle::application::domain::entities::CircleId;

/// Declares a lowercase string enum with `as_str` and `FromStr`.
macro_rules! choice_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }
    };
}

choice_enum!(
    /// Kind of classified ad.
    PostTag {
        Lost => "lost",
        Found => "found",
        Adoption => "adoption",
    }
);

choice_enum!(
    /// Whether the ad is still open.
    PostState {
        Open => "open",
        Finished => "finished",
        Cancelled => "cancelled",
    }
);

choice_enum!(
    Color {
        Black => "black",
        White => "white",
        Gray => "gray",
        Brown => "brown",
        Other => "other",
    }
);

choice_enum!(
    /// Small, medium or big.
    PetSize {
        Small => "s",
        Medium => "m",
        Big => "b",
    }
);

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub breed_id: Uuid,
    pub user_id: UserId,
    pub circle_id: Option<CircleId>,
    pub name: Option<String>,
    pub information: String,
    pub tag: PostTag,
    pub state: PostState,
    pub color_primary: Color,
    pub color_secondary: Option<Color>,
    pub size: PetSize,
    pub photo_first: String,
    pub photo_second: Option<String>,
    pub photo_third: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

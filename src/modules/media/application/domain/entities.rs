use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// What an uploaded image is for; decides where it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ImageKind {
    AccountProfile,
    CircleProfile,
    CircleCover,
    PostPhoto,
    BreedPhoto,
}

impl ImageKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ImageKind::AccountProfile => "accounts/profile_pictures/",
            ImageKind::CircleProfile => "circles/profile_pictures/",
            ImageKind::CircleCover => "circles/cover_pictures/",
            ImageKind::PostPhoto => "posts/pets/photos/",
            ImageKind::BreedPhoto => "posts/breeds/photos/",
        }
    }
}

impl FromStr for ImageKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account-profile" => Ok(ImageKind::AccountProfile),
            "circle-profile" => Ok(ImageKind::CircleProfile),
            "circle-cover" => Ok(ImageKind::CircleCover),
            "post-photo" => Ok(ImageKind::PostPhoto),
            "breed-photo" => Ok(ImageKind::BreedPhoto),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    /// Detects the format from the file signature.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(ImageFormat::Jpeg)
        } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(ImageFormat::Webp)
        } else {
            None
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }
}

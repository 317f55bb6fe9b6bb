use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Animal {
    Dog,
    Cat,
    Other,
}

impl Animal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Animal::Dog => "dog",
            Animal::Cat => "cat",
            Animal::Other => "other",
        }
    }

    /// Human readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Animal::Dog => "Dog",
            Animal::Cat => "Cat",
            Animal::Other => "Other",
        }
    }
}

impl FromStr for Animal {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(Animal::Dog),
            "cat" => Ok(Animal::Cat),
            "other" => Ok(Animal::Other),
            _ => Err(()),
        }
    }
}

/// Reference data; unique per `(animal, name)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Breed {
    pub id: Uuid,
    pub animal: Animal,
    pub name: Option<String>,
    pub description: Option<String>,
    pub photo: Option<String>,
}

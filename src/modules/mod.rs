pub mod account;
pub mod breed;
pub mod circle;
pub mod email;
pub mod following;
pub mod media;
pub mod post;

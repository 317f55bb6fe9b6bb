pub mod api;
pub mod db;
pub mod pagination;
pub mod permissions;
pub mod validation;

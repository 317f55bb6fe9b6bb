pub mod account_resolver;

pub use account_resolver::{AccountResolver, ResolveAccountError};

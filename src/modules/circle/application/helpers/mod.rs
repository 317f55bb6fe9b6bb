pub mod circle_resolver;

pub use circle_resolver::{CircleResolver, ResolveCircleError};

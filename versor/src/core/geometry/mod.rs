pub mod euclidean;
pub mod manifold;
pub mod so3;
pub mod validate;

pub use euclidean::Euclidean3;
pub use manifold::Manifold;
pub use so3::SO3;
pub use validate::{check_range, check_rotation, check_unit, is_rotation};

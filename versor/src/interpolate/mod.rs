pub mod pose;
pub mod slerp;

pub use pose::{EulerAngles, Pose, interpolate_pose};
pub use slerp::slerp;

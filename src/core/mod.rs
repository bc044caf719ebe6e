pub mod constants;
pub mod geometry;
pub mod kinematics;
pub mod mapper;
pub mod retry;
pub mod scale;
pub mod synth;
pub mod toy;

pub use geometry::*;
pub use kinematics::*;
pub use mapper::*;
pub use retry::*;
pub use scale::Scale;
pub use synth::*;
pub use toy::*;

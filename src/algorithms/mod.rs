pub mod traits;
pub mod exact;

pub use traits::TriangleCounter;
pub use exact::ExactTriangleCount;

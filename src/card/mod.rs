pub mod face;
pub mod layout;
pub mod sampler;

pub use face::{Face, FaceId, IdGenerator};
pub use layout::{ConfigError, FaceLayout, RowRange};
pub use sampler::sample_row;

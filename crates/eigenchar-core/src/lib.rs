pub mod error;
pub mod model;
pub mod types;

pub use error::{ClassifyError, Result, VectorSet};
pub use model::TrainedModel;
pub use types::*;

pub mod correct;
pub mod nearest;
pub mod pca;

pub use correct::correct_labels;
pub use nearest::{classify, cosine_similarities};
pub use pca::PcaReducer;

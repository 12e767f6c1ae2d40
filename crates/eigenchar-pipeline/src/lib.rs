//! Orchestration of the eigenchar classifier.
//!
//! Training: bounding box → feature vectors → two-pass PCA fit → frozen
//! model. Inference: feature vectors against the stored box → two-pass
//! reduction through the frozen basis → nearest-neighbour labels.

pub mod config;
pub mod infer;
pub mod store;
pub mod train;

pub use config::TrainConfig;
pub use infer::{classify_page, classify_page_files, reduce_page};
pub use store::{JsonModelStore, ModelStore};
pub use train::{train, train_pages};

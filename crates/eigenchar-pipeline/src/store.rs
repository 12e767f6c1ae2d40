//! Model persistence.

use std::path::Path;

use eigenchar_core::{ClassifyError, Result, TrainedModel};

/// Durable storage for trained models. The pipeline only requires that
/// every field round-trips exactly.
pub trait ModelStore {
    fn save(&self, model: &TrainedModel, path: &Path) -> Result<()>;
    fn load(&self, path: &Path) -> Result<TrainedModel>;
}

/// JSON-on-disk model store. serde_json emits the shortest decimal form
/// that parses back to the same f64, so the basis and training vectors
/// survive a save/load cycle bit-for-bit.
#[derive(Debug, Default)]
pub struct JsonModelStore;

impl ModelStore for JsonModelStore {
    fn save(&self, model: &TrainedModel, path: &Path) -> Result<()> {
        let data =
            serde_json::to_vec(model).map_err(|e| ClassifyError::ModelPersist(e.to_string()))?;
        std::fs::write(path, data)?;

        tracing::info!(
            path = %path.display(),
            train_vectors = model.train_count(),
            final_dim = model.final_dim,
            "saved model"
        );

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<TrainedModel> {
        let data = std::fs::read(path)?;
        let model: TrainedModel = serde_json::from_slice(&data).map_err(|e| {
            ClassifyError::ModelPersist(format!("{}: {e}", path.display()))
        })?;

        tracing::info!(
            path = %path.display(),
            train_vectors = model.train_count(),
            "loaded model"
        );

        Ok(model)
    }
}

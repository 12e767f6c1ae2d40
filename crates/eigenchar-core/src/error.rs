use thiserror::Error;

/// Top-level error type for the eigenchar pipeline.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("empty corpus: at least one character image is required")]
    EmptyCorpus,

    #[error("label mismatch: {images} images but {labels} labels")]
    LabelMismatch { images: usize, labels: usize },

    #[error("zero-norm feature vector at row {index} of the {set} set")]
    DegenerateVector { set: VectorSet, index: usize },

    #[error("image decode error: {0}")]
    ImageDecode(String),

    #[error("character box parse error: {0}")]
    BoxesParse(String),

    #[error("model persistence error: {0}")]
    ModelPersist(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Which side of a classification a degenerate vector came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorSet {
    Train,
    Test,
}

impl std::fmt::Display for VectorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VectorSet::Train => write!(f, "training"),
            VectorSet::Test => write!(f, "test"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifyError>;

use std::path::PathBuf;

/// All errors that can occur while loading, splitting or batching data.
///
/// Loading is all-or-nothing: the first failing file aborts the whole load
/// and no partial arrays are returned.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A directory or file could not be read.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image codec rejected the file.
    #[error("failed to decode {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An image does not share the (height, width) of the first image loaded.
    #[error("image {} is {got:?} (h, w) but the dataset expects {expected:?}", .path.display())]
    ShapeMismatch {
        path: PathBuf,
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// A batch was requested that is larger than the whole dataset.
    #[error("number of examples ({num_examples}) is less than batch size ({batch_size})")]
    BatchTooLarge {
        batch_size: usize,
        num_examples: usize,
    },

    /// A validation fraction outside `[0, 1)`.
    #[error("validation fraction must be in [0, 1), got {0}")]
    InvalidValidationSize(f64),

    /// The same class name was listed twice.
    #[error("class {0:?} appears more than once in the class list")]
    DuplicateClass(String),

    /// The parallel sequences handed to a dataset disagree in length.
    #[error("misaligned dataset: {images} images, {labels} labels, {ids} ids, {cls} class names")]
    Misaligned {
        images: usize,
        labels: usize,
        ids: usize,
        cls: usize,
    },

    /// Building an array from collected pixels or labels failed.
    #[error("shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

impl DataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DataError>;

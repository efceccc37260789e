// Dataset assembler — turn scanned files into aligned arrays
//
// Training output (N samples, C classes, H×W images):
//   images: [N, H, W] bool
//   labels: [N, C]    f64, one-hot
//   ids:    N base filenames
//   cls:    N class names
//
// Test output keeps images as u8 (values 0/1) and has no labels.

use std::path::{Path, PathBuf};

use log::{debug, info};
use ndarray::{Array2, Array3};

use crate::class_registry::ClassRegistry;
use crate::config::LoaderConfig;
use crate::error::{DataError, Result};
use crate::image_loader::load_binary_image;
use crate::scanner::{scan_class_dir, scan_flat_dir};

/// Four aligned arrays describing a labeled image collection.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArrays {
    pub images: Array3<bool>,
    pub labels: Array2<f64>,
    pub ids: Vec<String>,
    pub cls: Vec<String>,
}

impl LabeledArrays {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Unlabeled test images and their filenames.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSet {
    pub images: Array3<u8>,
    pub ids: Vec<String>,
}

/// Accumulates binarized images into one flat buffer, checking that every
/// image has the same (height, width).
struct ImageStack {
    dims: Option<(usize, usize)>,
    data: Vec<u8>,
    count: usize,
}

impl ImageStack {
    fn new(config: &LoaderConfig) -> Self {
        Self {
            dims: config.resize.map(|(w, h)| (h as usize, w as usize)),
            data: Vec::new(),
            count: 0,
        }
    }

    fn push(&mut self, path: &Path, img: Array2<u8>) -> Result<()> {
        let got = img.dim();
        match self.dims {
            Some(expected) if expected != got => {
                return Err(DataError::ShapeMismatch {
                    path: path.to_path_buf(),
                    expected,
                    got,
                });
            }
            Some(_) => {}
            None => self.dims = Some(got),
        }
        self.data.extend(img.iter());
        self.count += 1;
        Ok(())
    }

    fn finish(self) -> Result<Array3<u8>> {
        let (h, w) = self.dims.unwrap_or((0, 0));
        Ok(Array3::from_shape_vec((self.count, h, w), self.data)?)
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Read every image under `root/<class>/` for each class in `classes`.
///
/// Classes are visited in registry order; files within a class keep the
/// directory's enumeration order.
pub fn load_train<P: AsRef<Path>>(
    root: P,
    classes: &ClassRegistry,
    config: &LoaderConfig,
) -> Result<LabeledArrays> {
    let root = root.as_ref();
    info!("reading training images from {}", root.display());

    let mut stack = ImageStack::new(config);
    let mut labels: Vec<f64> = Vec::new();
    let mut ids = Vec::new();
    let mut cls = Vec::new();

    for name in classes.names() {
        // Registry names always resolve.
        let (Some(index), Some(one_hot)) = (classes.index_of(name), classes.one_hot(name)) else {
            continue;
        };
        let files = scan_class_dir(root, name, &config.extensions)?;
        info!("loading {} files of class {name} (index: {index})", files.len());

        for file in files {
            debug!("decoding {}", file.display());
            let img = load_binary_image(&file, config)?;
            stack.push(&file, img)?;

            labels.extend_from_slice(&one_hot);
            ids.push(base_name(&file));
            cls.push(name.clone());
        }
    }

    let n = ids.len();
    let images = stack.finish()?.mapv(|v| v != 0);
    let labels = Array2::from_shape_vec((n, classes.len()), labels)?;

    Ok(LabeledArrays {
        images,
        labels,
        ids,
        cls,
    })
}

/// Read every image directly under `root`, sorted by path.
pub fn load_test<P: AsRef<Path>>(root: P, config: &LoaderConfig) -> Result<TestSet> {
    let root = root.as_ref();
    info!("reading test images from {}", root.display());

    let files: Vec<PathBuf> = scan_flat_dir(root, &config.extensions)?;
    let mut stack = ImageStack::new(config);
    let mut ids = Vec::with_capacity(files.len());

    for file in files {
        debug!("decoding {}", file.display());
        let img = load_binary_image(&file, config)?;
        stack.push(&file, img)?;
        ids.push(base_name(&file));
    }

    Ok(TestSet {
        images: stack.finish()?,
        ids,
    })
}

//! # bitfold-data
//!
//! Thresholded image-folder datasets for training loops.
//!
//! This crate provides:
//! - [`load_binary_image`] — decode an image, keep one channel, binarize at 127
//! - [`scanner`] — find images under `root/<class>/` or a flat test directory
//! - [`load_train`] / [`load_test`] — assemble aligned image/label/id/class arrays
//! - [`split()`] — joint shuffle and train/validation partition
//! - [`DataSet`] — sequential mini-batch cursor with epoch tracking
//! - [`read_train_sets`], [`read_train_validation_sets`], [`read_test_set`] —
//!   one-call entry points
//
//   Layout expected on disk:
//
//     train_root/<class_name>/*.png     (one subdirectory per class)
//     test_root/*.png                   (flat)

pub mod assembler;
pub mod class_registry;
pub mod config;
pub mod dataset;
pub mod error;
pub mod image_loader;
pub mod reader;
pub mod scanner;
pub mod split;

pub use assembler::{load_test, load_train, LabeledArrays, TestSet};
pub use class_registry::ClassRegistry;
pub use config::{ColorChannel, LoaderConfig, ValidationSize};
pub use dataset::{Batch, DataSet, Sample};
pub use error::{DataError, Result};
pub use image_loader::{binarize, load_binary_image};
pub use reader::{read_test_set, read_train_sets, read_train_validation_sets, TrainSets};
pub use split::{partition, shuffle_jointly, split, DataSets};

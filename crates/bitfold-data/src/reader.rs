// Read entry points — load, shuffle and wrap image folders in one call

use std::path::Path;

use crate::assembler::{load_test, load_train, TestSet};
use crate::class_registry::ClassRegistry;
use crate::config::{LoaderConfig, ValidationSize};
use crate::dataset::DataSet;
use crate::error::Result;
use crate::split::{shuffle_seeded, split, DataSets};

/// A training set with no validation counterpart.
#[derive(Debug, Clone)]
pub struct TrainSets {
    pub train: DataSet,
}

/// Load `train_path`, shuffle, and split off `validation_size` samples.
///
/// ```no_run
/// use bitfold_data::{read_train_sets, ClassRegistry, LoaderConfig};
///
/// let classes = ClassRegistry::new(["cat", "dog"])?;
/// let mut sets = read_train_sets("data/train", &classes, 0.2, &LoaderConfig::default())?;
/// let batch = sets.train.next_batch(32)?;
/// println!("{} images in the first batch", batch.len());
/// # Ok::<(), bitfold_data::DataError>(())
/// ```
pub fn read_train_sets<P, V>(
    train_path: P,
    classes: &ClassRegistry,
    validation_size: V,
    config: &LoaderConfig,
) -> Result<DataSets>
where
    P: AsRef<Path>,
    V: Into<ValidationSize>,
{
    let arrays = load_train(train_path, classes, config)?;
    split(arrays, validation_size.into(), config.seed)
}

/// Load `path` and shuffle it into a single training set, with no split.
pub fn read_train_validation_sets<P: AsRef<Path>>(
    path: P,
    classes: &ClassRegistry,
    config: &LoaderConfig,
) -> Result<TrainSets> {
    let arrays = shuffle_seeded(load_train(path, classes, config)?, config.seed);
    Ok(TrainSets {
        train: DataSet::from_arrays(arrays)?,
    })
}

/// Load the flat test directory at `test_path`.
pub fn read_test_set<P: AsRef<Path>>(test_path: P, config: &LoaderConfig) -> Result<TestSet> {
    load_test(test_path, config)
}

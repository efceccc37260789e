// Train / validation split

use log::info;
use ndarray::{s, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::assembler::LabeledArrays;
use crate::config::ValidationSize;
use crate::dataset::DataSet;
use crate::error::Result;

/// The two subsets produced by [`split`].
#[derive(Debug, Clone)]
pub struct DataSets {
    pub train: DataSet,
    pub validation: DataSet,
}

/// Apply one random permutation to all four arrays.
pub fn shuffle_jointly<R: Rng + ?Sized>(arrays: LabeledArrays, rng: &mut R) -> LabeledArrays {
    let mut perm: Vec<usize> = (0..arrays.len()).collect();
    perm.shuffle(rng);
    permute(arrays, &perm)
}

/// Shuffle with `seed`, or with the thread RNG when `None`.
pub fn shuffle_seeded(arrays: LabeledArrays, seed: Option<u64>) -> LabeledArrays {
    match seed {
        Some(seed) => shuffle_jointly(arrays, &mut StdRng::seed_from_u64(seed)),
        None => shuffle_jointly(arrays, &mut thread_rng()),
    }
}

fn permute(arrays: LabeledArrays, perm: &[usize]) -> LabeledArrays {
    LabeledArrays {
        images: arrays.images.select(Axis(0), perm),
        labels: arrays.labels.select(Axis(0), perm),
        ids: perm.iter().map(|&i| arrays.ids[i].clone()).collect(),
        cls: perm.iter().map(|&i| arrays.cls[i].clone()).collect(),
    }
}

/// Cut already-shuffled arrays: the first `validation_size` samples become
/// the validation set, the rest the training set.
pub fn partition(arrays: LabeledArrays, validation_size: ValidationSize) -> Result<DataSets> {
    let n_val = validation_size.resolve(arrays.len())?;
    info!(
        "splitting {} samples: {} train, {} validation",
        arrays.len(),
        arrays.len() - n_val,
        n_val
    );

    let LabeledArrays {
        images,
        labels,
        mut ids,
        mut cls,
    } = arrays;

    let train_ids = ids.split_off(n_val);
    let train_cls = cls.split_off(n_val);

    let validation = DataSet::new(
        images.slice(s![..n_val, .., ..]).to_owned(),
        labels.slice(s![..n_val, ..]).to_owned(),
        ids,
        cls,
    )?;
    let train = DataSet::new(
        images.slice(s![n_val.., .., ..]).to_owned(),
        labels.slice(s![n_val.., ..]).to_owned(),
        train_ids,
        train_cls,
    )?;

    Ok(DataSets { train, validation })
}

/// Shuffle jointly, then partition.
pub fn split(
    arrays: LabeledArrays,
    validation_size: ValidationSize,
    seed: Option<u64>,
) -> Result<DataSets> {
    partition(shuffle_seeded(arrays, seed), validation_size)
}

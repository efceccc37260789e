// DataSet — aligned sample arrays plus a sequential batch cursor

use log::debug;
use ndarray::{s, Array2, Array3, ArrayView1, ArrayView2, ArrayView3, Axis};

use crate::assembler::LabeledArrays;
use crate::error::{DataError, Result};

/// One sample, borrowed from a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<'a> {
    /// Binary image, `[H, W]`.
    pub image: ArrayView2<'a, bool>,
    /// One-hot label, `[C]`.
    pub label: ArrayView1<'a, f64>,
    /// Base filename.
    pub id: &'a str,
    /// Class name.
    pub class: &'a str,
}

/// A contiguous run of samples returned by [`DataSet::next_batch`].
///
/// Row `i` of every field refers to the same sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<'a> {
    /// `[batch, H, W]`
    pub images: ArrayView3<'a, bool>,
    /// `[batch, C]`
    pub labels: ArrayView2<'a, f64>,
    pub ids: &'a [String],
    pub cls: &'a [String],
}

impl Batch<'_> {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// A fixed collection of samples with a cursor for mini-batch iteration.
///
/// The cursor never reshuffles. When a request would run past the end, the
/// whole batch restarts at index 0 and `epochs_completed` goes up by one, so
/// up to `batch_size - 1` trailing samples are skipped each epoch.
#[derive(Debug, Clone)]
pub struct DataSet {
    images: Array3<bool>,
    labels: Array2<f64>,
    ids: Vec<String>,
    cls: Vec<String>,
    num_examples: usize,
    position: usize,
    epochs_completed: usize,
}

impl DataSet {
    /// Wrap four aligned sequences. Fails if their lengths differ.
    pub fn new(
        images: Array3<bool>,
        labels: Array2<f64>,
        ids: Vec<String>,
        cls: Vec<String>,
    ) -> Result<Self> {
        let num_examples = images.len_of(Axis(0));
        if labels.nrows() != num_examples || ids.len() != num_examples || cls.len() != num_examples
        {
            return Err(DataError::Misaligned {
                images: num_examples,
                labels: labels.nrows(),
                ids: ids.len(),
                cls: cls.len(),
            });
        }
        Ok(Self {
            images,
            labels,
            ids,
            cls,
            num_examples,
            position: 0,
            epochs_completed: 0,
        })
    }

    pub fn from_arrays(arrays: LabeledArrays) -> Result<Self> {
        Self::new(arrays.images, arrays.labels, arrays.ids, arrays.cls)
    }

    pub fn images(&self) -> &Array3<bool> {
        &self.images
    }

    pub fn labels(&self) -> &Array2<f64> {
        &self.labels
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn cls(&self) -> &[String] {
        &self.cls
    }

    pub fn num_examples(&self) -> usize {
        self.num_examples
    }

    pub fn is_empty(&self) -> bool {
        self.num_examples == 0
    }

    pub fn epochs_completed(&self) -> usize {
        self.epochs_completed
    }

    /// Index of the next unread sample.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The sample at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<Sample<'_>> {
        if index >= self.num_examples {
            return None;
        }
        Some(Sample {
            image: self.images.index_axis(Axis(0), index),
            label: self.labels.row(index),
            id: &self.ids[index],
            class: &self.cls[index],
        })
    }

    /// Return the next `batch_size` samples.
    ///
    /// # Errors
    /// [`DataError::BatchTooLarge`] if `batch_size` exceeds the number of
    /// examples. The cursor is left untouched in that case.
    pub fn next_batch(&mut self, batch_size: usize) -> Result<Batch<'_>> {
        if batch_size > self.num_examples {
            return Err(DataError::BatchTooLarge {
                batch_size,
                num_examples: self.num_examples,
            });
        }

        let mut start = self.position;
        self.position += batch_size;

        if self.position > self.num_examples {
            self.epochs_completed += 1;
            debug!(
                "epoch {} finished, skipped {} trailing samples",
                self.epochs_completed,
                self.num_examples - start
            );
            start = 0;
            self.position = batch_size;
        }
        let end = self.position;

        Ok(Batch {
            images: self.images.slice(s![start..end, .., ..]),
            labels: self.labels.slice(s![start..end, ..]),
            ids: &self.ids[start..end],
            cls: &self.cls[start..end],
        })
    }
}

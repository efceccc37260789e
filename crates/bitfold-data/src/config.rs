// LoaderConfig — knobs shared by the training and test loaders

use crate::error::{DataError, Result};

/// Image extensions picked up by the directory scanner (case-insensitive).
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp"];

/// Pixels strictly above this value become 1, everything else 0.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Which color channel survives the reduction to a single channel.
///
/// Channels are numbered in BGR order, so channel 0 is [`ColorChannel::Blue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChannel {
    #[default]
    Blue,
    Green,
    Red,
}

impl ColorChannel {
    /// Offset of this channel inside an interleaved RGB pixel.
    pub fn rgb_offset(self) -> usize {
        match self {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2,
        }
    }
}

/// Configuration for reading image folders.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Global binarization cutoff.
    pub threshold: u8,
    /// Channel kept after decoding in color mode.
    pub channel: ColorChannel,
    /// Accepted file extensions, lowercase, without the dot.
    pub extensions: Vec<String>,
    /// Optional (width, height) every image is resized to before thresholding.
    pub resize: Option<(u32, u32)>,
    /// Optional random seed for reproducible shuffling.
    pub seed: Option<u64>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            channel: ColorChannel::default(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            resize: None,
            seed: None,
        }
    }
}

impl LoaderConfig {
    pub fn threshold(mut self, t: u8) -> Self {
        self.threshold = t;
        self
    }

    pub fn channel(mut self, c: ColorChannel) -> Self {
        self.channel = c;
        self
    }

    pub fn extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = exts
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.resize = Some((width, height));
        self
    }

    pub fn seed(mut self, s: u64) -> Self {
        self.seed = Some(s);
        self
    }
}

/// How many samples go to the validation subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidationSize {
    /// Fraction of the total in `[0, 1)`, truncated to a whole count.
    Fraction(f64),
    /// Absolute number of samples, clamped to the dataset size.
    Count(usize),
}

impl ValidationSize {
    /// Resolve to an absolute count for a dataset of `total` samples.
    pub fn resolve(self, total: usize) -> Result<usize> {
        match self {
            ValidationSize::Fraction(f) => {
                if !(0.0..1.0).contains(&f) {
                    return Err(DataError::InvalidValidationSize(f));
                }
                Ok((f * total as f64) as usize)
            }
            ValidationSize::Count(n) => Ok(n.min(total)),
        }
    }
}

impl Default for ValidationSize {
    fn default() -> Self {
        ValidationSize::Count(0)
    }
}

impl From<f64> for ValidationSize {
    fn from(f: f64) -> Self {
        ValidationSize::Fraction(f)
    }
}

impl From<usize> for ValidationSize {
    fn from(n: usize) -> Self {
        ValidationSize::Count(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = LoaderConfig::default();
        assert_eq!(cfg.threshold, 127);
        assert_eq!(cfg.channel, ColorChannel::Blue);
        assert!(cfg.extensions.iter().any(|e| e == "png"));
        assert!(cfg.resize.is_none());
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn extensions_are_normalised() {
        let cfg = LoaderConfig::default().extensions([".PNG", "Jpg"]);
        assert_eq!(cfg.extensions, vec!["png".to_string(), "jpg".to_string()]);
    }

    #[test]
    fn fraction_truncates() {
        assert_eq!(ValidationSize::from(0.4).resolve(5).unwrap(), 2);
        assert_eq!(ValidationSize::from(0.33).resolve(10).unwrap(), 3);
        assert_eq!(ValidationSize::from(0.0).resolve(10).unwrap(), 0);
    }

    #[test]
    fn fraction_out_of_range() {
        assert!(ValidationSize::from(1.0).resolve(10).is_err());
        assert!(ValidationSize::from(-0.1).resolve(10).is_err());
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(ValidationSize::from(3usize).resolve(10).unwrap(), 3);
        assert_eq!(ValidationSize::from(30usize).resolve(10).unwrap(), 10);
    }
}

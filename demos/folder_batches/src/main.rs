// =============================================================================
// Folder batches — load a labeled image folder and walk it in mini-batches
// =============================================================================
//
// Expects one subdirectory per class under the training root. Images are
// binarized, shuffled, split into train/validation, and the training set is
// drained batch by batch until the requested number of epochs completes.
//
// Usage:
//   cargo run -p folder-batches -- --train-dir data/train
//   cargo run -p folder-batches -- --train-dir data/train --classes cat,dog
//   cargo run -p folder-batches -- --train-dir data/train --test-dir data/test
//   RUST_LOG=debug cargo run -p folder-batches -- --train-dir data/train --epochs 3

use anyhow::{bail, Context};
use bitfold_data::{read_test_set, read_train_sets, ClassRegistry, LoaderConfig};
use log::info;

struct Config {
    train_dir: Option<String>,
    test_dir: Option<String>,
    classes: Option<Vec<String>>,
    validation: f64,
    batch_size: usize,
    epochs: usize,
    seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            train_dir: None,
            test_dir: None,
            classes: None,
            validation: 0.2,
            batch_size: 16,
            epochs: 1,
            seed: None,
        }
    }
}

fn parse_args() -> anyhow::Result<Config> {
    let mut cfg = Config::default();
    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = || args.next().with_context(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--train-dir" => cfg.train_dir = Some(value()?),
            "--test-dir" => cfg.test_dir = Some(value()?),
            "--classes" => {
                cfg.classes = Some(value()?.split(',').map(str::to_string).collect());
            }
            "--validation" => cfg.validation = value()?.parse().context("invalid --validation")?,
            "--batch-size" => cfg.batch_size = value()?.parse().context("invalid --batch-size")?,
            "--epochs" => cfg.epochs = value()?.parse().context("invalid --epochs")?,
            "--seed" => cfg.seed = Some(value()?.parse().context("invalid --seed")?),
            other => bail!("unknown argument {other}"),
        }
    }
    Ok(cfg)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = parse_args()?;
    if cfg.batch_size == 0 {
        bail!("--batch-size must be positive");
    }
    let Some(train_dir) = cfg.train_dir.as_deref() else {
        bail!("--train-dir is required");
    };

    let classes = match &cfg.classes {
        Some(names) => ClassRegistry::new(names.iter().cloned())?,
        None => ClassRegistry::from_dir(train_dir)?,
    };
    info!("classes: {:?}", classes.names());

    let mut loader_cfg = LoaderConfig::default();
    if let Some(seed) = cfg.seed {
        loader_cfg = loader_cfg.seed(seed);
    }

    let mut sets = read_train_sets(train_dir, &classes, cfg.validation, &loader_cfg)?;
    info!(
        "train: {} samples, validation: {} samples",
        sets.train.num_examples(),
        sets.validation.num_examples()
    );

    let train = &mut sets.train;
    let mut batches = 0usize;
    while train.epochs_completed() < cfg.epochs {
        let batch = train.next_batch(cfg.batch_size)?;
        let ones = batch.images.iter().filter(|&&b| b).count();
        batches += 1;
        log::debug!(
            "batch {batches}: {} samples, {ones} set pixels, first id {:?}",
            batch.len(),
            batch.ids.first()
        );
    }
    info!("served {batches} batches over {} epoch(s)", train.epochs_completed());

    if let Some(test_dir) = cfg.test_dir.as_deref() {
        let test = read_test_set(test_dir, &loader_cfg)?;
        info!("test: {} images, shape {:?}", test.ids.len(), test.images.shape());
    }

    Ok(())
}

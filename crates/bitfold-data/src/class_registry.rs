// ClassRegistry — ordered class names and their label indices

use std::collections::HashMap;
use std::path::Path;

use crate::error::{DataError, Result};

/// An ordered list of class names. A class's position is its label index.
///
/// The name → index map is built once, so one-hot construction never scans
/// the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRegistry {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl ClassRegistry {
    /// Build a registry from class names in label order.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(DataError::DuplicateClass(name.clone()));
            }
        }
        Ok(Self { names, index })
    }

    /// Discover classes from the subdirectories of `root`, sorted by name.
    pub fn from_dir<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        let mut names = Vec::new();
        for entry in std::fs::read_dir(root).map_err(|e| DataError::io(root, e))? {
            let entry = entry.map_err(|e| DataError::io(root, e))?;
            let path = entry.path();
            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Self::new(names)
    }

    /// Class names in label order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Label index of `name`, if registered.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// One-hot vector for `name`: length `len()`, 1.0 at its index.
    pub fn one_hot(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.index_of(name)?;
        let mut v = vec![0.0; self.names.len()];
        v[idx] = 1.0;
        Some(v)
    }
}

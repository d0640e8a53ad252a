use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

/// Filesystem storage: reads resolve against `input_root`, writes against `output_root`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    input_root: PathBuf,
    output_root: PathBuf,
}

impl LocalStorage {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: PathBuf::from("."),
            output_root: output_root.into(),
        }
    }

    pub fn with_input_root(mut self, input_root: impl Into<PathBuf>) -> Self {
        self.input_root = input_root.into();
        self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        // absolute paths replace the root on join
        let full_path = self.input_root.join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.output_root.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

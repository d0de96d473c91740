//! File-backed model registry.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use ridecast_core::error::{Error, Result};
use ridecast_core::traits::ModelRegistry;
use ridecast_core::types::ModelSchema;

/// Metadata recorded alongside each registered artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMeta {
    /// Model name
    pub name: String,
    /// Version assigned at registration
    pub version: u32,
    /// Metrics recorded at registration (at least `test_mae`)
    pub metrics: HashMap<String, f64>,
    /// Input/output schema
    pub schema: ModelSchema,
    /// One example feature row
    pub sample_input: Vec<f64>,
}

/// Model registry backed by versioned directories.
///
/// Layout: `<root>/<name>/<version>/` with `model.bin` (the opaque
/// artifact) and `meta.json`. Versions start at 1 and only ever grow;
/// registered artifacts are never rewritten.
#[derive(Debug, Clone)]
pub struct LocalModelRegistry {
    root: PathBuf,
}

impl LocalModelRegistry {
    const ARTIFACT_FILE: &'static str = "model.bin";
    const META_FILE: &'static str = "meta.json";

    /// Open a registry rooted at `root`, creating the directory if needed
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
        })
    }

    fn model_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Highest registered version for a model name, if any
    pub fn latest_version(&self, name: &str) -> Result<Option<u32>> {
        let dir = self.model_dir(name);
        if !dir.exists() {
            return Ok(None);
        }

        let mut latest = None;
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if let Some(version) = entry
                .file_name()
                .to_str()
                .and_then(|s| s.parse::<u32>().ok())
            {
                latest = latest.max(Some(version));
            }
        }
        Ok(latest)
    }

    fn require_latest(&self, name: &str) -> Result<u32> {
        self.latest_version(name)?
            .ok_or_else(|| Error::ModelNotFound(name.to_string()))
    }

    /// Read the metadata of a specific version
    pub fn meta(&self, name: &str, version: u32) -> Result<ModelMeta> {
        let path = self
            .model_dir(name)
            .join(version.to_string())
            .join(Self::META_FILE);
        let bytes = fs::read(path).map_err(|e| {
            Error::Registry(format!("reading metadata of {name} v{version}: {e}"))
        })?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl ModelRegistry for LocalModelRegistry {
    fn latest_artifact(&self, name: &str) -> Result<Vec<u8>> {
        let version = self.require_latest(name)?;
        let path = self
            .model_dir(name)
            .join(version.to_string())
            .join(Self::ARTIFACT_FILE);
        fs::read(path)
            .map_err(|e| Error::Registry(format!("reading artifact of {name} v{version}: {e}")))
    }

    fn latest_metrics(&self, name: &str) -> Result<HashMap<String, f64>> {
        let version = self.require_latest(name)?;
        Ok(self.meta(name, version)?.metrics)
    }

    fn register(
        &self,
        name: &str,
        artifact: &[u8],
        schema: &ModelSchema,
        metrics: &HashMap<String, f64>,
        sample_input: &[f64],
    ) -> Result<u32> {
        let version = self.latest_version(name)?.unwrap_or(0) + 1;
        let dir = self.model_dir(name).join(version.to_string());
        fs::create_dir_all(&dir)?;

        fs::write(dir.join(Self::ARTIFACT_FILE), artifact)?;

        let meta = ModelMeta {
            name: name.to_string(),
            version,
            metrics: metrics.clone(),
            schema: schema.clone(),
            sample_input: sample_input.to_vec(),
        };
        fs::write(
            dir.join(Self::META_FILE),
            serde_json::to_vec_pretty(&meta)?,
        )?;

        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ridecast_core::constants::TEST_MAE_KEY;

    fn schema() -> ModelSchema {
        ModelSchema::new(
            vec!["rides_t-1".into(), "location_id".into()],
            vec!["rides_next_hour".into()],
        )
    }

    fn metrics(mae: f64) -> HashMap<String, f64> {
        HashMap::from([(TEST_MAE_KEY.to_string(), mae)])
    }

    #[test]
    fn test_versions_increment() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalModelRegistry::open(dir.path()).unwrap();

        let v1 = registry
            .register("demand", b"artifact-1", &schema(), &metrics(5.0), &[1.0, 2.0])
            .unwrap();
        let v2 = registry
            .register("demand", b"artifact-2", &schema(), &metrics(4.5), &[1.0, 2.0])
            .unwrap();

        assert_eq!((v1, v2), (1, 2));
        assert_eq!(registry.latest_version("demand").unwrap(), Some(2));
        assert_eq!(registry.latest_artifact("demand").unwrap(), b"artifact-2");
    }

    #[test]
    fn test_latest_metrics() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalModelRegistry::open(dir.path()).unwrap();

        registry
            .register("demand", b"a", &schema(), &metrics(5.0), &[0.0, 0.0])
            .unwrap();
        registry
            .register("demand", b"b", &schema(), &metrics(4.2), &[0.0, 0.0])
            .unwrap();

        let m = registry.latest_metrics("demand").unwrap();
        assert_eq!(m[TEST_MAE_KEY], 4.2);
    }

    #[test]
    fn test_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalModelRegistry::open(dir.path()).unwrap();

        let err = registry.latest_metrics("demand").unwrap_err();
        assert!(matches!(err, Error::ModelNotFound(_)));
    }

    #[test]
    fn test_meta_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let registry = LocalModelRegistry::open(dir.path()).unwrap();

        registry
            .register("demand", b"a", &schema(), &metrics(3.3), &[9.0, 4.0])
            .unwrap();

        let meta = registry.meta("demand", 1).unwrap();
        assert_eq!(meta.version, 1);
        assert_eq!(meta.sample_input, vec![9.0, 4.0]);
        assert_eq!(meta.schema, schema());
    }
}

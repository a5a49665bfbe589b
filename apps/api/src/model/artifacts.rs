//! Startup loading of the two pre-trained artifacts.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::model::classifier::{Classifier, SoftmaxRegression};
use crate::model::vectorizer::TfidfVectorizer;

/// The vectorizer and classifier, loaded once at process start and held as
/// read-only shared state for the process lifetime. A load or validation
/// failure here is fatal: the service refuses to start rather than serve
/// with partial capability.
pub struct ModelArtifacts {
    pub vectorizer: TfidfVectorizer,
    pub classifier: Box<dyn Classifier>,
}

impl ModelArtifacts {
    pub fn load(vectorizer_path: &str, classifier_path: &str) -> Result<Self> {
        let vectorizer: TfidfVectorizer = read_json(vectorizer_path)
            .with_context(|| format!("loading vectorizer artifact from {vectorizer_path}"))?;
        vectorizer.validate()?;

        let model: SoftmaxRegression = read_json(classifier_path)
            .with_context(|| format!("loading classifier artifact from {classifier_path}"))?;
        model.validate()?;

        ensure!(
            model.n_features() == vectorizer.n_features(),
            "classifier expects {} features but vectorizer produces {}",
            model.n_features(),
            vectorizer.n_features()
        );

        info!(
            "Model artifacts loaded: {} features, {} role classes",
            vectorizer.n_features(),
            model.classes().len()
        );

        Ok(ModelArtifacts {
            vectorizer,
            classifier: Box::new(model),
        })
    }
}

fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let file = File::open(path.as_ref())?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_artifact(name: &str) -> String {
        format!("{}/../../artifacts/{name}", env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_bundled_demo_artifacts_load_and_agree_on_dimensions() {
        let artifacts = ModelArtifacts::load(
            &repo_artifact("vectorizer.json"),
            &repo_artifact("classifier.json"),
        )
        .expect("bundled demo artifacts must be shape-consistent");

        assert!(artifacts.vectorizer.n_features() > 0);
        assert!(artifacts.classifier.classes().len() >= 2);
    }

    #[test]
    fn test_missing_artifact_is_an_error() {
        let result = ModelArtifacts::load("no/such/vectorizer.json", "no/such/classifier.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_swapped_artifact_paths_fail_validation() {
        // A classifier artifact does not deserialize as a vectorizer.
        let result = ModelArtifacts::load(
            &repo_artifact("classifier.json"),
            &repo_artifact("vectorizer.json"),
        );
        assert!(result.is_err());
    }
}

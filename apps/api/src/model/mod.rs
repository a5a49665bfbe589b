//! Pre-trained model artifacts: the TF-IDF vectorizer and the role classifier.

pub mod artifacts;
pub mod classifier;
pub mod vectorizer;

pub use artifacts::ModelArtifacts;
pub use classifier::{RoleScore, SoftmaxRegression};
pub use vectorizer::TfidfVectorizer;

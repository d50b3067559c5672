mod classifier;
mod config;
mod submission;

pub use classifier::{Classifier, CommentClassifier};
pub use config::{CommentSettings, DatabaseSettings, NotificationSettings, Settings};
pub use submission::SubmissionWorkflow;

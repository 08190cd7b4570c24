pub mod dataset;
pub mod recommender;
pub mod tfidf;

pub use dataset::Dataset;
pub use recommender::Recommender;

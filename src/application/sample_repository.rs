// Repository trait for sample data access
use crate::domain::sample::Sample;

pub trait SampleRepository: Send + Sync {
    /// Load the full observation history, in any order.
    fn load_samples(&self) -> anyhow::Result<Vec<Sample>>;
}

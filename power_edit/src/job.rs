pub mod editing_job;
pub mod job_store;
pub mod side;

pub use editing_job::EditingJob;
pub use job_store::JobStore;

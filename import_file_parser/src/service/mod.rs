pub mod queue;
pub mod s3;

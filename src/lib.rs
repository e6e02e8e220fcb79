pub mod args;
pub mod batch;
pub mod mirror;
pub mod output;
pub mod transcode;

// Services for loading the batch-analysis outputs

pub mod data_loader;

pub use data_loader::*;

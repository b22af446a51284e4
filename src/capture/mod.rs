pub mod sampler;
pub mod store;

pub mod error;
pub mod extractors;
pub mod manifest;
pub mod periods;
pub mod push;

pub mod cli;
pub mod error;
pub mod github;
pub mod headers;
pub mod pagination;
pub mod pipeline;
pub mod random;
pub mod template;
pub mod types;

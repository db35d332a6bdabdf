//! Chat pipeline: candidate filtering, query resolution, section assembly,
//! and the HTTP handler that ties them together.

pub mod answerer;
pub mod assembler;
pub mod category;
pub mod filter;
pub mod handlers;
pub mod resolver;
pub mod tables;

//! Regex-driven inspection of a TypeScript source tree: module dependency
//! edges, config/env consistency, type definition lookup and route listing.

pub mod cli;
pub mod inspect;
pub mod project;
pub mod scanner;

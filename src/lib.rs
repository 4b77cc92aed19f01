//! Bushou - component cluster analysis for character decompositions
//!
//! Groups the characters of a decomposition database that share a component
//! in the same structural position (all characters with 木 on the left, all
//! with 心 at the bottom...) and annotates each with the vocabulary that
//! uses it.

pub mod catalog;
pub mod cli;
pub mod cluster;
pub mod decomposition;
pub mod error;
pub mod json_output;
pub mod markdown_output;
pub mod vocabulary;

pub use error::{BushouError, Result};

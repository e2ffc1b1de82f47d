//! Core types: WikiLink, Mention

mod link;
mod mention;

pub use link::WikiLink;
pub use mention::Mention;

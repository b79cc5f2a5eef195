//! Procedures of a search.
//!
//! The [search] procedure is the core of the library, and calls an [encoder](encode) and a [solver](solve) for each k attempted.
//! External tools are run to completion by a private [process] helper.

pub mod encode;
pub(crate) mod process;
pub mod search;
pub mod solve;

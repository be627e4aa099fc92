// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive menu.
//
// Module responsibilities:
// - `api`: blocking HTTP access to the posts/comments REST API and the
//   resource models it returns.
// - `posts`: pure helpers over fetched posts (select, search, sample).
// - `ui`: the numbered menu loop and the prompting seam it reads from.
// - `error`: the error taxonomy shared by `api` and `posts`.
pub mod api;
pub mod error;
pub mod posts;
pub mod ui;

pub use error::{Error, Result};

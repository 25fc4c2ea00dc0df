//! `rn-cli` — the line-oriented boundary of the roadnet engine.
//!
//! # Crate layout
//!
//! | Module      | Contents                                       |
//! |-------------|------------------------------------------------|
//! | [`parser`]  | `parse_line` — one line → `Parsed`/`Command`   |
//! | [`session`] | `Session` — interpreter over two `Write` sinks |
//!
//! The `roadnet` binary in this package wires a `Session` to stdin, stdout,
//! and stderr; everything it does is reachable through this library, which is
//! how the protocol tests drive it with in-memory buffers.

pub mod parser;
pub mod session;


pub use parser::{Command, Parsed, parse_line};
pub use session::Session;

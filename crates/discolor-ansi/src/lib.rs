//! Discolor ANSI
//!
//! This crate turns an annotated content tree into the escape-coded
//! string Discord renders as colored text inside an ` ```ansi ` fenced
//! code block.
//!
//! # Overview
//!
//! - [`codes`] - ANSI escape code constants and fence markers
//! - [`serialize`] - The depth-first tree-to-ANSI serializer
//!
//! # Example
//!
//! ```
//! use discolor_ansi::{fenced, serialize};
//! use discolor_core::{Node, StyleCode};
//!
//! let tree = vec![Node::run(
//!     StyleCode::new(31).unwrap(),
//!     vec![Node::text("red")],
//! )];
//! assert_eq!(serialize(&tree), "\x1b[2;31mred\x1b[0m");
//! assert_eq!(fenced(&serialize(&tree)), "```ansi\n\x1b[2;31mred\x1b[0m\n```");
//! ```

pub mod codes;
pub mod serialize;

pub use codes::{sgr, CSI, FENCE_CLOSE, FENCE_OPEN, RESET};
pub use serialize::{fenced, serialize};

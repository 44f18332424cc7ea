//! Discolor Editor
//!
//! This crate provides the editing side of discolor: markup
//! sanitization, caret restoration, the selection-to-run style command,
//! and the [`Surface`] boundary the host UI layer drives.
//!
//! # Overview
//!
//! - [`markup`] - Canonical markup parsing and rendering
//! - [`entities`] - HTML entity decoding/encoding
//! - [`sanitize_markup`] - The allow-list rewrite applied after every edit
//! - [`caret`] - Best-effort caret restoration across rewrites
//! - [`command`] - The selection-to-run style command
//! - [`surface`] - The three-entry-point host boundary
//!
//! # Example
//!
//! ```
//! use discolor_editor::{Selection, Surface};
//!
//! let mut surface = Surface::from_markup("Hello World");
//! surface.set_selection(Some(Selection::new(6, 11)));
//! surface.on_style_command(31);
//! assert!(surface.on_copy_requested().starts_with("```ansi\n"));
//! ```

pub mod caret;
pub mod command;
pub mod entities;
pub mod markup;
pub mod sanitize;
pub mod surface;

pub use caret::{restore_caret, CaretHint, CaretPos};
pub use command::{apply_style, Selection};
pub use entities::{decode_entities, encode_entities};
pub use markup::{parse_markup, render_markup};
pub use sanitize::{sanitize, sanitize_markup};
pub use surface::Surface;

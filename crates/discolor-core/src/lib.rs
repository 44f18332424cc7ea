//! Discolor Core
//!
//! This crate provides the core types and error definitions for
//! discolor, the Discord ANSI colored-text generator.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Node`] - The annotated content tree (text, line breaks, styled runs)
//! - [`StyleCode`], [`StyleAxis`], [`StyleState`] - The style model
//! - [`DiscolorError`] - Error types

pub mod error;
pub mod node;
pub mod style;

pub use error::{DiscolorError, Result};
pub use node::{plain_text, text_len, Node};
pub use style::{StyleAxis, StyleCode, StyleState, UNSET};

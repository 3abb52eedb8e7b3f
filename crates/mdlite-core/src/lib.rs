//! Mdlite Core
//!
//! This crate provides the shared vocabulary for the mdlite compiler
//! pipeline: tokens, AST nodes, error types, and the code-content escape.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`TokenKind`], [`Token`] - classified segments produced by the tokenizer
//! - [`Block`], [`Inline`] - the AST built by the parser and walked by the generator
//! - [`MdliteError`] - error types
//! - [`escape_angle_brackets`] - the parse-time HTML escape for code content

pub mod ast;
pub mod error;
pub mod sanitize;
pub mod token;

pub use ast::{Block, Inline};
pub use error::{MdliteError, Result};
pub use sanitize::escape_angle_brackets;
pub use token::{Token, TokenKind};

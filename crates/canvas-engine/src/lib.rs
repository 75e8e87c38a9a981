//! Canvas generation pipeline.
//!
//! This crate turns a startup description into a decoded Business Model Canvas:
//!
//! - [`build_canvas_prompt`] / [`CANVAS_SYSTEM_PROMPT`] — Fixed prompt template
//! - [`sanitize`] — Strips markdown code fences from a model reply
//! - [`decode`] — Parses the sanitized reply as a JSON object
//! - [`CanvasGenerator`] — Runs prompt → model → sanitize → decode
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use canvas_engine::CanvasGenerator;
//! use canvas_llm::UnifiedLlmClient;
//!
//! let generator = CanvasGenerator::new(Arc::new(UnifiedLlmClient::new(&model)));
//! let canvas = generator.generate("A marketplace for used textbooks").await?;
//! println!("{}", canvas["Problem"]);
//! ```

mod decode;
mod generator;
mod prompt;
mod sanitize;

pub use decode::{decode, missing_sections};
pub use generator::CanvasGenerator;
pub use prompt::{build_canvas_prompt, CANVAS_SYSTEM_PROMPT};
pub use sanitize::{sanitize, FENCE_MARKER};

//! # Renderer Strategies Module
//!
//! This module provides pluggable message-rendering strategies for the feedback system.
//! Each strategy implements the [`MessageRenderer`] trait and produces the
//! [`RenderedFeedback`] shown to the student for one evaluated submission.
//!
//! ## Available Strategies
//!
//! - [`template_renderer`]: Deterministic, template-based messages per feedback category.
//! - [`ai_renderer`]: Uses an LLM (Large Language Model) to phrase hints for syntax and
//!   runtime errors, falling back to templates for every other category.
//!
//! [`MessageRenderer`]: crate::traits::renderer::MessageRenderer
//! [`RenderedFeedback`]: crate::traits::renderer::RenderedFeedback

pub mod ai_renderer;
pub mod template_renderer;

//! Landing-page drafts derived from a brand brief.
//!
//! This crate provides the two pure transformations behind the studio: mapping a
//! [`Brief`] to a [`Draft`], and serializing a draft into a React component snippet.

pub mod brief;
pub mod draft;
pub mod markup;
pub mod tone;

pub use brief::{Brief, FEATURE_PRESETS};
pub use draft::{build_draft, Draft, Section, SectionTemplate, SECTION_TEMPLATES};
pub use markup::serialize_draft;
pub use tone::{ParseToneError, Tone};

//! Build-time theming transform for Vue Single File Components.
//!
//! An SFC can carry several `<style>` blocks: plain "base" blocks and
//! themed ones marked with a `theme="<name>"` attribute. The transform
//! selects among them for a single active theme chosen at build time:
//!
//! - themed blocks of inactive themes are blanked;
//! - a themed block with a `replace` attribute suppresses base blocks of
//!   the same scope class (all of them for a bare `replace`, or the one
//!   whose `id` matches for `replace="<id>"`);
//! - everything else, `<template>` and `<script>` included, passes
//!   through untouched.
//!
//! Blanked blocks keep their original line count, so line numbers in the
//! output match the input without any source map. The private `theme`,
//! `replace` and `id` attributes are stripped from the output markup.
//!
//! ```
//! use themed_style::{transform, ThemeOptions};
//!
//! let source = "\
//! <style>.btn { color: red; }</style>
//! <style theme=\"dark\" replace>.btn { color: orange; }</style>";
//!
//! let out = transform(source, "button.vue", &ThemeOptions::with_theme("dark")).unwrap();
//! assert!(out.contains("color: orange"));
//! assert!(!out.contains("color: red"));
//! ```

mod error;
mod options;
mod report;
mod resolve;
mod serialize;
mod transform;

pub use error::TransformError;
pub use options::ThemeOptions;
pub use report::{ConsoleSink, DebugSink};
pub use resolve::{apply_theme, blank_spacer, should_suppress};
pub use serialize::{gen_attrs, gen_section, serialize_descriptor};
pub use transform::{transform, transform_with_sink};

/// SFC descriptor types and the block-level parser.
pub use themed_style_sfc as sfc;

//! Block-level parser for Vue Single File Components.
//!
//! This crate plays the role of `vue-template-compiler`'s `parseComponent`
//! for the themed-style transform: it splits a `.vue` source into its
//! top-level `<template>`, `<script>`, `<style>` and custom blocks without
//! interpreting any of their contents. Template expressions, script code
//! and CSS all pass through verbatim.
//!
//! Zero-copy design: block contents, tag names and attribute text borrow
//! from the input source via `Cow<str>`.

mod parse;
mod types;

pub use parse::parse_sfc;
pub use types::{
    AttrList, AttrValue, BlockSpan, ParseError, SfcCustomBlock, SfcDescriptor, SfcScriptBlock,
    SfcStyleBlock, SfcTemplateBlock,
};

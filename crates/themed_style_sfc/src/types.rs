//! SFC descriptor type definitions.
//!
//! Attribute values carry a boolean/string distinction: a presence-only
//! attribute (`<style scoped>`) parses as [`AttrValue::True`], a valued one
//! (`<style theme="dark">`) as [`AttrValue::Str`]. Attribute order from the
//! source is preserved so blocks can be re-serialized byte-for-byte.

use serde::{Serialize, Serializer};
use std::borrow::Cow;

/// Value of a single block attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue<'a> {
    /// Presence-only attribute, e.g. `scoped` or a bare `replace`.
    True,
    /// Valued attribute, e.g. `theme="dark"`.
    Str(Cow<'a, str>),
}

impl Serialize for AttrValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::True => serializer.serialize_bool(true),
            AttrValue::Str(value) => serializer.serialize_str(value),
        }
    }
}

/// Insertion-ordered attribute list; iteration yields attributes in the
/// order they appeared in the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttrList<'a>(Vec<(Cow<'a, str>, AttrValue<'a>)>);

impl<'a> AttrList<'a> {
    /// Add an attribute; a repeated name overwrites the earlier value in place.
    pub fn push(&mut self, name: Cow<'a, str>, value: AttrValue<'a>) {
        if let Some(slot) = self.0.iter_mut().find(|(n, _)| n.as_ref() == name.as_ref()) {
            slot.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue<'a>> {
        self.0
            .iter()
            .find(|(n, _)| n.as_ref() == name)
            .map(|(_, v)| v)
    }

    /// String value of an attribute; `None` for absent or presence-only ones.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            AttrValue::Str(value) => Some(value.as_ref()),
            AttrValue::True => None,
        }
    }

    pub fn is_true(&self, name: &str) -> bool {
        matches!(self.get(name), Some(AttrValue::True))
    }

    /// Remove every attribute whose name appears in `names`.
    pub fn strip(&mut self, names: &[&str]) {
        self.0.retain(|(n, _)| !names.contains(&n.as_ref()));
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue<'a>)> + '_ {
        self.0.iter().map(|(n, v)| (n.as_ref(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Byte range of a block's content in the original source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BlockSpan {
    /// Start offset of the content (just past the opening `>`).
    pub start: usize,
    /// End offset of the content (at the `<` of the closing tag).
    pub end: usize,
}

/// Parsed result of a `.vue` file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SfcDescriptor<'a> {
    pub template: Option<SfcTemplateBlock<'a>>,
    pub script: Option<SfcScriptBlock<'a>>,
    /// Style blocks in source order.
    pub styles: Vec<SfcStyleBlock<'a>>,
    /// Custom blocks (`<i18n>`, `<docs>`, ...) in source order.
    pub custom_blocks: Vec<SfcCustomBlock<'a>>,
}

/// `<template>` block.
#[derive(Debug, Clone, Serialize)]
pub struct SfcTemplateBlock<'a> {
    pub content: Cow<'a, str>,
    pub attrs: AttrList<'a>,
    pub loc: BlockSpan,
}

/// `<script>` block.
#[derive(Debug, Clone, Serialize)]
pub struct SfcScriptBlock<'a> {
    pub content: Cow<'a, str>,
    pub attrs: AttrList<'a>,
    pub loc: BlockSpan,
}

/// `<style>` block.
#[derive(Debug, Clone, Serialize)]
pub struct SfcStyleBlock<'a> {
    pub content: Cow<'a, str>,
    pub attrs: AttrList<'a>,
    /// Derived from the `scoped` presence attribute.
    pub scoped: bool,
    pub loc: BlockSpan,
}

impl<'a> SfcStyleBlock<'a> {
    /// Theme this block belongs to. A bare or empty `theme` attribute does
    /// not count as themed.
    pub fn theme(&self) -> Option<&str> {
        self.attrs.get_str("theme").filter(|t| !t.is_empty())
    }

    /// Identifier a themed sibling can target with `replace="<id>"`.
    pub fn id(&self) -> Option<&str> {
        self.attrs.get_str("id")
    }

    pub fn replace(&self) -> Option<&AttrValue<'a>> {
        self.attrs.get("replace")
    }
}

/// Custom block with an arbitrary tag name.
#[derive(Debug, Clone, Serialize)]
pub struct SfcCustomBlock<'a> {
    pub block_type: Cow<'a, str>,
    pub content: Cow<'a, str>,
    pub attrs: AttrList<'a>,
    pub loc: BlockSpan,
}

/// SFC parse error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("SFC can only contain one <template> block (at offset {offset})")]
    DuplicateTemplate { offset: usize },
    #[error("SFC can only contain one <script> block (at offset {offset})")]
    DuplicateScript { offset: usize },
}

//! SFC re-serialization.
//!
//! Regenerates component markup from a descriptor. The output layout is
//! fixed: custom blocks first (each followed by a blank line), then the
//! template and script sections, then the style blocks joined by blank
//! lines. Absent sections contribute an empty string, which keeps the
//! joins stable regardless of which sections exist.

use themed_style_sfc::{AttrList, AttrValue, SfcDescriptor};

/// Attribute portion of an opening tag, in insertion order.
///
/// A presence attribute renders as ` name`, a valued one as
/// ` name="value"`. Empty list renders as an empty string, so the tag
/// closes with no space before `>`.
pub fn gen_attrs(attrs: &AttrList<'_>) -> String {
    let mut out = String::new();
    for (name, value) in attrs.iter() {
        out.push(' ');
        out.push_str(name);
        if let AttrValue::Str(v) = value {
            out.push_str("=\"");
            out.push_str(v);
            out.push('"');
        }
    }
    out
}

/// One section as `<tag ATTRS>CONTENT</tag>` with a trailing newline.
pub fn gen_section(tag: &str, attrs: &AttrList<'_>, content: &str) -> String {
    format!("<{tag}{}>{content}</{tag}>\n", gen_attrs(attrs))
}

/// Regenerate the full component source from a descriptor.
pub fn serialize_descriptor(descriptor: &SfcDescriptor<'_>) -> String {
    let mut output = String::new();

    for block in &descriptor.custom_blocks {
        output.push_str(&format!(
            "<{0}>{1}</{0}>\n\n",
            block.block_type, block.content
        ));
    }

    let template = descriptor
        .template
        .as_ref()
        .map(|t| gen_section("template", &t.attrs, &t.content))
        .unwrap_or_default();
    let script = descriptor
        .script
        .as_ref()
        .map(|s| gen_section("script", &s.attrs, &s.content))
        .unwrap_or_default();
    let styles: Vec<String> = descriptor
        .styles
        .iter()
        .map(|s| gen_section("style", &s.attrs, &s.content))
        .collect();

    output.push_str(&template);
    output.push('\n');
    output.push_str(&script);
    output.push('\n');
    output.push_str(&styles.join("\n"));
    output
}

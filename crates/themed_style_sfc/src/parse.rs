//! SFC parsing implementation.
//!
//! Byte-level scan over the source, using `memchr` to jump between `<`
//! delimiters. Only the top-level block structure is interpreted; block
//! contents are returned as borrowed slices of the input.

use crate::types::*;
use memchr::memchr;
use std::borrow::Cow;

const TAG_TEMPLATE: &[u8] = b"template";
const TAG_SCRIPT: &[u8] = b"script";
const TAG_STYLE: &[u8] = b"style";
const CLOSING_TEMPLATE: &[u8] = b"</template>";

/// One raw top-level block, before dispatch on its tag name.
struct RawBlock<'a> {
    tag: &'a str,
    attrs: AttrList<'a>,
    content: Cow<'a, str>,
    span: BlockSpan,
    /// Position just past the closing tag.
    end_pos: usize,
}

/// Parse a Vue SFC into a descriptor with zero-copy strings.
///
/// Anything outside a recognized block (comments, stray text) is skipped.
/// Blocks with no matching closing tag are skipped as well.
pub fn parse_sfc(source: &str) -> Result<SfcDescriptor<'_>, ParseError> {
    let bytes = source.as_bytes();
    let mut descriptor = SfcDescriptor::default();
    let mut pos = 0;

    while pos < bytes.len() {
        match memchr(b'<', &bytes[pos..]) {
            Some(offset) => pos += offset,
            None => break,
        }

        let Some(block) = parse_block(source, pos) else {
            pos += 1;
            continue;
        };
        let next = block.end_pos;

        if tag_name_eq(block.tag.as_bytes(), TAG_TEMPLATE) {
            if descriptor.template.is_some() {
                return Err(ParseError::DuplicateTemplate { offset: pos });
            }
            descriptor.template = Some(SfcTemplateBlock {
                content: block.content,
                attrs: block.attrs,
                loc: block.span,
            });
        } else if tag_name_eq(block.tag.as_bytes(), TAG_SCRIPT) {
            if descriptor.script.is_some() {
                return Err(ParseError::DuplicateScript { offset: pos });
            }
            descriptor.script = Some(SfcScriptBlock {
                content: block.content,
                attrs: block.attrs,
                loc: block.span,
            });
        } else if tag_name_eq(block.tag.as_bytes(), TAG_STYLE) {
            let scoped = block.attrs.is_true("scoped");
            descriptor.styles.push(SfcStyleBlock {
                content: block.content,
                attrs: block.attrs,
                scoped,
                loc: block.span,
            });
        } else {
            descriptor.custom_blocks.push(SfcCustomBlock {
                block_type: Cow::Borrowed(block.tag),
                content: block.content,
                attrs: block.attrs,
                loc: block.span,
            });
        }

        pos = next;
    }

    Ok(descriptor)
}

/// Parse a single block starting at the `<` at `start`.
fn parse_block(source: &str, start: usize) -> Option<RawBlock<'_>> {
    let bytes = source.as_bytes();
    let len = bytes.len();

    let mut pos = start + 1;
    let tag_start = pos;
    while pos < len && is_tag_name_byte(bytes[pos]) {
        pos += 1;
    }
    if pos == tag_start {
        return None;
    }
    let tag = &source[tag_start..pos];

    let mut attrs = AttrList::default();
    while pos < len && bytes[pos] != b'>' {
        while pos < len && is_whitespace_byte(bytes[pos]) {
            pos += 1;
        }
        if pos >= len || bytes[pos] == b'>' || bytes[pos] == b'/' {
            break;
        }

        let name_start = pos;
        while pos < len {
            match bytes[pos] {
                b'=' | b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/' => break,
                _ => pos += 1,
            }
        }
        if pos == name_start {
            pos += 1;
            continue;
        }
        let name = &source[name_start..pos];

        while pos < len && matches!(bytes[pos], b' ' | b'\t') {
            pos += 1;
        }

        let value = if pos < len && bytes[pos] == b'=' {
            pos += 1;
            while pos < len && matches!(bytes[pos], b' ' | b'\t') {
                pos += 1;
            }
            if pos < len && (bytes[pos] == b'"' || bytes[pos] == b'\'') {
                let quote = bytes[pos];
                pos += 1;
                let value_start = pos;
                let value_end = match memchr(quote, &bytes[pos..]) {
                    Some(offset) => pos + offset,
                    None => len,
                };
                pos = (value_end + 1).min(len);
                AttrValue::Str(Cow::Borrowed(&source[value_start..value_end]))
            } else {
                let value_start = pos;
                while pos < len && !matches!(bytes[pos], b' ' | b'\t' | b'\n' | b'>' | b'/') {
                    pos += 1;
                }
                AttrValue::Str(Cow::Borrowed(&source[value_start..pos]))
            }
        } else {
            AttrValue::True
        };

        attrs.push(Cow::Borrowed(name), value);
    }

    let mut self_closing = false;
    if pos < len && bytes[pos] == b'/' {
        self_closing = true;
        while pos < len && bytes[pos] != b'>' {
            pos += 1;
        }
    }
    if pos >= len || bytes[pos] != b'>' {
        return None;
    }
    pos += 1;

    if self_closing {
        return Some(RawBlock {
            tag,
            attrs,
            content: Cow::Borrowed(""),
            span: BlockSpan { start: pos, end: pos },
            end_pos: pos,
        });
    }

    let content_start = pos;
    let (content_end, end_pos) = if tag_name_eq(tag.as_bytes(), TAG_TEMPLATE) {
        find_template_end(bytes, pos)?
    } else {
        find_block_end(bytes, tag.as_bytes(), pos)?
    };

    Some(RawBlock {
        tag,
        attrs,
        content: Cow::Borrowed(&source[content_start..content_end]),
        span: BlockSpan {
            start: content_start,
            end: content_end,
        },
        end_pos,
    })
}

/// Find the closing `</tag>` for a non-template block. Script, style and
/// custom block contents cannot contain nested blocks of the same tag.
fn find_block_end(bytes: &[u8], tag: &[u8], mut pos: usize) -> Option<(usize, usize)> {
    let len = bytes.len();
    while pos < len {
        pos += memchr(b'<', &bytes[pos..])?;
        if is_closing_tag_at(bytes, pos, tag) {
            return Some((pos, pos + tag.len() + 3));
        }
        pos += 1;
    }
    None
}

/// Find the closing `</template>`, tracking nested template tags.
fn find_template_end(bytes: &[u8], mut pos: usize) -> Option<(usize, usize)> {
    let len = bytes.len();
    let mut depth = 1usize;
    while pos < len {
        pos += memchr(b'<', &bytes[pos..])?;
        if is_closing_tag_at(bytes, pos, TAG_TEMPLATE) {
            depth -= 1;
            if depth == 0 {
                return Some((pos, pos + CLOSING_TEMPLATE.len()));
            }
            pos += CLOSING_TEMPLATE.len();
            continue;
        }
        if is_nested_template_open(bytes, pos) {
            depth += 1;
        }
        pos += 1;
    }
    None
}

/// Whether `bytes[pos..]` starts the closing tag `</tag>`.
fn is_closing_tag_at(bytes: &[u8], pos: usize, tag: &[u8]) -> bool {
    let gt = pos + 2 + tag.len();
    bytes.len() > gt
        && bytes[pos + 1] == b'/'
        && tag_name_eq(&bytes[pos + 2..gt], tag)
        && bytes[gt] == b'>'
}

/// Whether `bytes[pos..]` opens a nested `<template ...>` tag. A
/// self-closing `<template/>` has no matching closing tag and is excluded.
fn is_nested_template_open(bytes: &[u8], pos: usize) -> bool {
    let name_end = pos + 1 + TAG_TEMPLATE.len();
    if bytes.len() <= name_end
        || !tag_name_eq(&bytes[pos + 1..name_end], TAG_TEMPLATE)
        || !matches!(bytes[name_end], b' ' | b'\t' | b'\n' | b'\r' | b'>')
    {
        return false;
    }
    let mut p = name_end;
    while p < bytes.len() && bytes[p] != b'>' {
        if bytes[p] == b'/' && p + 1 < bytes.len() && bytes[p + 1] == b'>' {
            return false;
        }
        p += 1;
    }
    true
}

#[inline]
fn tag_name_eq(name: &[u8], expected: &[u8]) -> bool {
    name.len() == expected.len() && name.eq_ignore_ascii_case(expected)
}

#[inline]
fn is_tag_name_byte(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_')
}

#[inline]
fn is_whitespace_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_source() {
        let descriptor = parse_sfc("").unwrap();
        assert!(descriptor.template.is_none());
        assert!(descriptor.script.is_none());
        assert!(descriptor.styles.is_empty());
        assert!(descriptor.custom_blocks.is_empty());
    }

    #[test]
    fn parse_template_only() {
        let source = "<template><div>Hello</div></template>";
        let descriptor = parse_sfc(source).unwrap();

        let template = descriptor.template.unwrap();
        assert_eq!(template.content, "<div>Hello</div>");
        assert_eq!(template.loc, BlockSpan { start: 10, end: 26 });
    }

    #[test]
    fn parse_nested_templates() {
        let source = "<template><template v-if=\"a\"><b/></template></template>";
        let descriptor = parse_sfc(source).unwrap();

        let template = descriptor.template.unwrap();
        assert_eq!(template.content, "<template v-if=\"a\"><b/></template>");
    }

    #[test]
    fn parse_script_attrs() {
        let source = "<script setup lang=\"ts\">const n: number = 1</script>";
        let descriptor = parse_sfc(source).unwrap();

        let script = descriptor.script.unwrap();
        assert!(script.attrs.is_true("setup"));
        assert_eq!(script.attrs.get_str("lang"), Some("ts"));
        assert_eq!(script.content, "const n: number = 1");
    }

    #[test]
    fn parse_multiple_styles_in_order() {
        let source = "\n<style>.a {}</style>\n<style scoped>.b {}</style>\n<style theme=\"dark\" replace>.c {}</style>\n";
        let descriptor = parse_sfc(source).unwrap();

        assert_eq!(descriptor.styles.len(), 3);
        assert!(!descriptor.styles[0].scoped);
        assert!(descriptor.styles[1].scoped);
        assert_eq!(descriptor.styles[2].theme(), Some("dark"));
        assert_eq!(
            descriptor.styles[2].replace(),
            Some(&AttrValue::True)
        );
        assert_eq!(descriptor.styles[0].content, ".a {}");
        assert_eq!(descriptor.styles[2].content, ".c {}");
    }

    #[test]
    fn parse_quoting_styles() {
        let source = "<style id='main' lang=scss theme=\"a\">.x {}</style>";
        let descriptor = parse_sfc(source).unwrap();

        let style = &descriptor.styles[0];
        assert_eq!(style.id(), Some("main"));
        assert_eq!(style.attrs.get_str("lang"), Some("scss"));
        assert_eq!(style.theme(), Some("a"));
    }

    #[test]
    fn parse_custom_block() {
        let source = "<i18n locale=\"en\">{\"hello\": \"Hello\"}</i18n>\n<template><div/></template>";
        let descriptor = parse_sfc(source).unwrap();

        assert_eq!(descriptor.custom_blocks.len(), 1);
        let block = &descriptor.custom_blocks[0];
        assert_eq!(block.block_type, "i18n");
        assert_eq!(block.content, "{\"hello\": \"Hello\"}");
        assert_eq!(block.attrs.get_str("locale"), Some("en"));
        assert!(descriptor.template.is_some());
    }

    #[test]
    fn parse_self_closing_block() {
        let source = "<docs/>\n<template><div/></template>";
        let descriptor = parse_sfc(source).unwrap();

        assert_eq!(descriptor.custom_blocks.len(), 1);
        assert_eq!(descriptor.custom_blocks[0].content, "");
    }

    #[test]
    fn duplicate_template_is_an_error() {
        let source = "<template><a/></template><template><b/></template>";
        let err = parse_sfc(source).unwrap_err();
        assert_eq!(err, ParseError::DuplicateTemplate { offset: 25 });
    }

    #[test]
    fn duplicate_script_is_an_error() {
        let source = "<script>1</script>\n<script>2</script>";
        let err = parse_sfc(source).unwrap_err();
        assert!(matches!(err, ParseError::DuplicateScript { .. }));
    }

    #[test]
    fn unterminated_block_is_skipped() {
        let source = "<style>.a {}\n<template><div/></template>";
        let descriptor = parse_sfc(source).unwrap();

        assert!(descriptor.styles.is_empty());
        assert!(descriptor.template.is_some());
    }

    #[test]
    fn style_close_inside_script_is_ignored() {
        let source = "<script>const s = '</style>'</script>";
        let descriptor = parse_sfc(source).unwrap();

        let script = descriptor.script.unwrap();
        assert_eq!(script.content, "const s = '</style>'");
    }

    #[test]
    fn content_borrows_from_source() {
        let source = "<template><div>Hello</div></template>";
        let descriptor = parse_sfc(source).unwrap();

        let template = descriptor.template.unwrap();
        assert!(matches!(template.content, Cow::Borrowed(_)));
    }
}

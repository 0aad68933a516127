//! Theme resolution: decides, per style block, whether its content is
//! suppressed for the active theme.
//!
//! Rules, for a block `B` against the full set of style blocks:
//!
//! - `B` themed: suppressed unless its theme is the active one.
//! - `B` base (not themed): suppressed when some block of the *active*
//!   theme with the same scope class carries `replace` (bare form), or
//!   `replace="<id>"` naming `B`'s `id`.
//!
//! Scoped base blocks are only ever replaced by scoped themed blocks, and
//! non-scoped by non-scoped. Decisions are computed for all blocks before
//! any mutation is applied, so the source order of the blocks can never
//! influence an individual decision.

use crate::options::ThemeOptions;
use memchr::memchr_iter;
use std::borrow::Cow;
use themed_style_sfc::{AttrValue, SfcDescriptor, SfcStyleBlock};

/// Attributes that signal theming to this transform but are not valid
/// `<style>` markup in the output.
const PRIVATE_ATTRS: &[&str] = &["theme", "replace", "id"];

/// Whether `block`'s content should be blanked.
///
/// Pure over the pristine block set; `siblings` includes `block` itself.
pub fn should_suppress(
    block: &SfcStyleBlock<'_>,
    siblings: &[SfcStyleBlock<'_>],
    options: &ThemeOptions,
) -> bool {
    if let Some(theme) = block.theme() {
        return options.theme.as_deref() != Some(theme);
    }

    // Base block: look for an active-theme sibling that replaces it.
    let Some(active) = options.theme.as_deref() else {
        return false;
    };
    let id = block.id();

    siblings
        .iter()
        .filter(|s| s.theme() == Some(active))
        .filter(|s| s.scoped == block.scoped)
        .any(|s| match s.replace() {
            Some(AttrValue::True) => true,
            Some(AttrValue::Str(target)) => id.is_some_and(|id| id == target.as_ref()),
            None => false,
        })
}

/// Blank-line stand-in for suppressed content: one `'\n'` per newline in
/// the original, so trailing blocks keep their absolute line numbers.
pub fn blank_spacer(content: &str) -> String {
    "\n".repeat(memchr_iter(b'\n', content.as_bytes()).count())
}

/// Resolve the active theme against a parsed component.
///
/// Blanks every suppressed style block and strips the private signaling
/// attributes from all of them. Template, script and custom blocks are
/// left untouched; no style block is added or removed.
pub fn apply_theme(descriptor: &mut SfcDescriptor<'_>, options: &ThemeOptions) {
    let suppressed: Vec<bool> = descriptor
        .styles
        .iter()
        .map(|style| should_suppress(style, &descriptor.styles, options))
        .collect();

    for (style, suppress) in descriptor.styles.iter_mut().zip(suppressed) {
        if suppress {
            style.content = Cow::Owned(blank_spacer(&style.content));
        }
        style.attrs.strip(PRIVATE_ATTRS);
    }
}

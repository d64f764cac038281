//! `<i18n>` custom blocks in Vue single-file components.

use std::{ops::Range, sync::LazyLock};

use regex::Regex;

// Custom blocks are top-level, so the opening tag must start a line. This keeps
// `<i18n-t>` and in-template `<i18n>` components out.
static I18N_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)^<i18n(?P<attrs>(?:\s[^>]*)?)>(?P<content>.*?)</i18n\s*>").unwrap()
});

static LANG_ATTR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\blang\s*=\s*(?:"([^"]*)"|'([^']*)')"#).unwrap());

/// Location of an `<i18n>` block inside a component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nBlock {
    /// Byte range of the text between the opening and closing tags.
    pub content: Range<usize>,
    /// Value of the `lang` attribute, if any.
    pub lang: Option<String>,
}

/// Find the first `<i18n>` block of a component.
pub fn find_i18n_block(source: &str) -> Option<I18nBlock> {
    let captures = I18N_BLOCK_REGEX.captures(source)?;
    let content = captures.name("content")?.range();
    let lang = captures
        .name("attrs")
        .and_then(|attrs| LANG_ATTR_REGEX.captures(attrs.as_str()))
        .and_then(|lang| lang.get(1).or_else(|| lang.get(2)))
        .map(|m| m.as_str().to_string());

    Some(I18nBlock { content, lang })
}

/// Replace the block's content, keeping everything around it byte for byte.
pub fn replace_block_content(source: &str, block: &I18nBlock, new_content: &str) -> String {
    format!(
        "{}\n{}\n{}",
        &source[..block.content.start],
        new_content,
        &source[block.content.end..]
    )
}

use std::sync::LazyLock;

use boli_types::{BlockTag, RenderBlock};
use regex::Regex;

static BLOCK_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("block break pattern is valid"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("bold pattern is valid"));

/// Turn a plain-text lesson body into render blocks.
///
/// Blocks are separated by blank lines. A leading `## `, `### ` or `#### `
/// selects a heading level. Text is escaped before `**bold**` spans and line
/// breaks are turned into markup, so markup in the source stays inert.
pub fn format(raw: &str) -> Vec<RenderBlock> {
    BLOCK_BREAK
        .split(raw)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(format_block)
        .collect()
}

/// Formatted blocks joined as markup
pub fn format_html(raw: &str) -> String {
    format(raw).iter().map(RenderBlock::to_html).collect()
}

fn format_block(block: &str) -> RenderBlock {
    let (tag, inner) = if let Some(rest) = block.strip_prefix("#### ") {
        (BlockTag::Heading4, rest)
    } else if let Some(rest) = block.strip_prefix("### ") {
        (BlockTag::Heading3, rest)
    } else if let Some(rest) = block.strip_prefix("## ") {
        (BlockTag::Heading2, rest)
    } else {
        (BlockTag::Paragraph, block)
    };

    let escaped = escape(inner);
    let emphasized = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    let text = emphasized.replace('\n', "<br>");

    RenderBlock { tag, text }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

//! Plain-text extraction from markdown source.
//!
//! The document stores markdown; consumers that want the visible text get it
//! by parsing the source and keeping only textual content.

use markdown::ParseOptions;
use markdown::mdast::Node;

/// Separator between top-level blocks.
const BLOCK_SEPARATOR: &str = "\n\n";
/// Separator between items of a container block (list, quote, table).
const ITEM_SEPARATOR: &str = "\n";

/// Visible text of a markdown document.
///
/// Inline syntax and raw HTML are dropped. Top-level blocks are separated by a
/// blank line; list items, quoted blocks, table rows and hard breaks by a
/// single newline. If the source cannot be parsed it is returned unchanged.
pub fn plain_text(markup: &str) -> String {
    match markdown::to_mdast(markup, &ParseOptions::gfm()) {
        Ok(root) => block_text(&root),
        Err(err) => {
            tracing::warn!(error = ?err, "markdown parse failed, using source as text");
            markup.to_owned()
        }
    }
}

fn block_text(node: &Node) -> String {
    match node {
        Node::Root(root) => join_blocks(&root.children, BLOCK_SEPARATOR),
        Node::List(_) | Node::ListItem(_) | Node::Blockquote(_) | Node::FootnoteDefinition(_) => {
            join_blocks(node.children().map(Vec::as_slice).unwrap_or_default(), ITEM_SEPARATOR)
        }
        Node::Table(table) => join_blocks(&table.children, ITEM_SEPARATOR),
        Node::TableRow(row) => row
            .children
            .iter()
            .map(inline_text)
            .collect::<Vec<_>>()
            .join("\t"),
        Node::Code(code) => code.value.clone(),
        Node::Math(math) => math.value.clone(),
        Node::Html(_)
        | Node::ThematicBreak(_)
        | Node::Definition(_)
        | Node::Yaml(_)
        | Node::Toml(_) => String::new(),
        other => inline_text(other),
    }
}

fn join_blocks(children: &[Node], separator: &str) -> String {
    children
        .iter()
        .map(block_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn inline_text(node: &Node) -> String {
    let mut out = String::new();
    push_inline(node, &mut out);
    out
}

fn push_inline(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&text.value),
        Node::InlineCode(code) => out.push_str(&code.value),
        Node::InlineMath(math) => out.push_str(&math.value),
        Node::Break(_) => out.push('\n'),
        Node::Image(image) => out.push_str(&image.alt),
        Node::ImageReference(image) => out.push_str(&image.alt),
        Node::Html(_) => {}
        other => {
            if let Some(children) = other.children() {
                for child in children {
                    push_inline(child, out);
                }
            }
        }
    }
}

use roxmltree::Node;

const XML_PREFIX: &str = "xml";

/// Serialize the children of `node` back to markup.
///
/// Text is written decoded, the way the HTML content would have looked
/// before it was embedded in the feed. Elements at the top of the output
/// declare their namespace so the fragment stands on its own.
pub fn inner_markup(node: Node) -> String {
    let mut out = String::new();
    for child in node.children() {
        write_node(child, None, &mut out);
    }
    out
}

/// Concatenated text of every descendant text node.
pub fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

pub fn has_element_children(node: Node) -> bool {
    node.children().any(|c| c.is_element())
}

fn write_node(node: Node, parent_namespace: Option<&str>, out: &mut String) {
    if node.is_text() {
        if let Some(text) = node.text() {
            out.push_str(text);
        }
        return;
    }

    if !node.is_element() {
        return;
    }

    let namespace = node.tag_name().namespace();
    let prefix = namespace.and_then(|uri| node.lookup_prefix(uri));
    let name = qualified_name(prefix, node.tag_name().name());

    out.push('<');
    out.push_str(&name);

    if let Some(uri) = namespace {
        if parent_namespace != Some(uri) {
            match prefix {
                Some(p) if !p.is_empty() => out.push_str(&format!(" xmlns:{}=\"", p)),
                _ => out.push_str(" xmlns=\""),
            }
            out.push_str(&html_escape::encode_double_quoted_attribute(uri));
            out.push('"');
        }
    }

    for attr in node.attributes() {
        let attr_prefix = attr.namespace().and_then(|uri| {
            if uri == roxmltree::NS_XML_URI {
                Some(XML_PREFIX)
            } else {
                node.lookup_prefix(uri)
            }
        });
        out.push(' ');
        out.push_str(&qualified_name(attr_prefix, attr.name()));
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(attr.value()));
        out.push('"');
    }

    if node.has_children() {
        out.push('>');
        for child in node.children() {
            write_node(child, namespace, out);
        }
        out.push_str("</");
        out.push_str(&name);
        out.push('>');
    } else {
        out.push_str("/>");
    }
}

fn qualified_name(prefix: Option<&str>, local: &str) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{}:{}", p, local),
        _ => local.to_string(),
    }
}

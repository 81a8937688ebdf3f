use scraper::{ElementRef, Html, Node};

const BULLET: &str = "• ";

/// Converts an HTML fragment into plain text.
///
/// `<br>` and the end of every `<p>` become line breaks, and list items are
/// rendered as `• item` lines. Whitespace inside a line is collapsed and blank
/// lines are dropped.
pub fn html_to_text(html_fragment: &str) -> String {
    if html_fragment.is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(html_fragment);
    let mut text = String::new();
    push_children_text(fragment.root_element(), &mut text);

    text.split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn push_children_text(node: ElementRef, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                if let Some(element) = ElementRef::wrap(child) {
                    push_element_text(element, out);
                }
            }
            _ => {}
        }
    }
}

fn push_element_text(element: ElementRef, out: &mut String) {
    match element.value().name() {
        "br" => out.push('\n'),
        "script" | "style" | "template" => {}
        "li" => {
            out.push_str(BULLET);
            push_children_text(element, out);
            out.push('\n');
        }
        "p" => {
            push_children_text(element, out);
            out.push('\n');
        }
        _ => push_children_text(element, out),
    }
}

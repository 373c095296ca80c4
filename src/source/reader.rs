//! Reading vector-drawable XML text into an [`Element`] tree

use crate::error::ConvertError;

use super::tree::{Element, QualifiedName};

/// Parse XML text into an owned element tree rooted at the document element
pub fn parse(text: &str) -> Result<Element, ConvertError> {
    let doc = roxmltree::Document::parse(text).map_err(|e| ConvertError::malformed(&e, text))?;
    Ok(read_element(doc.root_element()))
}

fn read_element(node: roxmltree::Node) -> Element {
    let tag = node.tag_name();
    let mut element = Element::new(QualifiedName::new(tag.namespace(), tag.name()))
        .with_span(node.range());

    for attr in node.attributes() {
        element
            .attributes
            .insert(QualifiedName::new(attr.namespace(), attr.name()), attr.value().to_string());
    }

    // Text, comments and processing instructions carry nothing drawable
    element.children = node
        .children()
        .filter(|child| child.is_element())
        .map(read_element)
        .collect();

    element
}

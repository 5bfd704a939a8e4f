use crate::{element::Node, Element, HostConfig, RenderError};

/// Checks a whole tree before any of it is committed, so a fatal error
/// leaves no partial output behind.
pub(crate) fn validate_tree<H: HostConfig>(host: &H, element: &Element) -> Result<(), RenderError> {
    host.validate_kind(&element.kind)?;

    let holds_text = host.should_set_text_content(&element.kind);
    for child in &element.children {
        match child {
            Node::Text(_) if holds_text => {}
            Node::Text(_) => {
                return Err(RenderError::IllegalText {
                    kind: element.kind.clone(),
                })
            }
            Node::Element(child) => {
                if !host.accepts_children(&element.kind) {
                    return Err(RenderError::ChildrenNotAllowed {
                        kind: element.kind.clone(),
                    });
                }
                validate_tree(host, child)?;
            }
        }
    }
    Ok(())
}

//! Focus helpers for keyboard shortcuts
//!
//! Enter only confirms a prompt when the user is not typing somewhere.

/// What currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// No focused element (or only the document body)
    Nothing,
    /// A control where Enter inserts text or submits its own form
    TextEntry,
    /// Buttons, links and everything else
    Other,
}

/// Input types that take free text
const TEXT_INPUT_TYPES: &[&str] = &[
    "text", "search", "email", "url", "tel", "password", "number", "date",
    "datetime-local", "month", "time", "week",
];

/// Classify an element by tag name, `type` attribute and editability
pub fn classify_focus(tag_name: &str, input_type: Option<&str>, content_editable: bool) -> FocusTarget {
    if content_editable {
        return FocusTarget::TextEntry;
    }

    match tag_name.to_ascii_lowercase().as_str() {
        "textarea" => FocusTarget::TextEntry,
        // A missing type attribute means type="text"
        "input" => {
            let input_type = input_type.unwrap_or("text").to_ascii_lowercase();
            if TEXT_INPUT_TYPES.contains(&input_type.as_str()) {
                FocusTarget::TextEntry
            } else {
                FocusTarget::Other
            }
        }
        "body" | "html" => FocusTarget::Nothing,
        _ => FocusTarget::Other,
    }
}

/// Inspect `document.activeElement`
#[cfg(target_family = "wasm")]
pub fn current_focus() -> FocusTarget {
    use wasm_bindgen::JsCast;

    let Some(element) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
    else {
        return FocusTarget::Nothing;
    };

    let editable = element
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|html| html.is_content_editable())
        .unwrap_or(false);
    let input_type = element.get_attribute("type");

    classify_focus(&element.tag_name(), input_type.as_deref(), editable)
}

#[cfg(not(target_family = "wasm"))]
pub fn current_focus() -> FocusTarget {
    FocusTarget::Nothing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_textarea_is_text_entry() {
        assert_eq!(classify_focus("TEXTAREA", None, false), FocusTarget::TextEntry);
    }

    #[test]
    fn test_input_types() {
        assert_eq!(classify_focus("INPUT", None, false), FocusTarget::TextEntry);
        assert_eq!(classify_focus("INPUT", Some("Email"), false), FocusTarget::TextEntry);
        assert_eq!(classify_focus("INPUT", Some("checkbox"), false), FocusTarget::Other);
        assert_eq!(classify_focus("INPUT", Some("submit"), false), FocusTarget::Other);
    }

    #[test]
    fn test_content_editable() {
        assert_eq!(classify_focus("DIV", None, true), FocusTarget::TextEntry);
    }

    #[test]
    fn test_body_and_buttons() {
        assert_eq!(classify_focus("BODY", None, false), FocusTarget::Nothing);
        assert_eq!(classify_focus("BUTTON", None, false), FocusTarget::Other);
        assert_eq!(classify_focus("A", None, false), FocusTarget::Other);
    }
}

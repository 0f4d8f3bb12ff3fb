//! Markup helpers for modal and notification content
//!
//! Headers and bodies may carry inline markup (bold names, warning icons,
//! help links). Everything passes through ammonia before it reaches
//! `dangerous_inner_html`.

/// Sanitize HTML using ammonia
/// Allows inline formatting, paragraphs, images and links
pub fn sanitize_html(html: &str) -> String {
    use ammonia::Builder;
    use maplit::{hashmap, hashset};

    Builder::default()
        .tags(hashset![
            "p", "br",
            "strong", "em", "b", "i", "u",
            "a",
            "img",
            "div", "span",
        ])
        // "rel" is left out of "a" because link_rel() sets it
        .tag_attributes(hashmap![
            "a" => hashset!["href", "title", "target"],
            "img" => hashset!["src", "alt", "title", "width", "height"],
            "p" => hashset!["class"],
            "i" => hashset!["class"],
            "div" => hashset!["class"],
            "span" => hashset!["class"],
        ])
        .url_schemes(hashset!["http", "https", "mailto"])
        .link_rel(Some("noopener noreferrer"))
        .clean(html)
        .to_string()
}

/// Plain-text rendition for logs and accessibility labels
pub fn strip_tags(html: &str) -> String {
    ammonia::Builder::empty()
        .clean(html)
        .to_string()
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
}

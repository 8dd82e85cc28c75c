//! Markdown rendering for schema descriptions

use pulldown_cmark::{html, Event, Options, Parser, Tag, TagEnd};

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options
}

/// Render markdown to block-level HTML.
pub fn render_markdown(input: &str) -> String {
    let parser = Parser::new_ext(input, options());
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Render markdown for inline slots (helper text, label hints).
///
/// Paragraph wrappers are dropped but their content is kept, so the result
/// can sit inside a `span`.
pub fn render_inline_markdown(input: &str) -> String {
    let parser = Parser::new_ext(input, options()).filter(|event| {
        !matches!(
            event,
            Event::Start(Tag::Paragraph) | Event::End(TagEnd::Paragraph)
        )
    });
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output.trim().to_string()
}

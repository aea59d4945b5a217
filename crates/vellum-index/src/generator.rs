//! Docs index module generator.
//!
//! Renders the sorted index as a JavaScript ES module so the site can load
//! it without a parse step at runtime.

use vellum_md::DocDescriptor;

/// Render the docs index as the text of a JavaScript module.
///
/// Emits a named `docsIndex` array of entry objects followed by a default
/// export of the same array. Zero entries produce an empty array, not an
/// error.
pub fn render_index_module(entries: &[DocDescriptor]) -> String {
    let mut out = String::new();

    out.push_str("// Generated by vellum. Do not edit by hand.\n\n");
    out.push_str("export const docsIndex = [\n");

    for entry in entries {
        render_entry(&mut out, entry);
    }

    out.push_str("];\n\nexport default docsIndex;\n");
    out
}

fn render_entry(out: &mut String, entry: &DocDescriptor) {
    let tags = entry
        .tags
        .iter()
        .map(|tag| format!("'{}'", escape_string(tag)))
        .collect::<Vec<_>>()
        .join(", ");

    out.push_str(&format!(
        "  {{\n    title: '{}',\n    route: '{}',\n    description: '{}',\n    section: '{}',\n    group: '{}',\n    order: {},\n    navLabel: '{}',\n    tags: [{}],\n  }},\n",
        escape_string(&entry.title),
        escape_string(&entry.route),
        escape_string(&entry.description),
        escape_string(&entry.section),
        escape_string(&entry.group),
        entry.order,
        escape_string(&entry.nav_label),
        tags,
    ));
}

/// Escape a string for a single-quoted JavaScript literal.
///
/// Descriptor fields are single-line plain text, so only backslashes and
/// single quotes need escaping.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(title: &str, route: &str) -> DocDescriptor {
        DocDescriptor {
            title: title.to_string(),
            route: route.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn escape_string_works() {
        assert_eq!(escape_string("hello"), "hello");
        assert_eq!(escape_string("it's"), "it\\'s");
        assert_eq!(escape_string("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn renders_empty_module() {
        let module = render_index_module(&[]);

        assert!(module.starts_with("// Generated by vellum."));
        assert!(module.contains("export const docsIndex = [\n];"));
        assert!(module.ends_with("export default docsIndex;\n"));
    }

    #[test]
    fn renders_entry_fields() {
        let entry = DocDescriptor {
            title: "Button".to_string(),
            route: "/components/button".to_string(),
            description: "A clickable button".to_string(),
            section: "Components".to_string(),
            group: "Actions".to_string(),
            order: 2,
            nav_label: "Button".to_string(),
            tags: vec!["button".to_string(), "action".to_string()],
        };

        let module = render_index_module(&[entry]);

        assert!(module.contains("title: 'Button',"));
        assert!(module.contains("route: '/components/button',"));
        assert!(module.contains("order: 2,"));
        assert!(module.contains("tags: ['button', 'action'],"));
    }

    #[test]
    fn escapes_quotes_in_titles() {
        let entry = DocDescriptor {
            title: "It's Here".to_string(),
            ..descriptor("placeholder", "/x")
        };

        let module = render_index_module(&[entry]);

        assert!(module.contains(r"title: 'It\'s Here',"));
    }
}

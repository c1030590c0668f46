//! Placeholder substitution

/// Replace each `{name}` placeholder with its value.
///
/// Substitution is literal and happens in a single left-to-right pass over
/// the template. Inserted values are never rescanned, so a prompt that
/// contains `{context}` reaches the model as written. Unknown placeholders
/// are left untouched.
///
/// # Examples
///
/// ```
/// use flows_domain::render_template;
///
/// let prompt = render_template("Solve: {prompt}", &[("prompt", "2 + 2")]);
/// assert_eq!(prompt, "Solve: 2 + 2");
/// ```
pub fn render_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substitution = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (close, *value))
        });

        match substitution {
            Some((close, value)) => {
                rendered.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                rendered.push('{');
                rest = after;
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

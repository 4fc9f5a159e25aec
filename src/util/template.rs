/// Substitutes `{key}` placeholders in a single pass.
///
/// Unknown placeholders and unmatched braces are kept verbatim, and substituted
/// values are never scanned again, so user-provided text containing braces is
/// inserted as-is.
///
/// # Arguments
/// - `pattern` - Text containing `{key}` placeholders
/// - `values` - Key/value pairs to substitute
///
/// # Returns
/// - `String` - The rendered text
pub fn render(pattern: &str, values: &[(&str, &str)]) -> String {
    let mut rendered = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            rendered.push_str(&rest[open..]);
            return rendered;
        };

        let key = &after[..close];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => rendered.push_str(value),
            None => {
                rendered.push('{');
                rendered.push_str(key);
                rendered.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    rendered.push_str(rest);
    rendered
}

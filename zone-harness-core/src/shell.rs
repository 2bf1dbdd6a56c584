//! Command-line argument tokenization.

/// Splits a command line on single spaces, keeping quoted spans intact.
///
/// A fragment beginning with `'` or `"` opens a quoted span: subsequent
/// fragments are accumulated (joined by one space) until a fragment ends with
/// the same quote character. The quote characters themselves are stripped.
/// There is no escaping of embedded quotes.
///
/// Edge behavior, kept deliberately simple:
/// - consecutive spaces yield empty arguments;
/// - an unterminated quoted span silently consumes the remainder of the
///   input into one final token;
/// - a single fragment that opens and closes a quote (`'abc'`) counts as
///   unterminated: only the opening quote is stripped, since the closing
///   check applies to the fragments that follow the opener.
#[must_use]
pub fn split_args(command: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut quote: Option<char> = None;
    let mut block: Vec<&str> = Vec::new();

    for fragment in command.split(' ') {
        match quote {
            None => {
                if let Some(q) = fragment.chars().next().filter(|c| *c == '\'' || *c == '"') {
                    quote = Some(q);
                    block.push(&fragment[1..]);
                } else {
                    result.push(fragment.to_string());
                }
            }
            Some(q) => {
                if fragment.ends_with(q) {
                    block.push(&fragment[..fragment.len() - 1]);
                    result.push(block.join(" "));
                    block.clear();
                    quote = None;
                } else {
                    block.push(fragment);
                }
            }
        }
    }

    // Unterminated quote: emit whatever accumulated as one token.
    if quote.is_some() {
        result.push(block.join(" "));
    }

    result
}

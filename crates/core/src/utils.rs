/// Splits a command payload into whitespace separated tokens.
///
/// A token wrapped in double quotes may contain spaces; the quotes are
/// stripped. An unterminated quote runs to the end of the input.
pub fn split_message(input: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        if let Some(quoted) = rest.strip_prefix('"') {
            match quoted.find('"') {
                Some(end) => {
                    parts.push(&quoted[..end]);
                    rest = quoted[end + 1..].trim_start();
                }
                None => {
                    parts.push(quoted);
                    rest = "";
                }
            }
            continue;
        }

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        parts.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }

    parts
}

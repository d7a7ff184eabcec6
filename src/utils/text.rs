//! Text preprocessing helpers.

/// Removes every whitespace character from `source`, keeping the relative
/// order of the remaining characters.
///
/// Whitespace follows [`char::is_whitespace`], which covers the ASCII set
/// (space, tab, line feed, vertical tab, form feed, carriage return) as
/// well as Unicode spaces.
pub fn strip_whitespace(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ascii_whitespace() {
        assert_eq!(
            strip_whitespace(" the\tanswer\nis\x0b4\x0c2\r "),
            "theansweris42"
        );
    }

    #[test]
    fn test_strip_keeps_punctuation() {
        assert_eq!(strip_whitespace("wctf{C01umnar},if u"), "wctf{C01umnar},ifu");
    }

    #[test]
    fn test_strip_empty_and_blank() {
        assert_eq!(strip_whitespace(""), "");
        assert_eq!(strip_whitespace(" \t\n"), "");
    }
}

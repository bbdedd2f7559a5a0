use std::borrow::Cow;

use tracing::warn;

/// Quotes `text` so a POSIX shell reads it back as one word.
///
/// Returns `None` for text no shell word can hold (an embedded NUL byte).
#[must_use]
pub fn quote(text: &str) -> Option<Cow<'_, str>> {
    match shlex::try_quote(text) {
        Ok(quoted) => Some(quoted),
        Err(error) => {
            warn!(%error, ?text, "dropping text that cannot be shell-quoted");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("plain")]
    #[case("Pick a file")]
    #[case("it's")]
    #[case("bat --color=always {}")]
    #[case("$(rm -rf ~)")]
    fn quote_is_one_word(#[case] text: &str) {
        let quoted = quote(text).unwrap();
        assert_eq!(shlex::split(&quoted).unwrap(), vec![text.to_owned()]);
    }

    #[test]
    fn quote_rejects_nul() {
        assert!(quote("a\0b").is_none());
    }
}

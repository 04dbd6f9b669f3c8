//! Line-break to sentence-break rewriting.
//!
//! Text extraction loses sentence boundaries wherever a block ends without
//! punctuation. Forcing a period before each line break gives sentence
//! splitters downstream something to cut on.

use std::borrow::Cow;

/// Make every line break (`\n` or `\r\n`) immediately follow a `.`.
///
/// Breaks that already follow a period are left alone, so the rewrite is
/// idempotent. No character other than the inserted periods changes.
#[must_use]
pub fn force_periods(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    for ch in text.chars() {
        if ch == '\n' {
            let crlf = out.ends_with('\r');
            if crlf {
                out.pop();
            }
            if !out.ends_with('.') {
                out.push('.');
            }
            if crlf {
                out.push('\r');
            }
        }
        out.push(ch);
    }
    out
}

/// Apply [`force_periods`] when `force_period` is set.
#[must_use]
pub fn normalize(text: &str, force_period: bool) -> Cow<'_, str> {
    if force_period && text.contains('\n') {
        Cow::Owned(force_periods(text))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn periods_are_inserted_before_breaks() {
        assert_eq!(force_periods("a\nb\n"), "a.\nb.\n");
        assert_eq!(force_periods("\n\n"), ".\n.\n");
    }

    #[test]
    fn existing_periods_are_kept_single() {
        assert_eq!(force_periods("done.\nnext\n"), "done.\nnext.\n");
    }

    #[test]
    fn crlf_is_one_break() {
        assert_eq!(force_periods("a\r\nb"), "a.\r\nb");
    }

    #[test]
    fn idempotent() {
        let once = force_periods("x\ny\r\n\nz");
        assert_eq!(force_periods(&once), once);
    }

    #[test]
    fn normalize_borrows_when_nothing_to_do() {
        assert!(matches!(normalize("a\nb", false), Cow::Borrowed(_)));
        assert!(matches!(normalize("ab", true), Cow::Borrowed(_)));
        assert_eq!(normalize("a\nb", true), "a.\nb");
    }
}

//! The fixed text transformation: uppercase, number every line, wrap in a
//! banner.

/// Prepended to every transformed document, including the trailing blank line.
pub const HEADER: &str = "==================================================\n\
MODIFIED FILE CONTENT\n\
==================================================\n\n";

/// Appended to every transformed document. No trailing newline.
pub const FOOTER: &str = "\n\n==================================================\n\
END OF MODIFIED CONTENT\n\
==================================================";

/// Uppercases `text`, prefixes each `\n`-separated line with `"<n>. "` and
/// wraps the result in [`HEADER`] and [`FOOTER`].
///
/// Only `\n` separates lines, so a `\r` from CRLF input stays at the end of
/// its line. `N` separators always give `N + 1` numbered lines, which makes
/// empty input a single `"1. "` line.
pub fn modify_content(text: &str) -> String {
    let upper = text.to_uppercase();

    let numbered = upper
        .split('\n')
        .enumerate()
        .map(|(index, line)| format!("{}. {}", index + 1, line))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}{}{}", HEADER, numbered, FOOTER)
}

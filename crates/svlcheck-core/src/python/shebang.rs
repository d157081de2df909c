/// Interpreter-directive marker at the start of a file.
pub const SHEBANG_MARKER: &str = "#!";

/// Return the first line of `source` if it is a shebang line.
///
/// The line terminator is not included; a trailing `\r` from CRLF files
/// is dropped so the line compares equal across platforms.
pub fn shebang_line(source: &str) -> Option<&str> {
    if !source.starts_with(SHEBANG_MARKER) {
        return None;
    }
    let line = source.split('\n').next().unwrap_or(source);
    Some(line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_shebang_on_first_line() {
        assert_eq!(
            shebang_line("#!/usr/bin/env python3\nimport os\n"),
            Some("#!/usr/bin/env python3")
        );
    }

    #[test]
    fn shebang_without_trailing_newline() {
        assert_eq!(shebang_line("#!/usr/bin/python"), Some("#!/usr/bin/python"));
    }

    #[test]
    fn strips_carriage_return() {
        assert_eq!(
            shebang_line("#!/usr/bin/env python3\r\npass\r\n"),
            Some("#!/usr/bin/env python3")
        );
    }

    #[test]
    fn ignores_shebang_after_first_line() {
        assert_eq!(shebang_line("\n#!/usr/bin/env python3\n"), None);
        assert_eq!(shebang_line(" #!/usr/bin/env python3\n"), None);
        assert_eq!(shebang_line("# comment\n"), None);
        assert_eq!(shebang_line(""), None);
    }
}

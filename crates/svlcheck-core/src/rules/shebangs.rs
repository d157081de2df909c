use regex::Regex;

/// Shebang line recognised when the caller supplies nothing else.
pub const DEFAULT_SHEBANG: &str = "#!/usr/bin/env python3";

/// The set of interpreter lines accepted as valid shebangs.
///
/// Exact lines are compared without the line terminator. Patterns must
/// match the entire line.
#[derive(Debug, Clone)]
pub struct KnownShebangs {
    lines: Vec<String>,
    patterns: Vec<Regex>,
}

impl Default for KnownShebangs {
    fn default() -> Self {
        Self {
            lines: vec![DEFAULT_SHEBANG.to_string()],
            patterns: Vec::new(),
        }
    }
}

impl KnownShebangs {
    /// A set that recognises nothing.
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            patterns: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.add_line(line);
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        if !self.lines.contains(&line) {
            self.lines.push(line);
        }
    }

    /// Add a pattern, anchored so that it has to match the whole line.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<(), regex::Error> {
        self.patterns.push(Regex::new(&format!("^(?:{pattern})$"))?);
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_known(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l == line) || self.patterns.iter().any(|p| p.is_match(line))
    }
}

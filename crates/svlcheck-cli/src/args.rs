use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use svlcheck_core::exec::ExecBitSource;

#[derive(Debug, Parser)]
#[command(
    name = "svlcheck",
    version,
    about = "Check Python scripts vs. libraries"
)]
pub struct Args {
    /// Files or directories to check (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Be verbose: show every result, including INFO
    #[arg(short, long)]
    pub verbose: bool,

    /// Show notices and include them in the issue count
    #[arg(short, long)]
    pub notice: bool,

    /// Take the exec bit from git instead of the filesystem
    #[arg(
        short = 'g',
        long = "win-git",
        short_alias = 'w',
        conflicts_with = "exec_bit"
    )]
    pub win_git: bool,

    /// Where the exec bit is read from
    #[arg(long, value_enum, default_value = "filesystem")]
    pub exec_bit: ExecBitArg,

    /// Additional recognized shebang line (repeatable, taken verbatim)
    #[arg(short = 's', long = "shebang", value_name = "LINE")]
    pub shebangs: Vec<String>,

    /// Comma-separated list of additional recognized shebang lines
    #[arg(
        long = "shebang-list",
        value_name = "LINES",
        env = "SVLCHECK_SHEBANGS",
        value_delimiter = ','
    )]
    pub shebang_list: Vec<String>,

    /// Additional recognized shebang pattern, matched against the whole line
    #[arg(long = "shebang-regex", value_name = "PATTERN")]
    pub shebang_patterns: Vec<String>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

impl Args {
    /// Extra recognized shebang lines from `--shebang` and `--shebang-list`.
    pub fn shebang_lines(&self) -> impl Iterator<Item = &str> {
        self.shebangs
            .iter()
            .chain(&self.shebang_list)
            .map(String::as_str)
            .filter(|line| !line.is_empty())
    }

    pub fn exec_bit_source(&self) -> ExecBitSource {
        if self.win_git {
            return ExecBitSource::Git;
        }
        match self.exec_bit {
            ExecBitArg::Filesystem => ExecBitSource::Filesystem,
            ExecBitArg::Git => ExecBitSource::Git,
            ExecBitArg::Ignore => ExecBitSource::Ignore,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExecBitArg {
    Filesystem,
    Git,
    Ignore,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("svlcheck").chain(argv.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn defaults() {
        let args = parse(&[]);
        assert!(args.paths.is_empty());
        assert!(!args.verbose);
        assert!(!args.notice);
        assert_eq!(args.exec_bit_source(), ExecBitSource::Filesystem);
        assert!(matches!(args.format, OutputFormat::Text));
    }

    #[test]
    fn git_flag_aliases() {
        for flag in ["-g", "-w", "--win-git"] {
            assert_eq!(parse(&[flag]).exec_bit_source(), ExecBitSource::Git, "{flag}");
        }
    }

    #[test]
    fn exec_bit_source_values() {
        assert_eq!(
            parse(&["--exec-bit", "ignore"]).exec_bit_source(),
            ExecBitSource::Ignore
        );
        assert_eq!(
            parse(&["--exec-bit", "git"]).exec_bit_source(),
            ExecBitSource::Git
        );
    }

    #[test]
    fn repeated_shebangs_accumulate() {
        let args = parse(&["-s", "#!/usr/bin/python3", "--shebang", "#!/opt/py/bin/python"]);
        assert_eq!(args.shebangs, vec!["#!/usr/bin/python3", "#!/opt/py/bin/python"]);
    }

    #[test]
    fn shebang_with_comma_stays_one_line() {
        let line = "#!/usr/bin/env -S python3 -W ignore,default";
        let args = parse(&["-s", line]);
        assert_eq!(args.shebangs, vec![line]);
        assert_eq!(args.shebang_lines().collect::<Vec<_>>(), vec![line]);
    }

    #[test]
    fn shebang_list_splits_on_commas() {
        let args = parse(&[
            "--shebang-list",
            "#!/opt/bin/python,#!/usr/bin/python",
            "-s",
            "#!/usr/bin/python3",
        ]);
        assert_eq!(
            args.shebang_lines().collect::<Vec<_>>(),
            vec!["#!/usr/bin/python3", "#!/opt/bin/python", "#!/usr/bin/python"]
        );
    }

    #[test]
    fn short_flags_combine() {
        let args = parse(&["-vn", "src", "tools"]);
        assert!(args.verbose);
        assert!(args.notice);
        assert_eq!(args.paths, vec![PathBuf::from("src"), PathBuf::from("tools")]);
    }
}

//! CLI command definitions

use clap::Parser;
use clap::error::ErrorKind;
use launcher_domain::{OutputFormat, PathSources};
use std::path::PathBuf;

/// CLI arguments for forensic-launcher
#[derive(Parser, Debug)]
#[command(name = "forensic-launcher")]
#[command(author, version, about = "Run forensic inspection tools over a set of files")]
#[command(long_about = r#"
Forensic Launcher runs one inspection tool (exiftool, xxd, strings, ...)
over every file in a target set and collects the results into one report.

Targets come from positional paths, a directory (-d, one level deep) and a
list file (-L, one path per line, '#' starts a comment). Arguments for the
tool go after '--' and are checked against a denylist of shell
metacharacters before anything runs. A tool flag given before '--' is read
as a launcher flag and rejected, never passed through.

Configuration files are loaded from (in priority order):
1. FORENSIC_LAUNCHER_* environment variables
2. --config <path>       Explicit config file
3. ./launcher.toml       Project-level config
4. ~/.config/forensic-launcher/config.toml   Global config

Example:
  forensic-launcher -t exiftool photo.jpg -- -gps:all -n
  forensic-launcher -t xxd -d ./evidence --json -o report.json -- -c 32
  forensic-launcher -t strings -L targets.txt --jobs 4 -- -n 8
  forensic-launcher --list-tools
"#)]
pub struct Cli {
    /// Files to inspect
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Tool to run (see --list-tools)
    #[arg(short, long, value_name = "KEY")]
    pub tool: Option<String>,

    /// Inspect every regular file directly inside this directory
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<String>,

    /// Read target paths from this file, one per line
    #[arg(short = 'L', long, value_name = "FILE")]
    pub list: Option<String>,

    /// Render the report as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of files processed at once
    #[arg(long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Never try to install a missing tool
    #[arg(long)]
    pub no_install: bool,

    /// List known tools with a short help excerpt and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Show full help and usage examples for every tool and exit
    #[arg(long)]
    pub tool_help: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append audit events (JSONL) to this file
    #[arg(long, value_name = "PATH")]
    pub audit_log: Option<PathBuf>,

    /// Arguments passed to the tool, placed before each file path
    #[arg(last = true, value_name = "TOOL_ARGS", allow_hyphen_values = true)]
    pub tool_args: Vec<String>,
}

impl Cli {
    /// Target sources gathered from positional paths, `--dir` and `--list`.
    pub fn path_sources(&self) -> PathSources {
        let mut sources = PathSources::new().with_paths(self.paths.clone());
        if let Some(dir) = &self.dir {
            sources = sources.with_directory(dir.clone());
        }
        if let Some(list) = &self.list {
            sources = sources.with_list_file(list.clone());
        }
        sources
    }

    /// `--json` wins over the configured format.
    pub fn output_format(&self, configured: Option<OutputFormat>) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            configured.unwrap_or_default()
        }
    }

    /// Extra line for parse errors caused by a tool flag placed before `--`.
    pub fn argument_hint(err: &clap::Error) -> Option<String> {
        (err.kind() == ErrorKind::UnknownArgument).then(|| {
            "hint: arguments for the tool go after '--', e.g. \
             forensic-launcher -t exiftool photo.jpg -- -gps:all -n"
                .to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("forensic-launcher").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_tool_args_after_separator() {
        let cli = parse(&["-t", "xxd", "a.bin", "b.bin", "--", "-c", "32", "-p"]);
        assert_eq!(cli.tool.as_deref(), Some("xxd"));
        assert_eq!(cli.paths, vec!["a.bin", "b.bin"]);
        assert_eq!(cli.tool_args, vec!["-c", "32", "-p"]);
    }

    #[test]
    fn test_tool_args_are_not_launcher_flags() {
        let cli = parse(&["-t", "exiftool", "x.jpg", "--", "-j", "--json"]);
        assert!(!cli.json);
        assert_eq!(cli.tool_args, vec!["-j", "--json"]);
    }

    #[test]
    fn test_path_sources() {
        let cli = parse(&["-t", "file", "a", "-d", "dir", "-L", "list.txt"]);
        let sources = cli.path_sources();
        assert_eq!(sources.explicit, vec!["a"]);
        assert_eq!(sources.directory.as_deref(), Some("dir"));
        assert_eq!(sources.list_file.as_deref(), Some("list.txt"));
    }

    #[test]
    fn test_no_sources() {
        assert!(parse(&["-t", "file"]).path_sources().is_empty());
    }

    #[test]
    fn test_output_format_precedence() {
        let cli = parse(&["-t", "file", "a"]);
        assert_eq!(cli.output_format(None), OutputFormat::Text);
        assert_eq!(cli.output_format(Some(OutputFormat::Json)), OutputFormat::Json);

        let cli = parse(&["-t", "file", "-j", "a"]);
        assert_eq!(cli.output_format(Some(OutputFormat::Text)), OutputFormat::Json);
    }

    #[test]
    fn test_verbosity_and_flags() {
        let cli = parse(&["-vv", "--no-install", "--jobs", "4", "--list-tools"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_install);
        assert_eq!(cli.jobs, Some(4));
        assert!(cli.list_tools);
        assert!(cli.tool.is_none());
    }

    #[test]
    fn test_tool_flag_before_separator_gets_hint() {
        let err =
            Cli::try_parse_from(["forensic-launcher", "-t", "exiftool", "-gps:all", "photo.jpg"])
                .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);

        let hint = Cli::argument_hint(&err).unwrap();
        assert!(hint.contains("after '--'"));
    }

    #[test]
    fn test_other_parse_errors_get_no_hint() {
        let err = Cli::try_parse_from(["forensic-launcher", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(Cli::argument_hint(&err).is_none());

        let err = Cli::try_parse_from(["forensic-launcher", "--jobs", "many"]).unwrap_err();
        assert!(Cli::argument_hint(&err).is_none());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

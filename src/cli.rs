use clap::Parser;
use std::path::PathBuf;

use crate::classify::DEFAULT_TEST_PATTERN;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cmaketree",
    version,
    about = "Regenerate nested CMake source-list variables from the filesystem",
    after_help = "Examples:\n  cmaketree\n  cmaketree path/to/project -e cpp -e cc\n  cmaketree --stdout -I 'third_party'"
)]
pub struct Args {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output file, resolved against the scanned directory if relative
    #[arg(short = 'o', long = "output", default_value = "auto_generated_file_list.cmake")]
    pub output: PathBuf,

    /// Print the generated document instead of writing the output file
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Source-file extensions to collect (repeatable)
    #[arg(short = 'e', long = "extension", default_value = "cpp", action = clap::ArgAction::Append)]
    pub extensions: Vec<String>,

    /// Glob patterns to exclude (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Scan hidden directories and files (dotfiles)
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// Follow symbolic links
    #[arg(short = 'f', long = "follow-symlinks")]
    pub follow_symlinks: bool,

    /// Regex marking a file as a test source
    #[arg(long = "test-pattern", default_value = DEFAULT_TEST_PATTERN)]
    pub test_pattern: String,

    /// Increase verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all progress output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        self
    }
}

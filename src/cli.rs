use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fastunzip")]
#[command(version)]
#[command(about = "Extract ZIP archives with overwrite and password control", long_about = None)]
#[command(after_help = "Examples:\n  \
  fastunzip data1.zip                  extract into the current directory\n  \
  fastunzip data1.zip -d out           extract into out/\n  \
  fastunzip -o -P secret locked.zip    overwrite, decrypting with 'secret'\n  \
  fastunzip -lv archive.zip            list contents verbosely")]
pub struct Cli {
    /// ZIP file path
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Extract files into exdir
    #[arg(short = 'd', value_name = "DIR")]
    pub extract_dir: Option<PathBuf>,

    /// List files instead of extracting
    #[arg(short = 'l')]
    pub list: bool,

    /// List verbosely
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Overwrite existing files WITHOUT prompting
    #[arg(short = 'o')]
    pub overwrite: bool,

    /// Password for encrypted entries
    #[arg(short = 'P', value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }
}

//! CLI argument parsing with clap.

use clap::Parser;

/// Proverb generator - splice your word into Russian folk wisdom.
///
/// With a WORD (or `--open`), runs once and exits. Without one, starts an
/// interactive session reading words from stdin.
#[derive(Parser, Debug)]
#[command(name = "proverbs", version, about)]
pub struct Cli {
    /// Word to splice into a random proverb.
    pub word: Option<String>,

    /// Display the proverb carried by a share link instead of generating one.
    #[arg(long, value_name = "URL", conflicts_with = "word")]
    pub open: Option<String>,

    /// Copy a share link for the proverb to the clipboard.
    #[arg(short, long)]
    pub share: bool,

    /// Request an illustration from the image service.
    #[arg(short, long)]
    pub image: bool,

    /// Save the illustration (implies --image); defaults to `proverb.png`.
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = crate::download::DEFAULT_DOWNLOAD_NAME
    )]
    pub download: Option<String>,

    /// Seed for template selection, for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether to run once instead of starting an interactive session.
    #[must_use]
    pub fn is_one_shot(&self) -> bool {
        self.word.is_some() || self.open.is_some()
    }

    /// Whether an image has to be requested.
    #[must_use]
    pub fn wants_image(&self) -> bool {
        self.image || self.download.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_word() {
        let cli = Cli::parse_from(["proverbs", "решишь"]);
        assert_eq!(cli.word.as_deref(), Some("решишь"));
        assert!(cli.is_one_shot());
        assert!(!cli.wants_image());
    }

    #[test]
    fn no_word_is_interactive() {
        let cli = Cli::parse_from(["proverbs"]);
        assert!(!cli.is_one_shot());
        assert!(!cli.share);
        assert!(!cli.verbose);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn download_defaults_to_proverb_png() {
        let cli = Cli::parse_from(["proverbs", "кот", "--download"]);
        assert_eq!(cli.download.as_deref(), Some("proverb.png"));
        assert!(cli.wants_image());
    }

    #[test]
    fn download_with_path() {
        let cli = Cli::parse_from(["proverbs", "-d", "out.png", "кот"]);
        assert_eq!(cli.download.as_deref(), Some("out.png"));
        assert_eq!(cli.word.as_deref(), Some("кот"));
    }

    #[test]
    fn all_options() {
        let cli = Cli::parse_from([
            "proverbs",
            "-s",
            "-i",
            "--seed",
            "7",
            "--config",
            "c.toml",
            "-v",
            "пирог",
        ]);
        assert!(cli.share);
        assert!(cli.image);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.config.as_deref(), Some("c.toml"));
        assert!(cli.verbose);
    }

    #[test]
    fn open_conflicts_with_word() {
        assert!(Cli::try_parse_from(["proverbs", "--open", "https://x/?p=a", "кот"]).is_err());
        let cli = Cli::parse_from(["proverbs", "--open", "https://x/?p=a"]);
        assert!(cli.is_one_shot());
    }
}

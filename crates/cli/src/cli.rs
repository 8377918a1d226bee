use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tagbot", about = "Keyword tags for webpages", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a webpage and print its tags
    Url {
        /// Link to the page; `https://` is assumed when no scheme is given
        url: String,
    },

    /// Print tags for a saved HTML file
    File {
        /// Path to the HTML file
        path: PathBuf,
    },

    /// Print tags for title and body text given directly
    Text {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short, long, default_value = "")]
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url() {
        let cli = Cli::try_parse_from(["tagbot", "url", "https://example.com"]).unwrap();
        assert!(matches!(cli.command, Commands::Url { url } if url == "https://example.com"));
    }

    #[test]
    fn test_parse_file() {
        let cli = Cli::try_parse_from(["tagbot", "file", "page.html"]).unwrap();
        assert!(matches!(cli.command, Commands::File { path } if path == PathBuf::from("page.html")));
    }

    #[test]
    fn test_parse_text_defaults() {
        let cli = Cli::try_parse_from(["tagbot", "text", "--title", "Rust"]).unwrap();
        match cli.command {
            Commands::Text { title, body } => {
                assert_eq!(title, "Rust");
                assert_eq!(body, "");
            }
            _ => panic!("expected text command"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["tagbot"]).is_err());
    }
}

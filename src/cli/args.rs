use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fy")]
#[command(about = "Cached command-line translator")]
#[command(version)]
pub struct Args {
    /// Text to translate (multiple arguments are joined without separators)
    pub text: Vec<String>,

    /// Translate into English instead of Chinese
    #[arg(short = 'c')]
    pub into_english: bool,
}

impl Args {
    /// Concatenates the text arguments without separators.
    pub fn content(&self) -> String {
        self.text.concat()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_and_flag() {
        let args = Args::try_parse_from(["fy", "-c", "你好", "世界"]).unwrap();

        assert!(args.into_english);
        assert_eq!(args.content(), "你好世界");
    }

    #[test]
    fn test_parse_defaults_to_chinese() {
        let args = Args::try_parse_from(["fy", "hello"]).unwrap();

        assert!(!args.into_english);
        assert_eq!(args.content(), "hello");
    }

    #[test]
    fn test_parse_without_text() {
        let args = Args::try_parse_from(["fy"]).unwrap();

        assert!(args.text.is_empty());
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::AltTextResult;

static EXTENSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^/.]+$").unwrap());

const SHORT_MAX_WORDS: usize = 8;

/// Derives alt text from a filename alone. Pure and infallible.
///
/// An empty filename yields `" image."` for the SEO variant; callers that want
/// something nicer pass a default name instead.
pub fn placeholder_alt_text(filename: &str) -> AltTextResult {
    let stem = EXTENSION_RE.replace(filename, "");
    let name = stem.replace(['-', '_'], " ");
    let words: Vec<&str> = name.split_whitespace().collect();
    let joined = words.join(" ");

    let accessible = if joined.is_empty() {
        "An image showing content.".to_string()
    } else {
        format!("An image showing {joined}.")
    };

    let short = if words.is_empty() {
        "Image".to_string()
    } else {
        words[..words.len().min(SHORT_MAX_WORDS)].join(" ")
    };

    AltTextResult {
        accessible,
        short,
        seo: format!("{joined} image."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_filename() {
        let result = placeholder_alt_text("sunset-beach.jpg");
        assert_eq!(result.accessible, "An image showing sunset beach.");
        assert_eq!(result.short, "sunset beach");
        assert_eq!(result.seo, "sunset beach image.");
    }

    #[test]
    fn empty_filename_keeps_leading_space_in_seo() {
        let result = placeholder_alt_text("");
        assert_eq!(result.accessible, "An image showing content.");
        assert_eq!(result.short, "Image");
        assert_eq!(result.seo, " image.");
    }

    #[test]
    fn short_is_capped_at_eight_words() {
        let result = placeholder_alt_text("one_two-three four five six seven eight nine ten.png");
        assert_eq!(result.short, "one two three four five six seven eight");
        assert_eq!(
            result.seo,
            "one two three four five six seven eight nine ten image."
        );
    }

    #[test]
    fn only_the_last_extension_is_stripped() {
        let result = placeholder_alt_text("archive.tar.gz");
        assert_eq!(result.short, "archive.tar");
    }

    #[test]
    fn collapses_repeated_separators() {
        let result = placeholder_alt_text("__red--car  __.webp");
        assert_eq!(result.short, "red car");
        assert_eq!(result.accessible, "An image showing red car.");
    }

    #[test]
    fn same_input_same_output() {
        assert_eq!(
            placeholder_alt_text("IMG_2041.HEIC"),
            placeholder_alt_text("IMG_2041.HEIC")
        );
    }
}

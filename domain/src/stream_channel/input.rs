use domain_shared::stream_channel::PlatformId;
use tracing::instrument;

pub const FORBIDDEN_CHARACTERS: [char; 8] = ['\'', '"', '<', '>', '&', ';', '/', '|'];

const CHANNEL_LINK_NOISE: [&str; 4] = ["www.", "https://", "http://", " "];

#[instrument(level = "trace")]
pub fn contains_forbidden_characters(input: &str) -> bool {
    input.chars().any(|c| FORBIDDEN_CHARACTERS.contains(&c))
}

/// Drops control characters and [`FORBIDDEN_CHARACTERS`], then trims surrounding whitespace.
#[instrument(level = "trace")]
pub fn sanitize_input(input: &str) -> String {
    let stripped: String = input
        .chars()
        .filter(|c| !c.is_control() && !FORBIDDEN_CHARACTERS.contains(c))
        .collect();

    stripped.trim().to_string()
}

/// Removes `www.`, `https://`, `http://` and spaces, ignoring ASCII case.
///
/// Each fragment is removed over the whole link before the next one is looked for,
/// so fragments that only appear after an earlier removal are kept.
#[instrument(level = "trace")]
pub fn normalize_channel_link(link: &str) -> String {
    CHANNEL_LINK_NOISE
        .iter()
        .fold(link.to_string(), |link, noise| {
            remove_ignore_ascii_case(&link, noise)
        })
}

/// Parses a platform identifier written as a decimal integer with an optional sign.
///
/// Fractions and exponents are not identifiers and are rejected.
#[instrument(level = "trace")]
pub fn parse_platform(platform: &str) -> Option<PlatformId> {
    platform.trim().parse().ok().map(PlatformId)
}

fn remove_ignore_ascii_case(haystack: &str, needle: &str) -> String {
    let needle = needle.as_bytes();
    let mut result = String::with_capacity(haystack.len());
    let mut rest = haystack;

    while let Some(c) = rest.chars().next() {
        let bytes = rest.as_bytes();
        if bytes.len() >= needle.len() && bytes[..needle.len()].eq_ignore_ascii_case(needle) {
            // needle is ASCII, so the match ends on a char boundary
            rest = &rest[needle.len()..];
        } else {
            result.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_forbidden_character() {
        for c in FORBIDDEN_CHARACTERS {
            assert!(contains_forbidden_characters(&format!("nick{c}name")));
        }
        assert!(!contains_forbidden_characters("plain nick_name-42"));
        assert!(!contains_forbidden_characters(""));
    }

    #[test]
    fn sanitize_trims_and_strips() {
        assert_eq!(sanitize_input("  streamer  "), "streamer");
        assert_eq!(sanitize_input("\tstream\u{0}er\n"), "streamer");
        assert_eq!(sanitize_input("a<b>c"), "abc");
        assert_eq!(sanitize_input("   "), "");
        assert_eq!(sanitize_input("joão gamer"), "joão gamer");
    }

    #[test]
    fn normalize_strips_prefixes_ignoring_case() {
        assert_eq!(normalize_channel_link("WWW.Example.com"), "Example.com");
        assert_eq!(
            normalize_channel_link("HTTPS://www.twitch.tv/someone"),
            "twitch.tv/someone"
        );
        assert_eq!(normalize_channel_link("http://Www.youtube.com"), "youtube.com");
        assert_eq!(normalize_channel_link("twitch.tv/ some one "), "twitch.tv/someone");
    }

    #[test]
    fn normalize_removes_every_occurrence() {
        assert_eq!(normalize_channel_link("www.a.www.b"), "a.b");
        assert_eq!(normalize_channel_link("kick.com"), "kick.com");
        assert_eq!(normalize_channel_link(""), "");
    }

    #[test]
    fn normalize_keeps_multibyte_characters() {
        assert_eq!(normalize_channel_link("www.canal-ção.tv"), "canal-ção.tv");
    }

    #[test]
    fn platform_accepts_signed_integers() {
        assert_eq!(parse_platform("3"), Some(PlatformId(3)));
        assert_eq!(parse_platform(" 12 "), Some(PlatformId(12)));
        assert_eq!(parse_platform("+1"), Some(PlatformId(1)));
        assert_eq!(parse_platform("-1"), Some(PlatformId(-1)));
    }

    #[test]
    fn platform_is_not_range_checked() {
        assert_eq!(parse_platform("99999999999"), Some(PlatformId(99_999_999_999)));
        assert_eq!(
            parse_platform("9223372036854775807"),
            Some(PlatformId(i64::MAX))
        );
    }

    #[test]
    fn platform_rejects_non_integers() {
        assert_eq!(parse_platform("abc"), None);
        assert_eq!(parse_platform(""), None);
        assert_eq!(parse_platform("1.5"), None);
        assert_eq!(parse_platform("1e3"), None);
        assert_eq!(parse_platform("9223372036854775808"), None);
    }
}

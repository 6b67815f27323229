use std::fmt;

/// Target channel for a generated piece. Rendered lowercase wherever it
/// appears in prompt text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    LinkedIn,
    Twitter,
    Facebook,
    Instagram,
    Blog,
    Email,
}

impl Platform {
    /// Every supported platform, in declaration order.
    pub fn all() -> &'static [Platform] {
        <Platform as strum::VariantArray>::VARIANTS
    }
}

/// Requested length band.
///
/// Parsing never fails: anything outside the known bands is carried through
/// as `Other` and rendered with the long band's wording. Callers that want
/// strict input validation do it before building a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostLength {
    Short,
    Medium,
    Long,
    Other(String),
}

impl PostLength {
    pub fn parse(value: &str) -> Self {
        match value {
            "short" => PostLength::Short,
            "medium" => PostLength::Medium,
            "long" => PostLength::Long,
            other => PostLength::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PostLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostLength::Short => write!(f, "short"),
            PostLength::Medium => write!(f, "medium"),
            PostLength::Long => write!(f, "long"),
            PostLength::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// One generation ask, fully parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRequest {
    pub topic: String,
    pub keywords: Vec<String>,
    pub post_length: PostLength,
    pub platform: Platform,
    pub include_hashtags: bool,
    pub include_call_to_action: bool,
}

impl ContentRequest {
    /// A request with the product's default toggles: medium LinkedIn post,
    /// hashtags and call to action on.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            keywords: Vec::new(),
            post_length: PostLength::Medium,
            platform: Platform::LinkedIn,
            include_hashtags: true,
            include_call_to_action: true,
        }
    }
}

/// Splits comma-separated keyword input into trimmed, non-empty entries.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|keyword| !keyword.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::VariantArray;

    #[test]
    fn platforms_render_lowercase() {
        assert_eq!(Platform::LinkedIn.to_string(), "linkedin");
        assert_eq!(Platform::Email.to_string(), "email");
    }

    #[test]
    fn platforms_parse_case_insensitively() {
        assert_eq!(Platform::from_str("linkedin").unwrap(), Platform::LinkedIn);
        assert_eq!(Platform::from_str("Twitter").unwrap(), Platform::Twitter);
        assert!(Platform::from_str("myspace").is_err());
    }

    #[test]
    fn platform_round_trips_through_display() {
        for platform in Platform::VARIANTS {
            assert_eq!(
                Platform::from_str(&platform.to_string()).unwrap(),
                *platform
            );
        }
    }

    #[test]
    fn post_length_parse_never_fails() {
        assert_eq!(PostLength::parse("short"), PostLength::Short);
        assert_eq!(PostLength::parse("medium"), PostLength::Medium);
        assert_eq!(PostLength::parse("long"), PostLength::Long);
        assert_eq!(
            PostLength::parse("epic"),
            PostLength::Other("epic".to_string())
        );
        assert_eq!(PostLength::parse(""), PostLength::Other(String::new()));
    }

    #[test]
    fn post_length_display_preserves_unknown_input() {
        assert_eq!(PostLength::parse("epic").to_string(), "epic");
        assert_eq!(PostLength::Medium.to_string(), "medium");
    }

    #[test]
    fn keywords_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_keywords(" growth , hiring,,  , q3 "),
            vec!["growth", "hiring", "q3"]
        );
        assert!(parse_keywords("").is_empty());
        assert!(parse_keywords(" , ,").is_empty());
    }
}

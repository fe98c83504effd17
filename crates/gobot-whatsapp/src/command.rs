//! Command parsing
//!
//! Mentions carry a comma-delimited command: the first field is the keyword,
//! the second the payload. Parsing is separate from execution so the string
//! handling can be tested without any provider.

/// Reply when fewer than two comma-separated fields are present
pub const USAGE_REPLY: &str =
    "need more fields separated by commas, the first field can be weather or xxx";

/// Reply when the payload field is empty
pub const NEED_MORE_INFO_REPLY: &str =
    "Need to input the more information separated by commas";

/// Reply when the weather provider yields no records for a location
pub const LOCATION_NOT_FOUND_REPLY: &str = "The location could not be found.";

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Current weather for a location
    Weather(String),
    /// Translate payload with target "en", source "zh-CN"
    TranslateToEn(String),
    /// Translate payload with target "zh-CN", source "en"
    TranslateToZh(String),
    /// Anything else; carries the normalized keyword
    Unsupported(String),
}

impl Command {
    /// Parse raw mention text into a command
    ///
    /// The trigger substring is removed literally (case-sensitive). The
    /// keyword is lower-cased with all spaces removed; the payload keeps its
    /// internal whitespace and loses only the surrounding.
    ///
    /// `Err` carries the fixed reply for malformed input.
    pub fn parse(raw: &str, trigger: &str) -> std::result::Result<Command, &'static str> {
        let input = raw.replace(trigger, "");
        let fields: Vec<&str> = input.split(',').collect();
        if fields.len() < 2 {
            return Err(USAGE_REPLY);
        }

        let keyword = fields[0].to_lowercase().replace(' ', "");
        let payload = fields[1].trim();
        if payload.is_empty() {
            return Err(NEED_MORE_INFO_REPLY);
        }

        let payload = payload.to_string();
        Ok(match keyword.as_str() {
            "weather" => Command::Weather(payload),
            "trans-en" => Command::TranslateToEn(payload),
            "trans-zh" => Command::TranslateToZh(payload),
            _ => Command::Unsupported(keyword),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIGGER: &str = "@gobot";

    #[test]
    fn test_parse_weather() {
        let cmd = Command::parse("@gobot weather, London", TRIGGER).unwrap();
        assert_eq!(cmd, Command::Weather("London".to_string()));
    }

    #[test]
    fn test_keyword_case_and_space_insensitive() {
        for raw in ["@gobot Weather, London", "@gobot  WEA THER , London"] {
            let cmd = Command::parse(raw, TRIGGER).unwrap();
            assert_eq!(cmd, Command::Weather("London".to_string()));
        }
    }

    #[test]
    fn test_payload_trims_surrounding_whitespace_only() {
        let cmd = Command::parse("@gobot trans-zh,   how are you  ", TRIGGER).unwrap();
        assert_eq!(cmd, Command::TranslateToZh("how are you".to_string()));
    }

    #[test]
    fn test_too_few_fields_is_usage() {
        for raw in ["@gobot weather", "@gobot", "@gobot WEATHER London"] {
            assert_eq!(Command::parse(raw, TRIGGER).unwrap_err(), USAGE_REPLY);
        }
    }

    #[test]
    fn test_blank_payload_needs_more_info() {
        for raw in ["@gobot weather,", "@gobot weather,    ", "@gobot trans-en, ,extra"] {
            assert_eq!(
                Command::parse(raw, TRIGGER).unwrap_err(),
                NEED_MORE_INFO_REPLY
            );
        }
    }

    #[test]
    fn test_extra_fields_ignored() {
        let cmd = Command::parse("@gobot weather, London, please", TRIGGER).unwrap();
        assert_eq!(cmd, Command::Weather("London".to_string()));
    }

    #[test]
    fn test_unsupported_keyword_is_normalized() {
        let cmd = Command::parse("@gobot Fore Cast, London", TRIGGER).unwrap();
        assert_eq!(cmd, Command::Unsupported("forecast".to_string()));
    }

    #[test]
    fn test_translation_directions() {
        let cmd = Command::parse("@gobot trans-en, 你好", TRIGGER).unwrap();
        assert_eq!(cmd, Command::TranslateToEn("你好".to_string()));

        let cmd = Command::parse("@gobot trans-zh, hello", TRIGGER).unwrap();
        assert_eq!(cmd, Command::TranslateToZh("hello".to_string()));
    }
}

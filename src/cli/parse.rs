use tagpath_core::format::OutputFormat;
use tagpath_core::links::Locale;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse link locale from string
pub fn parse_locale(s: &str) -> std::result::Result<Locale, String> {
    s.parse::<Locale>().map_err(|e| e.to_string())
}

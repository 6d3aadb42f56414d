//! Problem page links

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TagpathError;
use crate::item::ItemRecord;

/// Site locale for problem links
///
/// Defaults to the international site; `[links] locale = "cn"` or
/// `--locale cn` selects leetcode.cn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// leetcode.com
    #[default]
    En,
    /// leetcode.cn
    Cn,
}

impl Locale {
    fn domain_suffix(self) -> &'static str {
        match self {
            Locale::En => "com",
            Locale::Cn => "cn",
        }
    }
}

impl FromStr for Locale {
    type Err = TagpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "cn" => Ok(Locale::Cn),
            other => Err(TagpathError::invalid_value(
                "locale",
                format!("{} (expected: en, cn)", other),
            )),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Cn => write!(f, "cn"),
        }
    }
}

/// URL of the problem page for an item
pub fn problem_link(item: &ItemRecord, locale: Locale) -> String {
    format!(
        "https://leetcode.{}/problems/{}/",
        locale.domain_suffix(),
        item.slug()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sum() -> ItemRecord {
        ItemRecord::new(1, "Two Sum", None, 52.0, ["Array"]).unwrap()
    }

    #[test]
    fn test_problem_link_en() {
        assert_eq!(
            problem_link(&two_sum(), Locale::En),
            "https://leetcode.com/problems/two-sum/"
        );
    }

    #[test]
    fn test_problem_link_cn() {
        assert_eq!(
            problem_link(&two_sum(), Locale::Cn),
            "https://leetcode.cn/problems/two-sum/"
        );
    }

    #[test]
    fn test_problem_link_uses_source_slug() {
        let item = two_sum().with_slug("two-sum-classic");
        assert_eq!(
            problem_link(&item, Locale::En),
            "https://leetcode.com/problems/two-sum-classic/"
        );
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!("CN".parse::<Locale>().unwrap(), Locale::Cn);
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert!(matches!(
            "fr".parse::<Locale>(),
            Err(TagpathError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_default_locale_is_international() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::default().to_string(), "en");
    }
}

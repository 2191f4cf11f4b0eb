//! Abstract factory: each factory builds a whole family of related products.
//!
//! Config parsers come in two formats (JSON, XML) and two scopes (rule config,
//! system config). A [`ConfigParserFactory`] is chosen per format and then hands out
//! a parser for each scope, so callers never mix a JSON rule parser with an XML
//! system parser. A new scope (say, business config) becomes one more method on the
//! trait.
//!
//! The parsers themselves are placeholders; they only report which family they
//! belong to.

use super::FactoryError;
use std::fmt::{self, Debug, Display};
use std::str::FromStr;
use tracing::debug;

/// Key selecting a parser family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Json,
    Xml,
}

impl FromStr for ConfigFormat {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ConfigFormat::Json),
            "xml" => Ok(ConfigFormat::Xml),
            _ => Err(FactoryError::UnknownFormat(s.to_string())),
        }
    }
}

impl Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Json => f.write_str("json"),
            ConfigFormat::Xml => f.write_str("xml"),
        }
    }
}

pub trait RuleConfigParser: Debug + Send + Sync {
    fn format(&self) -> ConfigFormat;
}

pub trait SystemConfigParser: Debug + Send + Sync {
    fn format(&self) -> ConfigFormat;
}

/// Builds every parser of a single format.
pub trait ConfigParserFactory: Debug + Send + Sync {
    fn create_rule_parser(&self) -> Box<dyn RuleConfigParser>;

    fn create_system_parser(&self) -> Box<dyn SystemConfigParser>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRuleConfigParser;

impl RuleConfigParser for JsonRuleConfigParser {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Json
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSystemConfigParser;

impl SystemConfigParser for JsonSystemConfigParser {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Json
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlRuleConfigParser;

impl RuleConfigParser for XmlRuleConfigParser {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Xml
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlSystemConfigParser;

impl SystemConfigParser for XmlSystemConfigParser {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Xml
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConfigParserFactory;

impl ConfigParserFactory for JsonConfigParserFactory {
    fn create_rule_parser(&self) -> Box<dyn RuleConfigParser> {
        Box::new(JsonRuleConfigParser)
    }

    fn create_system_parser(&self) -> Box<dyn SystemConfigParser> {
        Box::new(JsonSystemConfigParser)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlConfigParserFactory;

impl ConfigParserFactory for XmlConfigParserFactory {
    fn create_rule_parser(&self) -> Box<dyn RuleConfigParser> {
        Box::new(XmlRuleConfigParser)
    }

    fn create_system_parser(&self) -> Box<dyn SystemConfigParser> {
        Box::new(XmlSystemConfigParser)
    }
}

static JSON_FACTORY: JsonConfigParserFactory = JsonConfigParserFactory;
static XML_FACTORY: XmlConfigParserFactory = XmlConfigParserFactory;

/// Entry point that picks the parser family for a format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserFactory;

impl ParserFactory {
    /// The factories are stateless, so the same instance is returned every time.
    pub fn for_format(format: ConfigFormat) -> &'static dyn ConfigParserFactory {
        debug!(%format, "Selected parser factory");
        match format {
            ConfigFormat::Json => &JSON_FACTORY,
            ConfigFormat::Xml => &XML_FACTORY,
        }
    }

    /// Parses `name` as a [`ConfigFormat`] and returns its family.
    pub fn for_name(name: &str) -> Result<&'static dyn ConfigParserFactory, FactoryError> {
        let format = name.parse::<ConfigFormat>()?;
        Ok(Self::for_format(format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_families_stay_consistent() {
        for format in [ConfigFormat::Json, ConfigFormat::Xml] {
            let factory = ParserFactory::for_format(format);
            assert_eq!(factory.create_rule_parser().format(), format);
            assert_eq!(factory.create_system_parser().format(), format);
        }
    }

    #[test]
    fn test_for_name_case_insensitive() {
        let factory = ParserFactory::for_name("XML").unwrap();
        assert_eq!(factory.create_rule_parser().format(), ConfigFormat::Xml);
    }

    #[test]
    fn test_unknown_format() {
        let err = ParserFactory::for_name("yaml").unwrap_err();
        assert_eq!(err, FactoryError::UnknownFormat("yaml".into()));
    }

    #[test]
    fn test_format_round_trips_through_display() {
        for format in [ConfigFormat::Json, ConfigFormat::Xml] {
            assert_eq!(format.to_string().parse::<ConfigFormat>(), Ok(format));
        }
    }
}

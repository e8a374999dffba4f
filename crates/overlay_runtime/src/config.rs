//! Modal configuration surface and validation.
//!
//! Configuration arrives as JSON option bags (`{"active": true, "dimmer": "blurring"}`). Values are
//! first read into a loose raw shape and then validated field by field so that each rejection names
//! the offending option instead of surfacing a generic parse failure.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejections produced while validating modal configuration.
pub enum ConfigError {
    /// `dimmer` was not one of `false`, `true`, `"blurring"`, `"inverted"`.
    #[error("invalid dimmer `{0}`: expected false, true, \"blurring\" or \"inverted\"")]
    InvalidDimmer(String),
    /// `size` was not one of the known size names.
    #[error("invalid size `{0}`: expected one of mini, tiny, small, large, fullscreen")]
    InvalidSize(String),
    /// The document was not a JSON object of known options with well-typed values.
    #[error("malformed modal configuration: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Dimmer presentation requested by a modal.
pub enum DimmerMode {
    /// No dimmer node and no body flags.
    None,
    /// Plain dimmer.
    #[default]
    Default,
    /// Dimmer that also blurs the page behind it.
    Blurring,
    /// Light dimmer; the inverted marker sits on the dimmer node, not the body.
    Inverted,
}

const DIMMED_CLASSES: &[&str] = &["dimmable", "dimmed"];
const BLURRING_CLASSES: &[&str] = &["dimmable", "dimmed", "blurring"];

impl DimmerMode {
    /// Stable token used in diagnostics.
    pub const fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Default => "default",
            Self::Blurring => "blurring",
            Self::Inverted => "inverted",
        }
    }

    /// Class tokens this mode places on the document root while mounted.
    pub const fn body_classes(self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::Default | Self::Inverted => DIMMED_CLASSES,
            Self::Blurring => BLURRING_CLASSES,
        }
    }

    /// Whether a dimmer node is rendered for this mode.
    pub const fn shows_dimmer(self) -> bool {
        !matches!(self, Self::None)
    }

    fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Null => Ok(Self::None),
            Value::Bool(enabled) => Ok(Self::from(enabled)),
            Value::String(raw) => match raw.as_str() {
                "blurring" => Ok(Self::Blurring),
                "inverted" => Ok(Self::Inverted),
                _ => Err(ConfigError::InvalidDimmer(raw)),
            },
            other => Err(ConfigError::InvalidDimmer(other.to_string())),
        }
    }
}

impl From<bool> for DimmerMode {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Default
        } else {
            Self::None
        }
    }
}

impl FromStr for DimmerMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "false" => Ok(Self::None),
            "true" => Ok(Self::Default),
            "blurring" => Ok(Self::Blurring),
            "inverted" => Ok(Self::Inverted),
            _ => Err(ConfigError::InvalidDimmer(raw.to_string())),
        }
    }
}

impl fmt::Display for DimmerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Presentation-only modal width.
pub enum ModalSize {
    /// Narrowest.
    Mini,
    /// Narrow.
    Tiny,
    /// Small.
    Small,
    /// Large.
    Large,
    /// Full viewport width.
    Fullscreen,
}

impl ModalSize {
    /// Every size, in ascending width.
    pub const ALL: [Self; 5] = [
        Self::Mini,
        Self::Tiny,
        Self::Small,
        Self::Large,
        Self::Fullscreen,
    ];

    /// Class token for this size.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Mini => "mini",
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Large => "large",
            Self::Fullscreen => "fullscreen",
        }
    }
}

impl FromStr for ModalSize {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == raw)
            .ok_or_else(|| ConfigError::InvalidSize(raw.to_string()))
    }
}

impl fmt::Display for ModalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawModalConfig {
    active: bool,
    // Absent means the default dimmer; an explicit `null` means none.
    #[serde(default = "dimmer_enabled")]
    dimmer: Value,
    size: Option<String>,
    basic: bool,
}

fn dimmer_enabled() -> Value {
    Value::Bool(true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Validated modal options. The close callback is supplied separately.
pub struct ModalConfig {
    /// Whether the overlay is mounted and visible.
    pub active: bool,
    /// Dimmer presentation.
    pub dimmer: DimmerMode,
    /// Optional width variant.
    pub size: Option<ModalSize>,
    /// Borderless presentation.
    pub basic: bool,
}

impl ModalConfig {
    /// Parses and validates a JSON option bag.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for non-object documents, unknown options, or mistyped
    /// booleans, and the dedicated variant for an invalid `dimmer` or `size`.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawModalConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Malformed(err.to_string()))?;
        Self::try_from(raw)
    }

    /// Validates an already-parsed JSON option bag.
    ///
    /// # Errors
    ///
    /// Same as [`ModalConfig::from_json`].
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let raw: RawModalConfig =
            serde_json::from_value(value).map_err(|err| ConfigError::Malformed(err.to_string()))?;
        Self::try_from(raw)
    }
}

impl TryFrom<RawModalConfig> for ModalConfig {
    type Error = ConfigError;

    fn try_from(raw: RawModalConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            active: raw.active,
            dimmer: DimmerMode::from_value(raw.dimmer)?,
            size: raw.size.as_deref().map(str::parse::<ModalSize>).transpose()?,
            basic: raw.basic,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = ModalConfig::from_json("{}").expect("parse");
        assert_eq!(config, ModalConfig::default());
        assert_eq!(config.dimmer, DimmerMode::Default);
        assert!(!config.active);
    }

    #[test]
    fn dimmer_accepts_bool_and_named_variants() {
        let cases = [
            (json!(false), DimmerMode::None),
            (json!(true), DimmerMode::Default),
            (json!("blurring"), DimmerMode::Blurring),
            (json!("inverted"), DimmerMode::Inverted),
        ];
        for (dimmer, expected) in cases {
            let config = ModalConfig::from_value(json!({ "active": true, "dimmer": dimmer }))
                .expect("valid dimmer");
            assert_eq!(config.dimmer, expected);
        }
    }

    #[test]
    fn null_dimmer_renders_no_dimmer() {
        let config = ModalConfig::from_json(r#"{"active": true, "dimmer": null}"#).expect("parse");
        assert_eq!(config.dimmer, DimmerMode::None);
        assert!(DimmerMode::None.body_classes().is_empty());
    }

    #[test]
    fn invalid_dimmer_is_rejected_with_its_value() {
        let err = ModalConfig::from_json(r#"{"dimmer": "foggy"}"#).expect_err("reject");
        assert_eq!(err, ConfigError::InvalidDimmer("foggy".to_string()));
        assert!(err.to_string().contains("\"blurring\""));

        let err = ModalConfig::from_json(r#"{"dimmer": 3}"#).expect_err("reject number");
        assert_eq!(err, ConfigError::InvalidDimmer("3".to_string()));
    }

    #[test]
    fn size_round_trips_through_tokens() {
        for size in ModalSize::ALL {
            assert_eq!(size.token().parse::<ModalSize>(), Ok(size));
        }
        let config = ModalConfig::from_json(r#"{"size": "fullscreen", "basic": true}"#)
            .expect("parse");
        assert_eq!(config.size, Some(ModalSize::Fullscreen));
        assert!(config.basic);
    }

    #[test]
    fn invalid_size_is_rejected() {
        let err = ModalConfig::from_json(r#"{"size": "huge"}"#).expect_err("reject");
        assert_eq!(err, ConfigError::InvalidSize("huge".to_string()));
    }

    #[test]
    fn unknown_options_and_wrong_types_are_malformed() {
        let err = ModalConfig::from_json(r#"{"opened": true}"#).expect_err("unknown option");
        assert!(matches!(err, ConfigError::Malformed(ref msg) if msg.contains("opened")));

        let err = ModalConfig::from_json(r#"{"active": "yes"}"#).expect_err("mistyped");
        assert!(matches!(err, ConfigError::Malformed(_)));
    }

    #[test]
    fn body_classes_follow_dimmer_table() {
        assert!(DimmerMode::None.body_classes().is_empty());
        assert_eq!(DimmerMode::Default.body_classes(), &["dimmable", "dimmed"]);
        assert_eq!(
            DimmerMode::Blurring.body_classes(),
            &["dimmable", "dimmed", "blurring"]
        );
        assert_eq!(DimmerMode::Inverted.body_classes(), &["dimmable", "dimmed"]);
    }

    #[test]
    fn dimmer_from_str_matches_config_vocabulary() {
        assert_eq!("false".parse::<DimmerMode>(), Ok(DimmerMode::None));
        assert_eq!("true".parse::<DimmerMode>(), Ok(DimmerMode::Default));
        assert!("dark".parse::<DimmerMode>().is_err());
    }
}

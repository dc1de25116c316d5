use crate::geometry::Position;
use crate::placement::PlacementRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

// ===== WIDGET OPTIONS =====

/// Construction parameters of a draggable widget.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct DraggableOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_position: Option<Position>,
    #[serde(default)]
    pub random_position: bool,
    /// Show a "drag me" affordance while idle.
    #[serde(default)]
    pub show_tooltip: bool,
}

impl DraggableOptions {
    pub fn placement(&self) -> PlacementRequest {
        PlacementRequest {
            initial_position: self.initial_position,
            random_position: self.random_position,
        }
    }
}

// ===== BOARD CONFIG =====

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub label: String,
    #[serde(flatten)]
    pub options: DraggableOptions,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoardConfig {
    pub title: String,
    #[serde(default, rename = "widget")]
    pub widgets: Vec<WidgetConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Draggable board".to_string(),
            widgets: vec![WidgetConfig {
                label: "Drag me".to_string(),
                options: DraggableOptions {
                    show_tooltip: true,
                    ..DraggableOptions::default()
                },
            }],
        }
    }
}

impl BoardConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(source).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, widget) in self.widgets.iter().enumerate() {
            if widget.label.trim().is_empty() {
                return Err(ConfigError::EmptyLabel { index });
            }
            if let Some(position) = widget.options.initial_position {
                if !position.is_finite() {
                    return Err(ConfigError::NonFinitePosition {
                        label: widget.label.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

// ===== ERRORS =====

#[derive(Debug)]
pub enum ConfigError {
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
    EmptyLabel { index: usize },
    NonFinitePosition { label: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(error) => write!(f, "invalid board config: {error}"),
            ConfigError::Serialize(error) => write!(f, "cannot serialize board config: {error}"),
            ConfigError::EmptyLabel { index } => write!(f, "widget #{index} has an empty label"),
            ConfigError::NonFinitePosition { label } => {
                write!(f, "widget '{label}' has a non-finite initial position")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(error) => Some(error),
            ConfigError::Serialize(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = r#"
        title = "Playground"

        [[widget]]
        label = "Pinned"
        initial_position = { x = 40.0, y = 60.0 }

        [[widget]]
        label = "Wanderer"
        random_position = true
        show_tooltip = true

        [[widget]]
        label = "In flow"
    "#;

    #[test]
    fn test_parse_board() {
        let config = BoardConfig::from_toml(BOARD).unwrap();
        assert_eq!(config.title, "Playground");
        assert_eq!(config.widgets.len(), 3);

        let pinned = &config.widgets[0];
        assert_eq!(pinned.options.initial_position, Some(Position::new(40.0, 60.0)));
        assert!(!pinned.options.random_position);
        assert!(!pinned.options.show_tooltip);

        assert!(config.widgets[1].options.random_position);
        assert!(config.widgets[1].options.show_tooltip);
        assert_eq!(config.widgets[2].options, DraggableOptions::default());
    }

    #[test]
    fn test_placement_from_options() {
        let options = DraggableOptions {
            initial_position: Some(Position::new(1.0, 2.0)),
            random_position: true,
            show_tooltip: false,
        };
        let request = options.placement();
        assert!(request.is_explicit());
        assert_eq!(request.initial_position, Some(Position::new(1.0, 2.0)));
    }

    #[test]
    fn test_empty_label_rejected() {
        let result = BoardConfig::from_toml("title = \"x\"\n[[widget]]\nlabel = \"  \"\n");
        assert!(matches!(result, Err(ConfigError::EmptyLabel { index: 0 })));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = BoardConfig::from_toml("title = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_non_finite_position_rejected() {
        let config = BoardConfig {
            title: "x".to_string(),
            widgets: vec![WidgetConfig {
                label: "bad".to_string(),
                options: DraggableOptions {
                    initial_position: Some(Position::new(f64::NAN, 0.0)),
                    ..DraggableOptions::default()
                },
            }],
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinitePosition { .. })
        ));
    }

    #[test]
    fn test_default_board_round_trips() {
        let config = BoardConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(BoardConfig::from_toml(&text).unwrap(), config);
    }
}

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The C++ construct that wraps a generated or combined header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKeyword {
    #[default]
    Struct,
    Class,
    Union,
    Namespace,
}

impl ContainerKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKeyword::Struct => "struct",
            ContainerKeyword::Class => "class",
            ContainerKeyword::Union => "union",
            ContainerKeyword::Namespace => "namespace",
        }
    }
}

impl FromStr for ContainerKeyword {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "struct" => Ok(ContainerKeyword::Struct),
            "class" => Ok(ContainerKeyword::Class),
            "union" => Ok(ContainerKeyword::Union),
            "namespace" => Ok(ContainerKeyword::Namespace),
            unknown => Err(DomainError::config(format!(
                "Unknown container keyword '{}', expected one of: struct, class, union, namespace",
                unknown
            ))),
        }
    }
}

impl std::fmt::Display for ContainerKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Class".parse::<ContainerKeyword>().unwrap(), ContainerKeyword::Class);
        assert_eq!(
            " NAMESPACE ".parse::<ContainerKeyword>().unwrap(),
            ContainerKeyword::Namespace
        );
    }

    #[test]
    fn test_unknown_keyword_is_config_error() {
        let err = "enum".parse::<ContainerKeyword>().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(ContainerKeyword::default(), ContainerKeyword::Struct);
        for keyword in [
            ContainerKeyword::Struct,
            ContainerKeyword::Class,
            ContainerKeyword::Union,
            ContainerKeyword::Namespace,
        ] {
            assert_eq!(keyword.to_string().parse::<ContainerKeyword>().unwrap(), keyword);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ContainerKeyword::Union).unwrap();
        assert_eq!(json, "\"union\"");
        let parsed: ContainerKeyword = serde_json::from_str("\"namespace\"").unwrap();
        assert_eq!(parsed, ContainerKeyword::Namespace);
    }
}

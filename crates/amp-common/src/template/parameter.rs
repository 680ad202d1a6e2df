//! Template parameter declarations

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Generation pattern for 16 random alphanumeric characters
pub const ALPHANUMERIC_16: &str = "[a-zA-Z0-9]{16}";

/// Reference a parameter from inside an object field (`${NAME}`)
pub fn placeholder(name: &str) -> String {
    format!("${{{}}}", name)
}

/// How the downstream engine obtains a parameter's value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Generation {
    /// Synthesised at instantiation time from a pattern
    Expression {
        /// Generator kind
        generate: GenerateKind,
        /// Pattern the generated value matches (e.g. `[a-zA-Z0-9]{16}`)
        from: String,
    },
    /// Fixed default value, or none when the operator must supply one
    Literal {
        /// The default value
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
}

/// Generator kinds understood by the template engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerateKind {
    /// Regular-expression-like pattern expansion
    Expression,
}

/// A named template parameter.
///
/// Equality and hashing consider the name only, so two declarations of the
/// same parameter compare equal even if their metadata differs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Parameter name, referenced as `${NAME}` from objects
    pub name: String,
    /// Human readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Generation rule
    #[serde(flatten)]
    pub generation: Generation,
    /// Whether instantiation fails when no value is available
    #[serde(default)]
    pub required: bool,
}

impl Parameter {
    /// Parameter generated from a pattern at instantiation time
    pub fn generated(name: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            description: None,
            generation: Generation::Expression {
                generate: GenerateKind::Expression,
                from: from.into(),
            },
            required: false,
        }
    }

    /// Parameter with a fixed default value
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            description: None,
            generation: Generation::Literal {
                value: Some(value.into()),
            },
            required: false,
        }
    }

    /// Set the display name
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the parameter as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// `${NAME}` reference to this parameter
    pub fn placeholder(&self) -> String {
        placeholder(&self.name)
    }

    /// Whether the value is generated rather than fixed
    pub fn is_generated(&self) -> bool {
        matches!(self.generation, Generation::Expression { .. })
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Parameter {}

impl Hash for Parameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_parameter_serializes_generate_and_from() {
        let param = Parameter::generated("ZYNC_SECRET_KEY_BASE", ALPHANUMERIC_16).required();
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "ZYNC_SECRET_KEY_BASE",
                "generate": "expression",
                "from": "[a-zA-Z0-9]{16}",
                "required": true,
            })
        );
    }

    #[test]
    fn literal_parameter_serializes_value() {
        let param = Parameter::literal("APP_LABEL", "3scale-api-management")
            .with_display_name("Application Label");
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["value"], "3scale-api-management");
        assert_eq!(json["displayName"], "Application Label");
        assert!(json.get("generate").is_none());
        assert_eq!(json["required"], false);
    }

    #[test]
    fn parameters_deserialize_into_matching_generation() {
        let generated: Parameter = serde_yaml::from_str(
            "name: TOKEN\ngenerate: expression\nfrom: '[a-z]{4}'\nrequired: true\n",
        )
        .unwrap();
        assert!(generated.is_generated());
        assert!(generated.required);

        let literal: Parameter = serde_yaml::from_str("name: APP_LABEL\nvalue: app\n").unwrap();
        assert_eq!(
            literal.generation,
            Generation::Literal {
                value: Some("app".to_string())
            }
        );
    }

    #[test]
    fn equality_is_by_name() {
        let a = Parameter::generated("TOKEN", ALPHANUMERIC_16);
        let b = Parameter::literal("TOKEN", "fixed").with_description("different");
        assert_eq!(a, b);

        let set: HashSet<Parameter> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn placeholder_wraps_name() {
        assert_eq!(placeholder("APP_LABEL"), "${APP_LABEL}");
        assert_eq!(
            Parameter::generated("ZYNC_DATABASE_PASSWORD", ALPHANUMERIC_16).placeholder(),
            "${ZYNC_DATABASE_PASSWORD}"
        );
    }
}

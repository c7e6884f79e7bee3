use k8s_openapi::api::core::v1::{EnvVarSource, ObjectFieldSelector};

/// API version used for downward API field references.
pub const FIELD_REF_API_VERSION: &str = "v1";

/// Environment variable descriptor for a collector container.
///
/// Unlike the core Kubernetes type, the value is a sum type: a descriptor
/// holds either a literal value or a downward API field reference, never both
/// and never neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub name: String,
    pub value: EnvVarValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvVarValue {
    /// Verbatim string value.
    Literal(String),
    /// Resolved by the kubelet at container start from the pod's own metadata.
    FieldRef(FieldRef),
}

/// Reference into the enclosing pod's own spec/status (downward API).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    pub api_version: String,
    pub field_path: String,
}

impl EnvVar {
    /// Builds a descriptor carrying `value` verbatim. No validation or
    /// escaping is applied; name uniqueness within a container's list is the
    /// caller's responsibility.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: EnvVarValue::Literal(value.into()),
        }
    }

    /// Builds a descriptor whose value is resolved at container start from
    /// `field_path`, e.g. `spec.nodeName` or `metadata.uid`.
    pub fn with_field_ref(name: impl Into<String>, field_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: EnvVarValue::FieldRef(FieldRef {
                api_version: FIELD_REF_API_VERSION.to_string(),
                field_path: field_path.into(),
            }),
        }
    }
}

impl From<EnvVar> for k8s_openapi::api::core::v1::EnvVar {
    fn from(env_var: EnvVar) -> Self {
        match env_var.value {
            EnvVarValue::Literal(value) => Self {
                name: env_var.name,
                value: Some(value),
                value_from: None,
            },
            EnvVarValue::FieldRef(field_ref) => Self {
                name: env_var.name,
                value: None,
                value_from: Some(EnvVarSource {
                    field_ref: Some(ObjectFieldSelector {
                        api_version: Some(field_ref.api_version),
                        field_path: field_ref.field_path,
                    }),
                    ..Default::default()
                }),
            },
        }
    }
}

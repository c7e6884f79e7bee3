//! Pinned defaults for the Java auto-instrumentation agent injected by the
//! operator.

/// Image repository the default Java agent is pulled from.
pub const JAVA_AGENT_IMAGE_REPOSITORY: &str = "quay.io/signalfx/splunk-otel-instrumentation-java";

/// Pinned default Java agent version.
pub const DEFAULT_JAVA_AGENT_VERSION: &str = "v1.14.1";

/// Pinned default Java agent image, `<repository>:<version>`.
pub const DEFAULT_JAVA_AGENT_IMAGE: &str =
    "quay.io/signalfx/splunk-otel-instrumentation-java:v1.14.1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_is_derived_from_repository_and_version() {
        assert_eq!(
            DEFAULT_JAVA_AGENT_IMAGE,
            format!("{JAVA_AGENT_IMAGE_REPOSITORY}:{DEFAULT_JAVA_AGENT_VERSION}")
        );
    }
}

//! End-to-end checks over the built-in collector configuration documents:
//! each one must parse as YAML with placeholders unresolved, wire only
//! components it defines, and expose exactly the expected placeholder
//! tokens to the substitution step.

use rstest::rstest;
use splunk_otel_operator::collector::config::CollectorConfig;
use splunk_otel_operator::collector::defaults::{
    default_config, default_resources, CollectorRole, Distribution, DEFAULT_AGENT_CONFIG,
    DEFAULT_CLUSTER_RECEIVER_CONFIG, DEFAULT_CLUSTER_RECEIVER_CONFIG_OPENSHIFT,
    DEFAULT_GATEWAY_CONFIG,
};
use splunk_otel_operator::collector::placeholders::placeholder_names;
use std::collections::BTreeSet;

#[rstest]
#[case::agent(DEFAULT_AGENT_CONFIG)]
#[case::cluster_receiver(DEFAULT_CLUSTER_RECEIVER_CONFIG)]
#[case::cluster_receiver_openshift(DEFAULT_CLUSTER_RECEIVER_CONFIG_OPENSHIFT)]
#[case::gateway(DEFAULT_GATEWAY_CONFIG)]
fn default_documents_parse_and_wire_only_defined_components(#[case] document: &str) {
    let config = CollectorConfig::from_yaml(document).unwrap();

    config.check_pipeline_references().unwrap();
}

#[rstest]
#[case::agent(
    DEFAULT_AGENT_CONFIG,
    &[
        "MY_CLUSTER_NAME",
        "MY_NAMESPACE",
        "MY_NODE_IP",
        "MY_NODE_NAME",
        "MY_POD_IP",
        "MY_POD_NAME",
        "MY_POD_UID",
        "SPLUNK_ACCESS_TOKEN",
        "SPLUNK_BALLAST_SIZE_MIB",
        "SPLUNK_MEMORY_LIMIT_MIB",
        "SPLUNK_REALM",
    ]
)]
#[case::cluster_receiver(
    DEFAULT_CLUSTER_RECEIVER_CONFIG,
    &[
        "MY_CLUSTER_NAME",
        "MY_NAMESPACE",
        "MY_NODE_NAME",
        "MY_POD_IP",
        "MY_POD_NAME",
        "MY_POD_UID",
        "SPLUNK_ACCESS_TOKEN",
        "SPLUNK_BALLAST_SIZE_MIB",
        "SPLUNK_MEMORY_LIMIT_MIB",
        "SPLUNK_REALM",
    ]
)]
#[case::cluster_receiver_openshift(
    DEFAULT_CLUSTER_RECEIVER_CONFIG_OPENSHIFT,
    &[
        "MY_CLUSTER_NAME",
        "MY_NAMESPACE",
        "MY_NODE_NAME",
        "MY_POD_IP",
        "MY_POD_NAME",
        "MY_POD_UID",
        "SPLUNK_ACCESS_TOKEN",
        "SPLUNK_BALLAST_SIZE_MIB",
        "SPLUNK_MEMORY_LIMIT_MIB",
        "SPLUNK_REALM",
    ]
)]
#[case::gateway(
    DEFAULT_GATEWAY_CONFIG,
    &[
        "K8S_NAMESPACE",
        "K8S_NODE_NAME",
        "K8S_POD_IP",
        "K8S_POD_NAME",
        "K8S_POD_UID",
        "MY_CLUSTER_NAME",
        "SPLUNK_ACCESS_TOKEN",
        "SPLUNK_BALLAST_SIZE_MIB",
        "SPLUNK_MEMORY_LIMIT_MIB",
        "SPLUNK_REALM",
    ]
)]
fn placeholder_inventory_is_pinned(#[case] document: &str, #[case] expected: &[&str]) {
    let expected: BTreeSet<String> = expected.iter().map(|name| name.to_string()).collect();

    assert_eq!(placeholder_names(document), expected);
}

#[test]
fn cluster_receiver_variants_differ_only_by_distribution() {
    assert_ne!(
        DEFAULT_CLUSTER_RECEIVER_CONFIG,
        DEFAULT_CLUSTER_RECEIVER_CONFIG_OPENSHIFT
    );
    assert!(DEFAULT_CLUSTER_RECEIVER_CONFIG_OPENSHIFT.contains("distribution: openshift"));
    assert!(!DEFAULT_CLUSTER_RECEIVER_CONFIG.contains("distribution: openshift"));
}

#[test]
fn selected_documents_still_pass_the_reference_check() {
    for role in [
        CollectorRole::Agent,
        CollectorRole::ClusterReceiver,
        CollectorRole::Gateway,
    ] {
        for distribution in [Distribution::Kubernetes, Distribution::Openshift] {
            let document = default_config(role, distribution);
            let config = CollectorConfig::from_yaml(document).unwrap();

            config.check_pipeline_references().unwrap();
        }
    }
}

#[test]
fn every_role_has_sizing_defaults() {
    for role in [
        CollectorRole::Agent,
        CollectorRole::ClusterReceiver,
        CollectorRole::Gateway,
    ] {
        let resources = default_resources(role).to_resource_list();

        assert!(resources.contains_key("cpu"));
        assert!(resources.contains_key("memory"));
    }
}

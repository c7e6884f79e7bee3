//! Built-in collector configuration documents and sizing defaults.
//!
//! The documents are opaque text as far as this module is concerned:
//! `${NAME}` placeholder tokens stay unresolved and no merging with user
//! overrides happens here. Everything is `'static` data, safe for
//! unsynchronized concurrent reads.

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Collector deployment roles managed by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectorRole {
    Agent,
    ClusterReceiver,
    Gateway,
}

/// Target platform variant. Only the cluster receiver ships a
/// variant-specific default; the other roles ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    #[default]
    Kubernetes,
    Openshift,
}

/// Default CPU/memory sizing for one collector role, as Kubernetes quantity
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSizing {
    pub cpu: &'static str,
    pub memory: &'static str,
}

impl ResourceSizing {
    /// Resource-list form used for pod resource requests and limits.
    pub fn to_resource_list(&self) -> BTreeMap<String, Quantity> {
        BTreeMap::from([
            ("cpu".to_string(), Quantity(self.cpu.to_string())),
            ("memory".to_string(), Quantity(self.memory.to_string())),
        ])
    }
}

/// Returns the built-in configuration document for `role`, with placeholder
/// tokens unresolved.
pub fn default_config(role: CollectorRole, distribution: Distribution) -> &'static str {
    debug!(?role, ?distribution, "selecting built-in collector configuration");
    match (role, distribution) {
        (CollectorRole::Agent, _) => DEFAULT_AGENT_CONFIG,
        (CollectorRole::ClusterReceiver, Distribution::Kubernetes) => {
            DEFAULT_CLUSTER_RECEIVER_CONFIG
        }
        (CollectorRole::ClusterReceiver, Distribution::Openshift) => {
            DEFAULT_CLUSTER_RECEIVER_CONFIG_OPENSHIFT
        }
        (CollectorRole::Gateway, _) => DEFAULT_GATEWAY_CONFIG,
    }
}

/// Returns the default sizing for `role`.
pub fn default_resources(role: CollectorRole) -> ResourceSizing {
    match role {
        CollectorRole::Agent => ResourceSizing {
            cpu: DEFAULT_AGENT_CPU,
            memory: DEFAULT_AGENT_MEMORY,
        },
        CollectorRole::ClusterReceiver => ResourceSizing {
            cpu: DEFAULT_CLUSTER_RECEIVER_CPU,
            memory: DEFAULT_CLUSTER_RECEIVER_MEMORY,
        },
        CollectorRole::Gateway => ResourceSizing {
            cpu: DEFAULT_GATEWAY_CPU,
            memory: DEFAULT_GATEWAY_MEMORY,
        },
    }
}

pub const DEFAULT_AGENT_CPU: &str = "200m";
pub const DEFAULT_AGENT_MEMORY: &str = "500Mi";

/// Per-node agent daemonset configuration.
pub const DEFAULT_AGENT_CONFIG: &str = r#"
extensions:
  health_check:
    endpoint: '0.0.0.0:13133'
  k8s_observer:
    auth_type: serviceAccount
    node: '${MY_NODE_NAME}'
  memory_ballast:
    size_mib: ${SPLUNK_BALLAST_SIZE_MIB}
  zpages:
    endpoint: '0.0.0.0:55679'
receivers:
  jaeger:
    protocols:
      grpc:
        endpoint: '0.0.0.0:14250'
      thrift_http:
        endpoint: '0.0.0.0:14268'
  otlp:
    protocols:
      grpc:
        endpoint: '0.0.0.0:4317'
      http:
        endpoint: '0.0.0.0:55681'
  zipkin:
    endpoint: '0.0.0.0:9411'
  smartagent/signalfx-forwarder:
    listenAddress: '0.0.0.0:9080'
    type: signalfx-forwarder
  signalfx:
    endpoint: '0.0.0.0:9943'
  hostmetrics:
    collection_interval: 10s
    scrapers:
      cpu: null
      disk: null
      load: null
      memory: null
      network: null
      paging: null
      processes: null
  kubeletstats:
    auth_type: serviceAccount
    collection_interval: 10s
    endpoint: '${MY_NODE_IP}:10250'
    extra_metadata_labels:
      - container.id
    metric_groups:
      - container
      - pod
      - node
  receiver_creator:
    receivers: null
    watch_observers:
      - k8s_observer
  prometheus/self:
    config:
      scrape_configs:
        - job_name: otel-agent
          scrape_interval: 10s
          static_configs:
            - targets:
                - '${MY_POD_IP}:8888'
exporters:
  sapm:
    access_token: '${SPLUNK_ACCESS_TOKEN}'
    endpoint: 'https://ingest.${SPLUNK_REALM}.signalfx.com/v2/trace'
  signalfx:
    access_token: '${SPLUNK_ACCESS_TOKEN}'
    api_url: 'https://api.${SPLUNK_REALM}.signalfx.com'
    ingest_url: 'https://ingest.${SPLUNK_REALM}.signalfx.com'
    sync_host_metadata: true
  splunk_hec:
    token: '${SPLUNK_ACCESS_TOKEN}'
    endpoint: 'https://ingest.${SPLUNK_REALM}.signalfx.com/v1/log'
  logging: null
  logging/debug:
    loglevel: debug
processors:
  k8sattributes:
    extract:
      annotations:
      - from: pod
        key: splunk.com/sourcetype
      - from: namespace
        key: splunk.com/exclude
        tag_name: splunk.com/exclude
      - from: pod
        key: splunk.com/exclude
        tag_name: splunk.com/exclude
      - from: namespace
        key: splunk.com/index
        tag_name: com.splunk.index
      - from: pod
        key: splunk.com/index
        tag_name: com.splunk.index
      labels:
      - key: app
      metadata:
      - k8s.namespace.name
      - k8s.node.name
      - k8s.pod.name
      - k8s.pod.uid
      - container.id
      - container.image.name
      - container.image.tag
    filter:
      node: '${MY_NODE_NAME}'
  batch: null
  memory_limiter:
    check_interval: 2s
    limit_mib: '${SPLUNK_MEMORY_LIMIT_MIB}'
  resource:
    attributes:
      - action: insert
        key: k8s.node.name
        value: '${MY_NODE_NAME}'
      - action: insert
        key: k8s.cluster.name
        value: '${MY_CLUSTER_NAME}'
      - action: insert
        key: deployment.environment
        value: '${MY_CLUSTER_NAME}'
  resource/self:
    attributes:
      - action: insert
        key: k8s.pod.name
        value: '${MY_POD_NAME}'
      - action: insert
        key: k8s.pod.uid
        value: '${MY_POD_UID}'
      - action: insert
        key: k8s.namespace.name
        value: '${MY_NAMESPACE}'
  resourcedetection:
    override: false
    timeout: 10s
    detectors:
      - system
      - env
service:
  extensions:
    - health_check
    - k8s_observer
    - memory_ballast
    - zpages
  pipelines:
    traces:
      receivers:
        - smartagent/signalfx-forwarder
        - otlp
        - jaeger
        - zipkin
      processors:
        - k8sattributes
        - batch
        - resource
        - resourcedetection
      exporters:
        - sapm
        - signalfx
    metrics:
      receivers:
        - hostmetrics
        - kubeletstats
        - receiver_creator
        - signalfx
      processors:
        - batch
        - resource
        - resourcedetection
      exporters:
        - signalfx
    metrics/self:
      receivers:
        - prometheus/self
      processors:
        - batch
        - resource
        - resource/self
        - resourcedetection
      exporters:
        - signalfx
"#;

pub const DEFAULT_CLUSTER_RECEIVER_CPU: &str = "200m";
pub const DEFAULT_CLUSTER_RECEIVER_MEMORY: &str = "500Mi";

/// Cluster-wide metadata receiver deployment configuration.
pub const DEFAULT_CLUSTER_RECEIVER_CONFIG: &str = r#"
extensions:
  health_check:
    endpoint: '0.0.0.0:13133'
  memory_ballast:
    size_mib: ${SPLUNK_BALLAST_SIZE_MIB}
receivers:
  k8s_cluster:
    auth_type: serviceAccount
    metadata_exporters:
      - signalfx
  prometheus/self:
    config:
      scrape_configs:
        - job_name: otel-k8s-cluster-receiver
          scrape_interval: 10s
          static_configs:
            - targets:
                - '${MY_POD_IP}:8888'
exporters:
  signalfx:
    access_token: '${SPLUNK_ACCESS_TOKEN}'
    api_url: 'https://api.${SPLUNK_REALM}.signalfx.com'
    ingest_url: 'https://ingest.${SPLUNK_REALM}.signalfx.com'
    timeout: 10s
  logging: null
  logging/debug:
    loglevel: debug
processors:
  batch: null
  memory_limiter:
    check_interval: 2s
    limit_mib: '${SPLUNK_MEMORY_LIMIT_MIB}'
  resource:
    attributes:
      - action: insert
        key: metric_source
        value: kubernetes
      - action: insert
        key: receiver
        value: k8scluster
      - action: upsert
        key: k8s.cluster.name
        value: '${MY_CLUSTER_NAME}'
      - action: upsert
        key: deployment.environment
        value: '${MY_CLUSTER_NAME}'
  resource/self:
    attributes:
      - action: insert
        key: k8s.node.name
        value: '${MY_NODE_NAME}'
      - action: insert
        key: k8s.pod.name
        value: '${MY_POD_NAME}'
      - action: insert
        key: k8s.pod.uid
        value: '${MY_POD_UID}'
      - action: insert
        key: k8s.namespace.name
        value: '${MY_NAMESPACE}'
  resourcedetection:
    override: false
    timeout: 10s
    detectors:
      - system
      - env
service:
  extensions:
    - health_check
    - memory_ballast
  pipelines:
    metrics:
      receivers:
        - k8s_cluster
      processors:
        - batch
        - resource
        - resourcedetection
      exporters:
        - signalfx
    metrics/self:
      receivers:
        - prometheus/self
      processors:
        - batch
        - resource
        - resource/self
        - resourcedetection
      exporters:
        - signalfx
"#;

/// Cluster receiver variant for OpenShift clusters.
pub const DEFAULT_CLUSTER_RECEIVER_CONFIG_OPENSHIFT: &str = r#"
extensions:
  health_check:
    endpoint: '0.0.0.0:13133'
  memory_ballast:
    size_mib: ${SPLUNK_BALLAST_SIZE_MIB}
receivers:
  k8s_cluster:
    distribution: openshift
    auth_type: serviceAccount
    metadata_exporters:
      - signalfx
  prometheus/self:
    config:
      scrape_configs:
        - job_name: otel-k8s-cluster-receiver
          scrape_interval: 10s
          static_configs:
            - targets:
                - '${MY_POD_IP}:8888'
exporters:
  signalfx:
    access_token: '${SPLUNK_ACCESS_TOKEN}'
    api_url: 'https://api.${SPLUNK_REALM}.signalfx.com'
    ingest_url: 'https://ingest.${SPLUNK_REALM}.signalfx.com'
    timeout: 10s
  logging: null
  logging/debug:
    loglevel: debug
processors:
  batch: null
  memory_limiter:
    check_interval: 2s
    limit_mib: '${SPLUNK_MEMORY_LIMIT_MIB}'
  resource:
    attributes:
      - action: insert
        key: metric_source
        value: kubernetes
      - action: insert
        key: receiver
        value: k8scluster
      - action: upsert
        key: k8s.cluster.name
        value: '${MY_CLUSTER_NAME}'
      - action: upsert
        key: deployment.environment
        value: '${MY_CLUSTER_NAME}'
  resource/self:
    attributes:
      - action: insert
        key: k8s.node.name
        value: '${MY_NODE_NAME}'
      - action: insert
        key: k8s.pod.name
        value: '${MY_POD_NAME}'
      - action: insert
        key: k8s.pod.uid
        value: '${MY_POD_UID}'
      - action: insert
        key: k8s.namespace.name
        value: '${MY_NAMESPACE}'
  resourcedetection:
    override: false
    timeout: 10s
    detectors:
      - system
      - env
service:
  extensions:
    - health_check
    - memory_ballast
  pipelines:
    metrics:
      receivers:
        - k8s_cluster
      processors:
        - batch
        - resource
        - resourcedetection
      exporters:
        - signalfx
    metrics/self:
      receivers:
        - prometheus/self
      processors:
        - batch
        - resource
        - resource/self
        - resourcedetection
      exporters:
        - signalfx
"#;

pub const DEFAULT_GATEWAY_CPU: &str = "4";
pub const DEFAULT_GATEWAY_MEMORY: &str = "8Gi";

/// Aggregation gateway deployment configuration.
pub const DEFAULT_GATEWAY_CONFIG: &str = r#"
    exporters:
      sapm:
        access_token: ${SPLUNK_ACCESS_TOKEN}
        endpoint: https://ingest.${SPLUNK_REALM}.signalfx.com/v2/trace
      signalfx:
        access_token: ${SPLUNK_ACCESS_TOKEN}
        api_url: https://api.${SPLUNK_REALM}.signalfx.com
        ingest_url: https://ingest.${SPLUNK_REALM}.signalfx.com
    extensions:
      health_check: null
      http_forwarder:
        egress:
          endpoint: https://api.${SPLUNK_REALM}.signalfx.com
      memory_ballast:
        size_mib: ${SPLUNK_BALLAST_SIZE_MIB}
      zpages: null
    processors:
      batch: null
      filter/logs:
        logs:
          exclude:
            match_type: strict
            resource_attributes:
            - key: splunk.com/exclude
              value: "true"
      k8sattributes:
        extract:
          annotations:
          - from: pod
            key: splunk.com/sourcetype
          - from: namespace
            key: splunk.com/exclude
            tag_name: splunk.com/exclude
          - from: pod
            key: splunk.com/exclude
            tag_name: splunk.com/exclude
          - from: namespace
            key: splunk.com/index
            tag_name: com.splunk.index
          - from: pod
            key: splunk.com/index
            tag_name: com.splunk.index
          labels:
          - key: app
          metadata:
          - k8s.namespace.name
          - k8s.node.name
          - k8s.pod.name
          - k8s.pod.uid
        pod_association:
        - from: resource_attribute
          name: k8s.pod.uid
        - from: resource_attribute
          name: k8s.pod.ip
        - from: resource_attribute
          name: ip
        - from: connection
        - from: resource_attribute
          name: host.name
      memory_limiter:
        check_interval: 2s
        limit_mib: ${SPLUNK_MEMORY_LIMIT_MIB}
      resource/add_cluster_name:
        attributes:
        - action: upsert
          key: k8s.cluster.name
          value: ${MY_CLUSTER_NAME}
      resource/add_collector_k8s:
        attributes:
        - action: insert
          key: k8s.node.name
          value: ${K8S_NODE_NAME}
        - action: insert
          key: k8s.pod.name
          value: ${K8S_POD_NAME}
        - action: insert
          key: k8s.pod.uid
          value: ${K8S_POD_UID}
        - action: insert
          key: k8s.namespace.name
          value: ${K8S_NAMESPACE}
      resource/logs:
        attributes:
        - action: upsert
          from_attribute: k8s.pod.annotations.splunk.com/sourcetype
          key: com.splunk.sourcetype
        - action: delete
          key: k8s.pod.annotations.splunk.com/sourcetype
        - action: delete
          key: splunk.com/exclude
      resourcedetection:
        detectors:
        - env
        - system
        override: true
        timeout: 10s
    receivers:
      jaeger:
        protocols:
          grpc:
            endpoint: 0.0.0.0:14250
          thrift_http:
            endpoint: 0.0.0.0:14268
      otlp:
        protocols:
          grpc:
            endpoint: 0.0.0.0:4317
          http:
            endpoint: 0.0.0.0:4318
      prometheus/collector:
        config:
          scrape_configs:
          - job_name: otel-collector
            scrape_interval: 10s
            static_configs:
            - targets:
              - ${K8S_POD_IP}:8889
      signalfx:
        access_token_passthrough: true
        endpoint: 0.0.0.0:9943
      zipkin:
        endpoint: 0.0.0.0:9411
    service:
      extensions:
      - health_check
      - memory_ballast
      - zpages
      - http_forwarder
      pipelines:
        logs/signalfx-events:
          exporters:
          - signalfx
          processors:
          - memory_limiter
          - batch
          receivers:
          - signalfx
        metrics:
          exporters:
          - signalfx
          processors:
          - memory_limiter
          - batch
          - resource/add_cluster_name
          receivers:
          - otlp
          - signalfx
        metrics/collector:
          exporters:
          - signalfx
          processors:
          - memory_limiter
          - batch
          - resource/add_collector_k8s
          - resourcedetection
          - resource/add_cluster_name
          receivers:
          - prometheus/collector
        traces:
          exporters:
          - sapm
          processors:
          - memory_limiter
          - batch
          - k8sattributes
          - resource/add_cluster_name
          receivers:
          - otlp
          - jaeger
          - zipkin
      telemetry:
        metrics:
          address: 0.0.0.0:8889
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::agent(CollectorRole::Agent, Distribution::Kubernetes, DEFAULT_AGENT_CONFIG)]
    #[case::agent_openshift(CollectorRole::Agent, Distribution::Openshift, DEFAULT_AGENT_CONFIG)]
    #[case::cluster_receiver(
        CollectorRole::ClusterReceiver,
        Distribution::Kubernetes,
        DEFAULT_CLUSTER_RECEIVER_CONFIG
    )]
    #[case::cluster_receiver_openshift(
        CollectorRole::ClusterReceiver,
        Distribution::Openshift,
        DEFAULT_CLUSTER_RECEIVER_CONFIG_OPENSHIFT
    )]
    #[case::gateway(CollectorRole::Gateway, Distribution::Kubernetes, DEFAULT_GATEWAY_CONFIG)]
    #[case::gateway_openshift(
        CollectorRole::Gateway,
        Distribution::Openshift,
        DEFAULT_GATEWAY_CONFIG
    )]
    fn config_selection_is_role_keyed(
        #[case] role: CollectorRole,
        #[case] distribution: Distribution,
        #[case] expected: &str,
    ) {
        assert_eq!(default_config(role, distribution), expected);
    }

    #[rstest]
    #[case::agent(CollectorRole::Agent, "200m", "500Mi")]
    #[case::cluster_receiver(CollectorRole::ClusterReceiver, "200m", "500Mi")]
    #[case::gateway(CollectorRole::Gateway, "4", "8Gi")]
    fn sizing_defaults_per_role(
        #[case] role: CollectorRole,
        #[case] cpu: &'static str,
        #[case] memory: &'static str,
    ) {
        assert_eq!(default_resources(role), ResourceSizing { cpu, memory });
    }

    #[test]
    fn sizing_converts_to_a_quantity_resource_list() {
        let resources = default_resources(CollectorRole::Gateway).to_resource_list();

        assert_eq!(resources["cpu"], Quantity("4".to_string()));
        assert_eq!(resources["memory"], Quantity("8Gi".to_string()));
    }

    #[test]
    fn roles_and_distributions_deserialize_from_config_keys() {
        assert_eq!(
            serde_yaml::from_str::<CollectorRole>("cluster-receiver").unwrap(),
            CollectorRole::ClusterReceiver
        );
        assert_eq!(
            serde_yaml::from_str::<Distribution>("openshift").unwrap(),
            Distribution::Openshift
        );
        assert_eq!(Distribution::default(), Distribution::Kubernetes);
    }
}

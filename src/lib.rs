//! # Splunk OpenTelemetry Collector operator defaults
//!
//! This library provides the defaults layer consumed by the operator's
//! reconciliation loop: the canonical collector configuration documents for
//! each deployment role, default resource sizing, the pinned
//! auto-instrumentation image, and helpers to describe container environment
//! variables.
//!
//! Placeholder tokens (`${NAME}`) embedded in the default documents are left
//! unresolved here; substitution happens at pod-start time, outside this
//! crate.

pub mod collector;
pub mod instrumentation;
pub mod k8s;

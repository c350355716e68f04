//! Core types for graphkit.
//!
//! Provides the graph data model ([`graph::Graph`], [`graph::GraphBuilder`]), the
//! shared error type, and configuration loading for edge-list front ends.

pub mod config;
pub mod error;
pub mod graph;

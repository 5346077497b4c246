//! Taskgraph - a small REST facade over a bolt-protocol graph database
//!
//! This crate exposes Person and Task resources, plus the ASSIGNED_TO
//! relationship between them, as a JSON HTTP API backed by a Neo4j-compatible
//! server.

pub mod api;
pub mod config;
pub mod graph;
pub mod utils;

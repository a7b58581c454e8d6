//! # Planner Rust Backend
//!
//! Task planning analysis engine.
//!
//! This crate provides a Rust backend for the planner suite: it turns a flat
//! list of user tasks into a packed daily agenda, classifies incomplete items
//! against their due dates, and aggregates completed work into weekly
//! summaries. The backend exposes a REST API via Axum for calling clients.
//!
//! ## Features
//!
//! - **Agenda Scheduling**: first-fit-in-order packing of task durations
//!   into a fixed workday window
//! - **Deadline Classification**: overdue and at-risk partitioning relative
//!   to a reference date, with severity tiers
//! - **Weekly Aggregation**: per-category counts and duration totals over an
//!   inclusive date window
//! - **HTTP API**: RESTful endpoints for client integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`models`]: domain value types (wall-clock times, date helpers)
//! - [`services`]: the three stateless computation engines
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Every request is a complete, self-contained computation: the engines hold
//! no state between calls and allocate their own working set per invocation.

pub mod api;

pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

//! HTTP server module for the planner backend.
//!
//! This module provides an axum-based HTTP server that exposes the three
//! planning engines as a REST API. It reuses the service layer and DTOs
//! from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and top-level validation               │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Item validation                                        │
//! │  - Scheduling, classification, aggregation                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no repository layer: every operation is a stateless computation
//! over its request payload, so the router carries no shared state.

pub mod handlers;

pub mod router;

pub mod error;

pub mod dto;

pub use router::create_router;

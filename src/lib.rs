//! Courier: send shared content to one pre-selected contact.
//!
//! This crate provides the share-extension core: it takes the heterogeneous
//! content a share sheet hands over, negotiates a usable representation for
//! each piece, and assembles a message draft for the configured recipient.
//!
//! # Architecture
//!
//! Courier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`share`]: Share-extension content resolution and draft hand-off

pub mod share;

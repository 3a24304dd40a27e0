//! Core Kernel - Foundational types and utilities for the claims sentinel
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers
//! - Common error and port abstractions

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{ClaimId, AlertId, AuditEventId};
pub use error::CoreError;
pub use ports::{PortError, DomainPort};

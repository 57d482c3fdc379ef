//! Core Kernel - Foundational types and utilities for the pricing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Currency descriptors with ISO 4217 codes and minor-unit factors
//! - Currency-aware rounding for monetary amounts

pub mod currency;

pub use currency::{Currency, CurrencyError};

//! Internal utilities shared across the vouch workspace
//!
//! Nothing in here is part of the public protocol surface; the modules
//! exist so that security-sensitive helpers are written once and audited
//! once.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;

//! amarshop: a mock storefront backed by a local state store.
//!
//! The [`store::Store`] owns products, cart, user, orders and theme, and
//! mirrors the persisted slices through [`storage`]. The HTTP storefront in
//! [`server`] and the CLI both drive that same store.

pub mod admin;
pub mod catalog;
pub mod checkout;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod mvi;
pub mod server;
pub mod storage;
pub mod store;

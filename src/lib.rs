//! HTTP API for the Biryani Delivery System.
//!
//! Orders, products and rider locations live in a hosted relational store
//! reached over its REST table API. Each endpoint validates its input,
//! forwards a single operation to the store and relays the result.

pub mod config;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod store;

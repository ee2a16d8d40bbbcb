//! MCP tool handlers for the todo.txt server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod complete;
pub mod list;
pub mod tags;

//! Shared plumbing for the agent demos: an OpenAI-compatible client
//! builder and the HTTP-backed tools (web search, email delivery) that
//! agents call during their tool-use loops.

pub mod client;
pub mod tools;

pub use client::{completions_client, Endpoint};
pub use tools::{SendEmailTool, ToolError, WebSearchTool};

// MCP (Model Context Protocol) server for the Hey Bible API
// Exposes the verses, notes, and images read operations as tools over stdio

pub mod server;
pub mod tools;

pub use server::HeyBibleServer;

pub mod bible;
mod registry;

pub use bible::{GetImagesTool, GetNotesTool, GetVersesTool};
pub use registry::{json_schema_number, json_schema_object, Tool, ToolRegistry};

// IO module: reading net descriptions
// Streaming parser for the PERIODIC_GRAPH block format.

// ======================== MODULE DECLARATIONS ========================
pub mod parser;

// Test modules
mod _tests_parser;

// ======================== NET SOURCES ========================
pub use parser::{
    parse_nets, // fn(&str) -> Result<Vec<ParsedNet>> - parse an in-memory source
    NetSource,  // struct - streaming block reader over any BufRead
    ParsedNet,  // struct - parsed net plus optional name
};

//! Report presentation: label tables, assembly and document rendering.
//!
//! Everything here consumes the output of the calculation module and holds
//! no attendance rules of its own.

mod assembler;
mod labels;
mod renderer;

pub use assembler::{DEFAULT_OUTPUT_PREFIX, assemble_report, output_file_name, output_path};
pub use labels::Language;
pub use renderer::{
    DEFAULT_ROWS_PER_PAGE, DocumentRenderer, JsonRenderer, OutputFormat, TextRenderer,
    write_report,
};

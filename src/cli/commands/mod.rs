mod command_result;
pub mod scan;

pub use command_result::*;

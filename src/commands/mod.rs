//! CLI commands

pub mod sync;

use crate::config::EXAMPLE_CONFIG;

/// Print the example configuration document
pub fn print_example() {
    print!("{EXAMPLE_CONFIG}");
}

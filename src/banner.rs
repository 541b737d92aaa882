//! Startup banner display.

use crate::consts::{STAR, VENUE};

/// Print the two-line welcome banner.
pub fn print_banner() {
    println!("Welcome to {}, the oracle of {}.", STAR, VENUE);
    println!("Your questions will be answered in due time.");
}

//! Decision-cycle execution and headless tick advancement.
//! This file wires focused engine submodules together.

use super::*;

mod advance;
mod cycle;

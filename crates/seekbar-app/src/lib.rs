// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod catalog;
pub mod geometry;
pub mod highlight;
pub mod model;
pub mod search;
pub mod state;
pub mod timer;

pub use catalog::*;
pub use geometry::*;
pub use highlight::{Segment, highlight};
pub use model::*;
pub use search::*;
pub use state::*;
pub use timer::*;

// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

/// A terminal cell position, column first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A rectangle of terminal cells. Empty regions contain no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && (point.x as u32) < self.x as u32 + self.width as u32
            && (point.y as u32) < self.y as u32 + self.height as u32
    }
}

pub fn any_contains(regions: &[Region], point: Point) -> bool {
    regions.iter().any(|region| region.contains(point))
}

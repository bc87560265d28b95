//! Measurement port
//!
//! Gesture and transition controllers never read geometry on their own; they
//! ask a `MeasurePort` at the moment a gesture starts or a view opens.

use std::collections::HashMap;

/// Axis-aligned rectangle in the front-end's pixel unit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Elements whose geometry the interaction core may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// The draggable list item of the gesture card
    SwipeItem,
    /// Container the detail overlay grows into
    NavigationStage,
    /// A selectable tile inside the navigation stage
    NavigationItem(usize),
}

/// Synchronous geometry lookup; `None` when the element is not laid out
pub trait MeasurePort {
    fn rect(&self, element: Element) -> Option<Rect>;

    fn width(&self, element: Element) -> Option<f64> {
        self.rect(element).map(|r| r.width)
    }
}

/// Geometry recorded from the last layout pass
#[derive(Debug, Clone, Default)]
pub struct LayoutSnapshot {
    rects: HashMap<Element, Rect>,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, element: Element, rect: Rect) {
        self.rects.insert(element, rect);
    }

    pub fn with(mut self, element: Element, rect: Rect) -> Self {
        self.set(element, rect);
        self
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    /// First navigation item containing the point
    pub fn navigation_item_at(&self, x: f64, y: f64) -> Option<usize> {
        self.rects
            .iter()
            .filter_map(|(element, rect)| match element {
                Element::NavigationItem(i) if rect.contains(x, y) => Some(*i),
                _ => None,
            })
            .min()
    }
}

impl MeasurePort for LayoutSnapshot {
    fn rect(&self, element: Element) -> Option<Rect> {
        self.rects.get(&element).copied()
    }
}

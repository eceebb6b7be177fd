//! ## boxtree
//!
//! An in-memory R-tree over axis-aligned 2-D boxes tagged by `i32` ids.
//!
//! ```
//! use boxtree::geometry::{Box2, Point2};
//! use boxtree::rtree::RTree;
//!
//! let mut tree = RTree::new();
//! tree.insert(Box2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)), 1).unwrap();
//! tree.insert(Box2::new(Point2::new(2.0, 2.0), Point2::new(3.0, 3.0)), 2).unwrap();
//!
//! let hits = tree.query_range(&Box2::new(Point2::new(0.5, 0.5), Point2::new(2.5, 2.5)));
//! assert_eq!(hits.len(), 2);
//! ```

pub mod exceptions;
pub mod geometry;
mod logging;
pub mod rtree;

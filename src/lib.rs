//! 2D geometry for real-time collision detection between circular entities and polygonal walls.


pub mod domain;

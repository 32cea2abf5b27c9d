//! # Pixel Wall-E
//!
//! A tiny line-oriented language for painting on a square pixel canvas.
//!
//! A robot is placed on the canvas with `Spawn`, loaded with paint and a
//! brush width, then sent drawing lines, circles and rectangles or flooding
//! areas with color. Variables, labels and conditional `GoTo` make loops.
//!
//! ```text
//! Spawn(2, 2)
//! Color("Red")
//! DrawLine(1, 0, 3)
//! ```
//!
//! The `walle` executable runs a program file and prints the canvas.
//! [`mach::Runtime`] is the embedding interface for other hosts.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;

//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Keeps letters only and lowercases them
//! - **Triplet**: Extracts 3-character sequences for counting

pub mod normalizer;
pub mod triplet;

pub use normalizer::{is_letter, LetterNormalizer};
pub use triplet::{SlidingWindowExtractor, TripletExtractor};

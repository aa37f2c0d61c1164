//! Distance and travel time matrices.
//!
//! Provides a dense, validated cost matrix and a distance/duration pair.

mod matrix;
mod travel;

pub use matrix::DistanceMatrix;
pub use travel::TravelMatrices;

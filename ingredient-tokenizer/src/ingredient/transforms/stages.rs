//! Individual transformation stages
//!
//! This module contains the individual stages that can be composed into pipelines.
//! Each stage implements the `Runnable` trait.

pub mod clumping;
pub mod normalization;
pub mod splitting;

pub use clumping::FractionClumping;
pub use normalization::Normalization;
pub use splitting::Splitting;

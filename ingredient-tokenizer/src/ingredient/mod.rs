//! Main module for ingredient phrase processing

pub mod fractions;
pub mod loader;
pub mod normalization;
pub mod tokenization;
pub mod transforms;

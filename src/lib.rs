//! Core pipeline for the Appwrite file uploader: connection config,
//! file selection, and the sequential upload-batch driver. The egui
//! front end lives in the binary.

pub mod config;
pub mod selection;
pub mod upload;
pub mod utils;

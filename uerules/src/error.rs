use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while evaluating a build description.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),
    #[error("Descriptor invalid: {0}")]
    InvalidDescriptor(String),
    #[error("Unknown target platform '{0}' (expected Win64, Win32, Mac, Linux, Android or IOS)")]
    UnknownPlatform(String),
    #[error("Unknown target type '{0}' (expected Game, Editor, Client, Server or Program)")]
    UnknownTargetType(String),
}

//! Service container for dependency injection
//!
//! Wires up the input loader with its I/O dependencies.

use std::sync::Arc;

use crate::application::InputLoader;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, Prompt, RealFileSystem, StdinPrompt};

/// Container holding settings and I/O implementations.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,

    /// Manual entry prompt
    pub prompt: Arc<dyn Prompt>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem), Arc::new(StdinPrompt))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>, prompt: Arc<dyn Prompt>) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            fs,
            prompt,
        }
    }

    /// Input loader splitting on `delimiter` (CLI flag or `input.delimiter`).
    pub fn input_loader_with(&self, delimiter: char) -> InputLoader {
        InputLoader::new(Arc::clone(&self.fs), delimiter)
    }
}

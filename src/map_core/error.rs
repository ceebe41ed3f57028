use thiserror::Error;

/// Errors produced by the map core. All variants are local and
/// non-retryable; nothing here is recovered internally.
#[derive(Debug, Error)]
pub enum MapError {
    /// Invalid generation parameters or threshold table, caught before
    /// any grid work starts.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Coordinate query outside the grid extent.
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Malformed or size-inconsistent persisted document.
    #[error("malformed map document: {0}")]
    Format(String),

    /// Biome classification requested without an attached moisture map.
    #[error("no moisture map attached")]
    MissingMoisture,
}

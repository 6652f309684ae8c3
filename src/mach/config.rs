/// ## Machine configuration
///
/// Fixed at construction. The defaults match the robot: a 1 KiB store
/// with the program starting at offset 20, and no diagnostic output.

#[derive(Debug, Clone)]
pub struct Config {
    pub store_size: usize,
    pub program_offset: usize,
    pub diagnostics: u8,
    /// Reported by `IV`.
    pub version: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_size: 1024,
            program_offset: 20,
            diagnostics: 0,
            version: format!("Version {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

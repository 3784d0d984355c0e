// Constants for the tape interpreter

/// Number of cells on a freshly constructed tape
pub const MEMORY_SIZE: usize = 3000;

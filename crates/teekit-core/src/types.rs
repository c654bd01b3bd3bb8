//! Shared type definitions.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The physical face of the product an element is printed on.
///
/// Every design element belongs to exactly one side, and elements are
/// filtered by side everywhere they are rendered or captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintSide {
    Front,
    Back,
}

impl PrintSide {
    /// Both sides, in capture order.
    pub const ALL: [PrintSide; 2] = [PrintSide::Front, PrintSide::Back];

    pub fn opposite(self) -> Self {
        match self {
            PrintSide::Front => PrintSide::Back,
            PrintSide::Back => PrintSide::Front,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PrintSide::Front => "front",
            PrintSide::Back => "back",
        }
    }
}

impl fmt::Display for PrintSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shared callback type for progress/phase listeners.
pub type Listener<T> = Arc<dyn Fn(T) + Send + Sync>;

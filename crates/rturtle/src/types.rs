use anyhow::{Context, Result};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Position and heading of the plotter, threaded from one contour to the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotterState {
    /// Facing direction in radians, measured like `atan2`.
    pub heading: f64,
    pub position: Point,
}

impl PlotterState {
    /// Facing along +x at the origin.
    pub fn home() -> Self {
        Self {
            heading: 0.0,
            position: Point::ORIGIN,
        }
    }
}

impl Default for PlotterState {
    fn default() -> Self {
        Self::home()
    }
}

/// A single relative plotter instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    SetFillColor(String),
    /// Degrees.
    TurnRight(f64),
    /// Degrees.
    TurnLeft(f64),
    Forward(f64),
    PenDown,
    PenUp,
    BeginFill,
    EndFill,
}

/// Dialect-independent list of plotter commands for a whole outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionProgram {
    pub commands: Vec<Command>,
}

/// Represents the final textual command script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Script {
    /// One instruction per line.
    pub lines: Vec<String>,
}

impl Script {
    /// Join the lines with newlines, ending with a trailing newline.
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    /// Write the script to `path`, creating parent directories as needed.
    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create script directory {}", parent.display()))?;
        }
        fs::write(path, self.to_text())
            .with_context(|| format!("write script {}", path.display()))
    }
}

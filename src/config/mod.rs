//! Layout and renderer configuration.
//!
//! Both structs deserialize from JSON so applications can keep them next to
//! their other settings; every field has a default.

use serde::Deserialize;

use crate::error::Result;

/// What the resolver does with a node whose bounds leave the container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// An axis wider than the container is reset to the container's extents;
    /// the computed anchor on that axis is discarded.
    #[default]
    Reset,
    /// Shift the node back inside the container, keeping its size where it
    /// fits.
    Translate,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Emit one trace record per resolved node.
    pub trace: bool,
    pub overflow: OverflowPolicy,
    /// Intersect resolved bounds with the container after the overflow step.
    pub clip_to_container: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            trace: false,
            overflow: OverflowPolicy::Reset,
            clip_to_container: true,
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Renderer runtime parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RendererSettings {
    /// 0-based `(row, col)` to park the cursor at after a frame.
    pub restore_cursor: Option<(u16, u16)>,
    pub hide_cursor: bool,
    /// Repaint every row instead of only rows that changed since the last
    /// frame.
    pub full_redraw: bool,
}

impl RendererSettings {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

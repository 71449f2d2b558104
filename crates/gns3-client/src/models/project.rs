//! Project records and payloads.

use gns3_core::ids::ProjectId;
use gns3_core::types::status;
use serde::{Deserialize, Serialize};

use super::ExtraProperties;

/// Supplier shown in the project's topology summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSupplier {
    /// Path of the supplier logo.
    pub logo: String,
    /// Supplier URL.
    pub url: String,
}

/// Project variable, available to node templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectVariable {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub value: String,
}

impl ProjectVariable {
    /// Create a variable.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Project representation returned by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Project identifier.
    pub project_id: ProjectId,
    /// Project directory on the server.
    pub path: Option<String>,
    /// Project file name.
    pub filename: Option<String>,
    /// `opened` or `closed`.
    pub status: String,
    /// Close the project when the last client disconnects.
    pub auto_close: bool,
    /// Open the project when the server starts.
    pub auto_open: bool,
    /// Start all nodes when the project is opened.
    pub auto_start: bool,
    /// Scene height in pixels.
    pub scene_height: i32,
    /// Scene width in pixels.
    pub scene_width: i32,
    /// Zoom level in percent.
    pub zoom: i32,
    /// Show layers on the drawing area.
    pub show_layers: bool,
    /// Snap nodes to the grid.
    pub snap_to_grid: bool,
    /// Show the grid.
    pub show_grid: bool,
    /// Node grid size.
    pub grid_size: i32,
    /// Drawing grid size.
    pub drawing_grid_size: i32,
    /// Show interface labels.
    pub show_interface_labels: bool,
    /// Supplier information.
    pub supplier: Option<ProjectSupplier>,
    /// Project variables.
    pub variables: Option<Vec<ProjectVariable>>,
}

impl Project {
    /// Returns true if the project is opened.
    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.status == status::OPENED
    }

    /// Returns true if the project is closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status == status::CLOSED
    }
}

/// Partial project payload used to create and update projects.
///
/// Only fields that were set are sent. `supplier` and `variables` are doubly
/// optional: `Some(None)` sends an explicit `null`, which removes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectPatch {
    /// Project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Client-chosen project identifier (create only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
    /// Project directory on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Close the project when the last client disconnects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_close: Option<bool>,
    /// Open the project when the server starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_open: Option<bool>,
    /// Start all nodes when the project is opened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_start: Option<bool>,
    /// Scene height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_height: Option<i32>,
    /// Scene width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_width: Option<i32>,
    /// Zoom level in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zoom: Option<i32>,
    /// Show layers on the drawing area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_layers: Option<bool>,
    /// Snap nodes to the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_to_grid: Option<bool>,
    /// Show the grid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_grid: Option<bool>,
    /// Node grid size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<i32>,
    /// Drawing grid size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawing_grid_size: Option<i32>,
    /// Show interface labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_interface_labels: Option<bool>,
    /// Supplier, `Some(None)` to remove it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Option<ProjectSupplier>>,
    /// Variables, `Some(None)` to remove them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Option<Vec<ProjectVariable>>>,
    /// Additional raw properties.
    #[serde(flatten)]
    pub extra: ExtraProperties,
}

impl ProjectPatch {
    /// Create an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a patch carrying only a name, the minimal create payload.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    /// Set the project name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Choose the project identifier instead of letting the server assign one.
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<ProjectId>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Set the project directory.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set whether the project closes when the last client disconnects.
    #[must_use]
    pub const fn with_auto_close(mut self, auto_close: bool) -> Self {
        self.auto_close = Some(auto_close);
        self
    }

    /// Set whether the project opens when the server starts.
    #[must_use]
    pub const fn with_auto_open(mut self, auto_open: bool) -> Self {
        self.auto_open = Some(auto_open);
        self
    }

    /// Set whether nodes start when the project is opened.
    #[must_use]
    pub const fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = Some(auto_start);
        self
    }

    /// Set the scene height.
    #[must_use]
    pub const fn with_scene_height(mut self, height: i32) -> Self {
        self.scene_height = Some(height);
        self
    }

    /// Set the scene width.
    #[must_use]
    pub const fn with_scene_width(mut self, width: i32) -> Self {
        self.scene_width = Some(width);
        self
    }

    /// Set the zoom level.
    #[must_use]
    pub const fn with_zoom(mut self, zoom: i32) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// Set whether layers are shown.
    #[must_use]
    pub const fn with_show_layers(mut self, show_layers: bool) -> Self {
        self.show_layers = Some(show_layers);
        self
    }

    /// Set whether nodes snap to the grid.
    #[must_use]
    pub const fn with_snap_to_grid(mut self, snap_to_grid: bool) -> Self {
        self.snap_to_grid = Some(snap_to_grid);
        self
    }

    /// Set whether the grid is shown.
    #[must_use]
    pub const fn with_show_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = Some(show_grid);
        self
    }

    /// Set the node grid size.
    #[must_use]
    pub const fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = Some(grid_size);
        self
    }

    /// Set the drawing grid size.
    #[must_use]
    pub const fn with_drawing_grid_size(mut self, grid_size: i32) -> Self {
        self.drawing_grid_size = Some(grid_size);
        self
    }

    /// Set whether interface labels are shown.
    #[must_use]
    pub const fn with_show_interface_labels(mut self, show: bool) -> Self {
        self.show_interface_labels = Some(show);
        self
    }

    /// Set the supplier.
    #[must_use]
    pub fn with_supplier(mut self, logo: impl Into<String>, url: impl Into<String>) -> Self {
        self.supplier = Some(Some(ProjectSupplier {
            logo: logo.into(),
            url: url.into(),
        }));
        self
    }

    /// Remove the supplier.
    #[must_use]
    pub fn without_supplier(mut self) -> Self {
        self.supplier = Some(None);
        self
    }

    /// Set the variables.
    #[must_use]
    pub fn with_variables(mut self, variables: Vec<ProjectVariable>) -> Self {
        self.variables = Some(Some(variables));
        self
    }

    /// Remove all variables.
    #[must_use]
    pub fn without_variables(mut self) -> Self {
        self.variables = Some(None);
        self
    }

    /// Send an arbitrary property.
    ///
    /// `name` should not repeat a typed field, the server would receive both.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }
}

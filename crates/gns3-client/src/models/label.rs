//! Text labels attached to nodes and link endpoints.

use serde::{Deserialize, Serialize};

/// Label as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    /// Label text.
    pub text: String,
    /// SVG style of the text.
    pub style: Option<String>,
    /// Horizontal offset from the owner, `None` when centered by the server.
    pub x: Option<i32>,
    /// Vertical offset from the owner.
    pub y: Option<i32>,
    /// Rotation in degrees.
    pub rotation: i32,
}

/// Partial label payload.
///
/// `text` is always serialized since the server rejects labels without it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LabelPatch {
    /// Label text, empty unless set.
    pub text: String,
    /// Horizontal offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,
    /// Vertical offset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
    /// Rotation in degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i32>,
    /// SVG style of the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl LabelPatch {
    /// Create an empty label patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the horizontal offset.
    #[must_use]
    pub const fn with_x(mut self, x: i32) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the vertical offset.
    #[must_use]
    pub const fn with_y(mut self, y: i32) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the rotation in degrees.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: i32) -> Self {
        self.rotation = Some(rotation);
        self
    }

    /// Set the SVG style.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

/// Generates the `with_label_*` setters of a patch owning an optional label.
///
/// The label starts absent and is created with an empty `text` by whichever
/// setter runs first.
macro_rules! label_setters {
    ($patch:ty) => {
        impl $patch {
            fn label_mut(&mut self) -> &mut $crate::models::LabelPatch {
                self.label.get_or_insert_with($crate::models::LabelPatch::default)
            }

            /// Replace the whole label.
            #[must_use]
            pub fn with_label(mut self, label: $crate::models::LabelPatch) -> Self {
                self.label = Some(label);
                self
            }

            /// Set the label text.
            #[must_use]
            pub fn with_label_text(mut self, text: impl Into<String>) -> Self {
                self.label_mut().text = text.into();
                self
            }

            /// Set the label horizontal offset.
            #[must_use]
            pub fn with_label_x(mut self, x: i32) -> Self {
                self.label_mut().x = Some(x);
                self
            }

            /// Set the label vertical offset.
            #[must_use]
            pub fn with_label_y(mut self, y: i32) -> Self {
                self.label_mut().y = Some(y);
                self
            }

            /// Set the label rotation in degrees.
            #[must_use]
            pub fn with_label_rotation(mut self, rotation: i32) -> Self {
                self.label_mut().rotation = Some(rotation);
                self
            }

            /// Set the label SVG style.
            #[must_use]
            pub fn with_label_style(mut self, style: impl Into<String>) -> Self {
                self.label_mut().style = Some(style.into());
                self
            }
        }
    };
}

pub(crate) use label_setters;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_patch_carries_text() {
        assert_eq!(
            serde_json::to_value(LabelPatch::new()).unwrap(),
            json!({"text": ""})
        );
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let patch = LabelPatch::new().with_text("R1").with_rotation(45);
        assert_eq!(
            serde_json::to_value(patch).unwrap(),
            json!({"text": "R1", "rotation": 45})
        );
    }

    #[test]
    fn label_tolerates_null_offsets() {
        let label: Label = serde_json::from_value(json!({
            "text": "PC1",
            "style": "font-size: 10",
            "x": null,
            "y": -25,
            "rotation": 0
        }))
        .unwrap();
        assert_eq!(label.text, "PC1");
        assert_eq!(label.x, None);
        assert_eq!(label.y, Some(-25));
    }
}

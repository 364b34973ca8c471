//! Icon abstraction
//!
//! Views ask for icons by [`IconName`]; the icon library is chosen once from
//! config and every view renders through the same [`IconSet`].

use serde::{Deserialize, Serialize};

/// Icons used across the bubble, translate and settings views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IconName {
    GripVertical,
    ArrowExpand,
    ArrowUp,
    Pin,
    Add,
    Cancel,
    Tick,
    Copy,
    VolumeOff,
    VolumeLow,
    VolumeHigh,
    History,
}

/// Available icon libraries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconLibrary {
    #[default]
    Lucide,
    Hugeicons,
}

/// Caller-supplied render properties
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconProps {
    pub class_name: Option<String>,
    pub size: Option<u32>,
}

/// What the rendering layer should draw
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    pub library: IconLibrary,
    /// Glyph identifier inside the library
    pub glyph: &'static str,
    pub class_name: Option<String>,
    pub size: Option<u32>,
    pub stroke_width: Option<f32>,
}

/// One icon library
pub trait IconSet: Send + Sync {
    fn library(&self) -> IconLibrary;
    fn glyph(&self, name: IconName) -> &'static str;

    fn stroke_width(&self) -> Option<f32> {
        None
    }

    fn render(&self, name: IconName, props: &IconProps) -> IconSpec {
        IconSpec {
            library: self.library(),
            glyph: self.glyph(name),
            class_name: props.class_name.clone(),
            size: props.size,
            stroke_width: self.stroke_width(),
        }
    }
}

pub struct LucideIcons;

impl IconSet for LucideIcons {
    fn library(&self) -> IconLibrary {
        IconLibrary::Lucide
    }

    fn glyph(&self, name: IconName) -> &'static str {
        match name {
            IconName::GripVertical => "grip-vertical",
            IconName::ArrowExpand => "maximize-2",
            IconName::ArrowUp => "chevron-up",
            IconName::Pin => "pin",
            IconName::Add => "plus",
            IconName::Cancel => "x",
            IconName::Tick => "check",
            IconName::Copy => "copy",
            IconName::VolumeOff => "volume-x",
            IconName::VolumeLow => "volume-1",
            IconName::VolumeHigh => "volume-2",
            IconName::History => "history",
        }
    }
}

/// Hugeicons, drawn with a fixed stroke width
pub struct HugeIcons;

impl IconSet for HugeIcons {
    fn library(&self) -> IconLibrary {
        IconLibrary::Hugeicons
    }

    fn glyph(&self, name: IconName) -> &'static str {
        match name {
            IconName::GripVertical => "DragDropVerticalIcon",
            IconName::ArrowExpand => "ArrowExpand01Icon",
            IconName::ArrowUp => "ArrowUpIcon",
            IconName::Pin => "Pin02Icon",
            IconName::Add => "Add01Icon",
            IconName::Cancel => "Cancel01Icon",
            IconName::Tick => "Tick02Icon",
            IconName::Copy => "Copy01Icon",
            IconName::VolumeOff => "VolumeOffIcon",
            IconName::VolumeLow => "VolumeLowIcon",
            IconName::VolumeHigh => "VolumeHighIcon",
            IconName::History => "History",
        }
    }

    fn stroke_width(&self) -> Option<f32> {
        Some(2.0)
    }
}

/// The icon set for a configured library
pub fn icon_set(library: IconLibrary) -> &'static dyn IconSet {
    match library {
        IconLibrary::Lucide => &LucideIcons,
        IconLibrary::Hugeicons => &HugeIcons,
    }
}

/// Icon for an auto-speak mode
pub fn auto_speak_icon(state: crate::settings::AutoSpeakState) -> IconName {
    use crate::settings::AutoSpeakState;
    match state {
        AutoSpeakState::Off => IconName::VolumeOff,
        AutoSpeakState::Single => IconName::VolumeLow,
        AutoSpeakState::All => IconName::VolumeHigh,
    }
}

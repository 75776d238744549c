use console_shell::CommandConsole;
use platform_host::ViewportMetrics;
use serde::{Deserialize, Serialize};

/// Minimum console window width.
pub const MIN_WINDOW_WIDTH: i32 = 400;
/// Minimum console window height.
pub const MIN_WINDOW_HEIGHT: i32 = 300;
/// Height of the bottom strip reserved for the taskbar.
pub const TASKBAR_HEIGHT_PX: i32 = 30;
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 600;

/// Size limits and defaults for the console window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameConfig {
    pub min_width: i32,
    pub min_height: i32,
    pub taskbar_height: i32,
    pub default_width: i32,
    pub default_height: i32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            taskbar_height: TASKBAR_HEIGHT_PX,
            default_width: DEFAULT_WINDOW_WIDTH,
            default_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn clamped_min(self, min_w: i32, min_h: i32) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Viewport the window is clamped into; the taskbar strip at the bottom is not usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub taskbar_height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32, taskbar_height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            taskbar_height: taskbar_height.max(0),
        }
    }

    pub fn from_metrics(metrics: ViewportMetrics, taskbar_height: i32) -> Self {
        Self::new(metrics.width, metrics.height, taskbar_height)
    }

    /// Height above the taskbar.
    pub fn usable_height(self) -> i32 {
        (self.height - self.taskbar_height).max(0)
    }

    /// The whole usable area as a rectangle anchored at the origin.
    pub fn usable_rect(self) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.width,
            h: self.usable_height(),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_metrics(ViewportMetrics::default(), TASKBAR_HEIGHT_PX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::North,
        ResizeEdge::South,
        ResizeEdge::East,
        ResizeEdge::West,
        ResizeEdge::NorthEast,
        ResizeEdge::NorthWest,
        ResizeEdge::SouthEast,
        ResizeEdge::SouthWest,
    ];

    pub fn moves_north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn moves_south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn moves_east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn moves_west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::North => "edge-n",
            Self::South => "edge-s",
            Self::East => "edge-e",
            Self::West => "edge-w",
            Self::NorthEast => "edge-ne",
            Self::NorthWest => "edge-nw",
            Self::SouthEast => "edge-se",
            Self::SouthWest => "edge-sw",
        }
    }

    /// CSS cursor shown while this edge is dragged.
    pub fn cursor(self) -> &'static str {
        match self {
            Self::North | Self::South => "ns-resize",
            Self::East | Self::West => "ew-resize",
            Self::NorthWest | Self::SouthEast => "nwse-resize",
            Self::NorthEast | Self::SouthWest => "nesw-resize",
        }
    }
}

/// Transient pointer gesture. Only one can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        /// Pointer position relative to the window's top-left corner at drag start.
        pointer_offset: PointerPosition,
    },
    Resizing {
        edge: ResizeEdge,
        pointer_start: PointerPosition,
        rect_start: WindowRect,
    },
}

/// Console window geometry plus the active gesture.
///
/// Size never drops below the configured minimum, and the rectangle stays inside the usable
/// viewport whenever the viewport is at least as large as the minimum size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowFrame {
    pub(crate) config: FrameConfig,
    pub(crate) rect: WindowRect,
    pub(crate) maximized: bool,
    pub(crate) saved_rect: Option<WindowRect>,
    pub(crate) gesture: Gesture,
}

impl WindowFrame {
    pub fn config(&self) -> FrameConfig {
        self.config
    }

    pub fn rect(&self) -> WindowRect {
        self.rect
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Geometry captured when the window was maximized.
    pub fn saved_rect(&self) -> Option<WindowRect> {
        self.saved_rect
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }
}

/// Console visibility as driven by the desktop icon, taskbar, and title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConsoleVisibility {
    #[default]
    Open,
    Minimized,
    Closed,
}

impl ConsoleVisibility {
    pub fn is_rendered(self) -> bool {
        self == Self::Open
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub visibility: ConsoleVisibility,
    pub frame: WindowFrame,
    pub console: CommandConsole,
    pub start_menu_open: bool,
    pub booted: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(FrameConfig::default())
    }
}

impl DesktopState {
    pub fn new(config: FrameConfig) -> Self {
        Self {
            visibility: ConsoleVisibility::default(),
            frame: WindowFrame::centered(config, Viewport::default()),
            console: CommandConsole::new(),
            start_menu_open: false,
            booted: false,
        }
    }
}

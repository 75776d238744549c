//! Console window geometry transitions: drag, resize, maximize, and viewport reconciliation.

use crate::model::{
    FrameConfig, Gesture, PointerPosition, ResizeEdge, Viewport, WindowFrame, WindowRect,
};

/// Fits `rect` into the usable viewport: size is capped by the viewport and floored at the
/// minimum, then position is clamped so the rectangle stays on screen.
///
/// When the viewport is smaller than the minimum size, the minimum wins and the position is
/// pinned to the origin.
pub fn fit_rect_to_viewport(rect: WindowRect, viewport: Viewport, config: FrameConfig) -> WindowRect {
    let w = rect.w.min(viewport.width).max(config.min_width);
    let h = rect.h.min(viewport.usable_height()).max(config.min_height);
    clamp_position(WindowRect { w, h, ..rect }, viewport)
}

/// Clamps only the top-left corner into `[0, vw - w] x [0, usable_h - h]`.
pub fn clamp_position(rect: WindowRect, viewport: Viewport) -> WindowRect {
    let max_x = (viewport.width - rect.w).max(0);
    let max_y = (viewport.usable_height() - rect.h).max(0);
    WindowRect {
        x: rect.x.clamp(0, max_x),
        y: rect.y.clamp(0, max_y),
        ..rect
    }
}

/// Default-size rectangle centered in the usable viewport.
pub fn centered_rect(viewport: Viewport, config: FrameConfig) -> WindowRect {
    let sized = fit_rect_to_viewport(
        WindowRect {
            x: 0,
            y: 0,
            w: config.default_width,
            h: config.default_height,
        },
        viewport,
        config,
    );
    clamp_position(
        WindowRect {
            x: (viewport.width - sized.w) / 2,
            y: (viewport.usable_height() - sized.h) / 2,
            ..sized
        },
        viewport,
    )
}

/// Rectangle covering the whole usable viewport, floored at the minimum size.
pub fn maximized_rect(viewport: Viewport, config: FrameConfig) -> WindowRect {
    viewport
        .usable_rect()
        .clamped_min(config.min_width, config.min_height)
}

// Leading edge (west/north): the far edge stays fixed and the near edge follows the pointer
// until either the origin or the minimum length stops it.
fn resize_leading(start_pos: i32, start_len: i32, delta: i32, min: i32) -> (i32, i32) {
    let far = start_pos + start_len;
    let pos = (start_pos + delta).max(0).min(far - min);
    (pos, far - pos)
}

// Trailing edge (east/south): position is fixed and length follows the pointer up to the limit.
fn resize_trailing(start_pos: i32, start_len: i32, delta: i32, min: i32, limit: i32) -> (i32, i32) {
    let len = (start_len + delta).min(limit - start_pos).max(min);
    (start_pos, len)
}

/// Applies a pointer delta for `edge` to the rectangle captured at resize start.
pub fn resize_rect(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    viewport: Viewport,
    config: FrameConfig,
) -> WindowRect {
    let (x, w) = if edge.moves_west() {
        resize_leading(start.x, start.w, dx, config.min_width)
    } else if edge.moves_east() {
        resize_trailing(start.x, start.w, dx, config.min_width, viewport.width)
    } else {
        (start.x, start.w)
    };
    let (y, h) = if edge.moves_north() {
        resize_leading(start.y, start.h, dy, config.min_height)
    } else if edge.moves_south() {
        resize_trailing(
            start.y,
            start.h,
            dy,
            config.min_height,
            viewport.usable_height(),
        )
    } else {
        (start.y, start.h)
    };
    fit_rect_to_viewport(WindowRect { x, y, w, h }, viewport, config)
}

impl WindowFrame {
    /// Creates a frame with the default size centered in `viewport`.
    pub fn centered(config: FrameConfig, viewport: Viewport) -> Self {
        Self {
            config,
            rect: centered_rect(viewport, config),
            maximized: false,
            saved_rect: None,
            gesture: Gesture::Idle,
        }
    }

    /// Starts a move gesture. Rejected while maximized or while another gesture is active.
    pub fn begin_drag(&mut self, pointer: PointerPosition) -> bool {
        if self.maximized || self.gesture != Gesture::Idle {
            return false;
        }
        self.gesture = Gesture::Dragging {
            pointer_offset: PointerPosition {
                x: pointer.x - self.rect.x,
                y: pointer.y - self.rect.y,
            },
        };
        true
    }

    /// Starts a resize gesture on `edge`. Same preconditions as [`WindowFrame::begin_drag`].
    pub fn begin_resize(&mut self, edge: ResizeEdge, pointer: PointerPosition) -> bool {
        if self.maximized || self.gesture != Gesture::Idle {
            return false;
        }
        self.gesture = Gesture::Resizing {
            edge,
            pointer_start: pointer,
            rect_start: self.rect,
        };
        true
    }

    /// Feeds a pointer position into the active gesture. Returns `true` when geometry changed.
    pub fn pointer_move(&mut self, pointer: PointerPosition, viewport: Viewport) -> bool {
        let next = match self.gesture {
            Gesture::Idle => return false,
            Gesture::Dragging { pointer_offset } => clamp_position(
                WindowRect {
                    x: pointer.x - pointer_offset.x,
                    y: pointer.y - pointer_offset.y,
                    ..self.rect
                },
                viewport,
            ),
            Gesture::Resizing {
                edge,
                pointer_start,
                rect_start,
            } => resize_rect(
                rect_start,
                edge,
                pointer.x - pointer_start.x,
                pointer.y - pointer_start.y,
                viewport,
                self.config,
            ),
        };
        if next == self.rect {
            return false;
        }
        self.rect = next;
        true
    }

    /// Ends a move gesture. Geometry is left as the last pointer move put it.
    pub fn end_drag(&mut self) -> bool {
        if !matches!(self.gesture, Gesture::Dragging { .. }) {
            return false;
        }
        self.gesture = Gesture::Idle;
        true
    }

    pub fn end_resize(&mut self) -> bool {
        if !matches!(self.gesture, Gesture::Resizing { .. }) {
            return false;
        }
        self.gesture = Gesture::Idle;
        true
    }

    /// Ends whichever gesture is active. Used by the global pointer-release listener.
    pub fn end_gesture(&mut self) -> bool {
        self.end_drag() || self.end_resize()
    }

    /// Maximizes into the usable viewport or restores the saved geometry re-fitted to it.
    pub fn toggle_maximize(&mut self, viewport: Viewport) {
        self.gesture = Gesture::Idle;
        if self.maximized {
            let saved = self.saved_rect.take().unwrap_or(self.rect);
            self.rect = fit_rect_to_viewport(saved, viewport, self.config);
            self.maximized = false;
        } else {
            self.saved_rect = Some(self.rect);
            self.rect = maximized_rect(viewport, self.config);
            self.maximized = true;
        }
    }

    /// Re-fits the current geometry after the viewport changed. Maximize state is preserved.
    pub fn reconcile_to_viewport(&mut self, viewport: Viewport) -> bool {
        let next = if self.maximized {
            maximized_rect(viewport, self.config)
        } else {
            fit_rect_to_viewport(self.rect, viewport, self.config)
        };
        if next == self.rect {
            return false;
        }
        self.rect = next;
        true
    }
}

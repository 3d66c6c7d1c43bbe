use glam::Vec2;

/// Element bounds in client (viewport) pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Pointer offset from the element's center.
#[inline]
pub fn center_offset(pointer: Vec2, rect: Rect) -> Vec2 {
    pointer - rect.center()
}

/// Translation applied to a magnetic element; a non-positive damping disables the pull.
#[inline]
pub fn magnetic_offset(pointer: Vec2, rect: Rect, damping: f32) -> Vec2 {
    if damping <= 0.0 || !damping.is_finite() {
        return Vec2::ZERO;
    }
    center_offset(pointer, rect) / damping
}

/// Ripple overlay box in the element's local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleBox {
    pub size: f32,
    pub left: f32,
    pub top: f32,
}

impl RippleBox {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.size / 2.0, self.top + self.size / 2.0)
    }
}

/// Square sized to the larger side of `rect`, centered on the click point.
#[inline]
pub fn ripple_box(pointer: Vec2, rect: Rect) -> RippleBox {
    let size = rect.width.max(rect.height);
    let local = pointer - Vec2::new(rect.left, rect.top);
    RippleBox {
        size,
        left: local.x - size / 2.0,
        top: local.y - size / 2.0,
    }
}

// CSS value formatting
#[inline]
pub fn translate_css(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{}px", value)
}

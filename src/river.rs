// Rivers: static rectangles that own fish and eggs (by index).

use crate::collision::Rectf;
use crate::config::RiverRect;

pub struct River {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl River {
    pub fn new(rect: RiverRect) -> Self {
        River {
            x: rect.x,
            y: rect.y,
            width: rect.w,
            height: rect.h,
        }
    }

    pub fn bounds(&self) -> Rectf {
        Rectf::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_clicked(&self, px: f32, py: f32) -> bool {
        self.bounds().contains(px, py)
    }
}

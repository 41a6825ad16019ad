pub mod camera;
pub mod grid;
pub mod life;
pub mod palette;
pub mod rules;
pub mod seed;
pub mod simulation;
pub mod state;

pub mod prelude {
    use bevy::{color::Color, math::Vec2};

    pub const TICKS_PER_SECOND: f64 = 60.0;
    pub const BG_COLOR: Color = Color::srgb(0.0, 0.0, 0.0);

    pub const CANVAS_SIZE_PX: Vec2 = Vec2::new(500.0, 500.0);
    pub const CELL_SIZE_PX: f32 = 10.0;
    pub const BOARD_POS: Vec2 = Vec2::ZERO;

    pub const WINDOW_TITLE: &str = "Conway's Game of Life";

    /// Number of whole cells that fit along one canvas axis.
    #[inline]
    pub fn grid_dimension(canvas_px: f32, cell_px: f32) -> usize {
        (canvas_px / cell_px).round() as usize
    }

    #[cfg(test)]
    mod test {
        use super::*;

        #[test]
        fn default_layout() {
            assert_eq!(50, grid_dimension(CANVAS_SIZE_PX.x, CELL_SIZE_PX));
            assert_eq!(50, grid_dimension(CANVAS_SIZE_PX.y, CELL_SIZE_PX));
            assert_eq!(33, grid_dimension(500.0, 15.0));
            assert_eq!(34, grid_dimension(510.0, 15.2));
        }
    }
}

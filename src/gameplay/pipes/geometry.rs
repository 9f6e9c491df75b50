//! Pure layout arithmetic for one obstacle pair.
//!
//! All rolls happen in top-left screen coordinates over the playfield
//! (x right, y down), the frame the tuning values are written in; world
//! placement converts at the edge. The bottom segment is the remainder of
//! the field after gap and top segment, so unfavorable rolls can leave it
//! with zero or negative height; that pair is spawned as computed (the
//! bottom pipe then sits fully below the field) and reported by
//! [`PairLayout::is_degenerate`].

use bevy::prelude::Vec2;
use rand::Rng;

use crate::core::config::PipeConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairLayout {
    pub gap: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    pub field_height: f32,
}

impl PairLayout {
    pub fn new(gap: f32, top_height: f32, field_height: f32) -> Self {
        Self {
            gap,
            top_height,
            bottom_height: field_height - gap - top_height,
            field_height,
        }
    }

    pub fn roll(rng: &mut impl Rng, cfg: &PipeConfig, field_height: f32) -> Self {
        let gap = rng.gen_range(cfg.gap_range.min..=cfg.gap_range.max);
        let top_height = rng.gen_range(cfg.top_height_range.min..=cfg.top_height_range.max);
        Self::new(gap, top_height, field_height)
    }

    pub fn is_degenerate(&self) -> bool {
        self.bottom_height <= 0.0
    }

    /// World-space center of the top pipe body: its lower edge is the gap
    /// edge at screen y = top_height, the body extends upward from there.
    pub fn top_center(&self, cfg: &PipeConfig, field: Vec2) -> Vec2 {
        let edge = screen_to_world(Vec2::new(cfg.spawn_x, self.top_height), field);
        Vec2::new(edge.x, edge.y + cfg.body_height * 0.5)
    }

    /// World-space center of the bottom pipe body: its upper edge is at
    /// screen y = field_height - bottom_height, the body extends downward.
    pub fn bottom_center(&self, cfg: &PipeConfig, field: Vec2) -> Vec2 {
        let edge = screen_to_world(
            Vec2::new(cfg.spawn_x, self.field_height - self.bottom_height),
            field,
        );
        Vec2::new(edge.x, edge.y - cfg.body_height * 0.5)
    }
}

/// Top-left screen coordinates -> Y-up world coordinates centered on the field.
pub fn screen_to_world(p: Vec2, field: Vec2) -> Vec2 {
    Vec2::new(p.x - field.x * 0.5, field.y * 0.5 - p.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FIELD: Vec2 = Vec2::new(600.0, 400.0);

    #[test]
    fn reference_scenario() {
        // gap=150, top=100 over a 400 field leaves bottom=150.
        let layout = PairLayout::new(150.0, 100.0, 400.0);
        assert_eq!(layout.bottom_height, 150.0);
        assert!(!layout.is_degenerate());

        let cfg = PipeConfig::default();
        let top = layout.top_center(&cfg, FIELD);
        let bottom = layout.bottom_center(&cfg, FIELD);
        // Spawn column at screen x=700 is world x=400 for both pipes.
        assert_eq!(top.x, 400.0);
        assert_eq!(bottom.x, 400.0);
        // Gap edges: top body ends at world y=100, bottom body starts at -50.
        assert_eq!(top.y - cfg.body_height * 0.5, 100.0);
        assert_eq!(bottom.y + cfg.body_height * 0.5, -50.0);
        // The free corridor between the bodies is exactly the rolled gap.
        let corridor = (top.y - cfg.body_height * 0.5) - (bottom.y + cfg.body_height * 0.5);
        assert_eq!(corridor, layout.gap);
    }

    #[test]
    fn rolls_stay_in_configured_ranges() {
        let cfg = PipeConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let layout = PairLayout::roll(&mut rng, &cfg, 400.0);
            assert!((100.0..=200.0).contains(&layout.gap), "gap {}", layout.gap);
            assert!(
                (50.0..=200.0).contains(&layout.top_height),
                "top {}",
                layout.top_height
            );
            assert_eq!(
                layout.bottom_height,
                400.0 - layout.gap - layout.top_height
            );
        }
    }

    #[test]
    fn worst_case_roll_is_degenerate() {
        // gap=200 + top=200 consumes the whole 400 field.
        let layout = PairLayout::new(200.0, 200.0, 400.0);
        assert_eq!(layout.bottom_height, 0.0);
        assert!(layout.is_degenerate());

        let negative = PairLayout::new(200.0, 250.0, 400.0);
        assert!(negative.bottom_height < 0.0);
        assert!(negative.is_degenerate());
    }

    #[test]
    fn degenerate_bottom_sits_below_the_field() {
        let cfg = PipeConfig::default();
        let layout = PairLayout::new(200.0, 250.0, 400.0);
        let bottom = layout.bottom_center(&cfg, FIELD);
        // Upper edge of the bottom body is below the field's lower edge.
        assert!(bottom.y + cfg.body_height * 0.5 < -FIELD.y * 0.5);
    }

    #[test]
    fn screen_world_conversion() {
        assert_eq!(
            screen_to_world(Vec2::new(0.0, 0.0), FIELD),
            Vec2::new(-300.0, 200.0)
        );
        assert_eq!(
            screen_to_world(Vec2::new(300.0, 200.0), FIELD),
            Vec2::ZERO
        );
        assert_eq!(
            screen_to_world(Vec2::new(100.0, 300.0), FIELD),
            Vec2::new(-200.0, -100.0)
        );
    }
}

use std::fmt;
use std::ops::Range;

use crate::theme::Theme;

pub const SPRITE_COUNT: usize = 30;
pub const RADIUS_RANGE: Range<f64> = 20.0..120.0;
pub const SPEED_RANGE: Range<f64> = 0.5..2.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const LIGHT_PALETTE: [Rgba; 4] = [
    Rgba::new(99, 102, 241, 0.3),
    Rgba::new(236, 72, 153, 0.25),
    Rgba::new(0, 199, 190, 0.3),
    Rgba::new(245, 158, 11, 0.25),
];

pub const DARK_PALETTE: [Rgba; 4] = [
    Rgba::new(99, 102, 241, 0.3),
    Rgba::new(236, 72, 153, 0.2),
    Rgba::new(0, 255, 136, 0.2),
    Rgba::new(0, 212, 255, 0.25),
];

#[derive(Clone, Debug, PartialEq)]
pub struct SpriteStyle {
    pub palette: [Rgba; 4],
    pub opacity: Range<f64>,
    pub blur: Range<f64>,
    pub core: Rgba,
    pub color_stop: f64,
    pub rim: Rgba,
    pub highlight_alpha: f64,
    pub background: &'static str,
}

impl SpriteStyle {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                palette: DARK_PALETTE,
                opacity: 0.1..0.7,
                blur: 2.0..10.0,
                core: Rgba::new(255, 255, 255, 0.6),
                color_stop: 0.3,
                rim: Rgba::new(255, 255, 255, 0.05),
                highlight_alpha: 0.4,
                background: "#000000",
            },
            Theme::Light => Self {
                palette: LIGHT_PALETTE,
                opacity: 0.2..0.5,
                blur: 0.5..2.5,
                core: Rgba::new(255, 255, 255, 0.95),
                color_stop: 0.2,
                rim: Rgba::new(0, 0, 0, 0.1),
                highlight_alpha: 0.8,
                background: "#ffffff",
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub speed: f64,
    pub opacity: f64,
    pub color: Rgba,
    pub blur: f64,
}

impl Sprite {
    pub fn highlight(&self) -> (f64, f64, f64) {
        let offset = self.radius * 0.3;
        (self.x - offset, self.y - offset, self.radius * 0.3)
    }
}

fn uniform(rng: &mut fastrand::Rng, range: &Range<f64>) -> f64 {
    range.start + rng.f64() * (range.end - range.start)
}

pub struct ParticleField {
    sprites: Vec<Sprite>,
    style: SpriteStyle,
    theme: Theme,
    width: f64,
    height: f64,
    rng: fastrand::Rng,
}

impl ParticleField {
    pub fn new(theme: Theme, width: f64, height: f64, rng: fastrand::Rng) -> Self {
        let mut field = Self {
            sprites: Vec::with_capacity(SPRITE_COUNT),
            style: SpriteStyle::for_theme(theme),
            theme,
            width,
            height,
            rng,
        };
        field.regenerate(theme);
        field
    }

    pub fn regenerate(&mut self, theme: Theme) {
        self.theme = theme;
        self.style = SpriteStyle::for_theme(theme);
        self.sprites.clear();

        for id in 0..SPRITE_COUNT {
            let sprite = Sprite {
                id,
                x: self.rng.f64() * self.width,
                y: self.rng.f64() * self.height,
                radius: uniform(&mut self.rng, &RADIUS_RANGE),
                speed: uniform(&mut self.rng, &SPEED_RANGE),
                opacity: uniform(&mut self.rng, &self.style.opacity),
                color: self.style.palette[self.rng.usize(..self.style.palette.len())],
                blur: uniform(&mut self.rng, &self.style.blur),
            };
            self.sprites.push(sprite);
        }
    }

    // Sprites keep their positions and drift back into range by recycling.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Returns the ids recycled during this step.
    pub fn advance(&mut self) -> Vec<usize> {
        let mut recycled = Vec::new();

        for sprite in &mut self.sprites {
            sprite.y -= sprite.speed;

            if sprite.y < -sprite.radius {
                sprite.y = self.height + sprite.radius;
                sprite.x = self.rng.f64() * self.width;
                recycled.push(sprite.id);
            }
        }

        recycled
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn style(&self) -> &SpriteStyle {
        &self.style
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(theme: Theme) -> ParticleField {
        ParticleField::new(theme, 1280.0, 720.0, fastrand::Rng::with_seed(42))
    }

    #[test]
    fn generates_fixed_sprite_count_for_both_themes() {
        for theme in [Theme::Dark, Theme::Light] {
            let mut field = field(theme);
            assert_eq!(field.sprites().len(), SPRITE_COUNT);

            field.regenerate(theme.toggled());
            field.regenerate(theme);
            assert_eq!(field.sprites().len(), SPRITE_COUNT);
        }
    }

    #[test]
    fn generated_attributes_stay_in_theme_ranges() {
        for theme in [Theme::Dark, Theme::Light] {
            let field = field(theme);
            let style = SpriteStyle::for_theme(theme);

            for (index, sprite) in field.sprites().iter().enumerate() {
                assert_eq!(sprite.id, index);
                assert!((0.0..1280.0).contains(&sprite.x));
                assert!((0.0..720.0).contains(&sprite.y));
                assert!(RADIUS_RANGE.contains(&sprite.radius));
                assert!(SPEED_RANGE.contains(&sprite.speed));
                assert!(style.opacity.contains(&sprite.opacity));
                assert!(style.blur.contains(&sprite.blur));
                assert!(style.palette.contains(&sprite.color));
            }
        }
    }

    #[test]
    fn switching_to_light_uses_only_light_palette() {
        let mut field = field(Theme::Dark);
        field.regenerate(Theme::Light);

        assert_eq!(field.theme(), Theme::Light);
        assert_eq!(field.style().background, "#ffffff");
        for sprite in field.sprites() {
            assert!(LIGHT_PALETTE.contains(&sprite.color), "{}", sprite.color);
        }

        let dark_only: Vec<Rgba> = DARK_PALETTE
            .iter()
            .copied()
            .filter(|color| !LIGHT_PALETTE.contains(color))
            .collect();
        assert!(field.sprites().iter().all(|sprite| !dark_only.contains(&sprite.color)));
    }

    #[test]
    fn recycle_places_sprite_just_below_bottom_edge() {
        let mut field = field(Theme::Dark);
        let height = 720.0;

        for _ in 0..2_000 {
            let before: Vec<Sprite> = field.sprites().to_vec();
            let recycled = field.advance();

            for id in recycled {
                let sprite = &field.sprites()[id];
                assert_eq!(sprite.y, height + sprite.radius);
                assert!(before[id].y - before[id].speed < -before[id].radius);
                assert!((0.0..1280.0).contains(&sprite.x));
            }
        }
    }

    #[test]
    fn one_recycle_per_full_traversal() {
        let mut field = ParticleField::new(Theme::Light, 800.0, 600.0, fastrand::Rng::with_seed(7));
        let sprite = field.sprites()[0].clone();
        // Distance from the recycle point back up past the top edge.
        let traversal = 600.0 + 2.0 * sprite.radius;
        let frames_to_first = ((sprite.y + sprite.radius) / sprite.speed).floor() as usize + 1;
        let frames_per_cycle = (traversal / sprite.speed).ceil() as usize + 1;

        let mut recycles = 0;
        for _ in 0..frames_to_first + 3 * frames_per_cycle {
            if field.advance().contains(&0) {
                recycles += 1;
            }
        }

        assert!((3..=4).contains(&recycles), "recycled {recycles} times");
    }

    #[test]
    fn advance_only_moves_positions() {
        let mut field = field(Theme::Dark);
        let before: Vec<Sprite> = field.sprites().to_vec();

        for _ in 0..500 {
            field.advance();
        }

        for (old, new) in before.iter().zip(field.sprites()) {
            assert_eq!(old.radius, new.radius);
            assert_eq!(old.speed, new.speed);
            assert_eq!(old.opacity, new.opacity);
            assert_eq!(old.color, new.color);
            assert_eq!(old.blur, new.blur);
        }
    }

    #[test]
    fn resize_records_exact_size_and_keeps_sprites() {
        let mut field = field(Theme::Dark);
        let before: Vec<Sprite> = field.sprites().to_vec();

        field.resize(375.0, 812.0);

        assert_eq!(field.size(), (375.0, 812.0));
        assert_eq!(field.sprites(), before.as_slice());
    }

    #[test]
    fn recycle_uses_resized_height() {
        let mut field = field(Theme::Dark);
        field.resize(300.0, 200.0);

        for _ in 0..1_000 {
            for id in field.advance() {
                let sprite = &field.sprites()[id];
                assert_eq!(sprite.y, 200.0 + sprite.radius);
                assert!(sprite.x < 300.0);
            }
        }
    }

    #[test]
    fn colours_format_as_css() {
        assert_eq!(DARK_PALETTE[2].to_string(), "rgba(0, 255, 136, 0.2)");
        assert_eq!(LIGHT_PALETTE[1].to_string(), "rgba(236, 72, 153, 0.25)");
    }

    #[test]
    fn highlight_sits_up_and_left_of_centre() {
        let sprite = Sprite {
            id: 0,
            x: 100.0,
            y: 200.0,
            radius: 50.0,
            speed: 1.0,
            opacity: 0.5,
            color: DARK_PALETTE[0],
            blur: 2.0,
        };

        assert_eq!(sprite.highlight(), (85.0, 185.0, 15.0));
    }
}

//! Asset keys and file paths
//!
//! The controller asks the host to load these once, before the scene is
//! built, and from then on refers to them only by key.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits brick
    BrickHit,
}

impl SoundEffect {
    pub fn key(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "paddlehit",
            SoundEffect::BrickHit => "brickhit",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "assets/114187__edgardedition__thud17.wav",
            SoundEffect::BrickHit => "assets/478284__joao-janz__finger-tap-2-2.wav",
        }
    }

    pub const ALL: [SoundEffect; 2] = [SoundEffect::PaddleHit, SoundEffect::BrickHit];
}

/// Sprite and spritesheet keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    /// Spritesheet, 20x20 frames
    Ball,
    Paddle,
    Brick,
    /// Start button spritesheet, 120x40 frames
    Button,
}

impl SpriteKey {
    pub const ALL: [SpriteKey; 4] = [
        SpriteKey::Ball,
        SpriteKey::Paddle,
        SpriteKey::Brick,
        SpriteKey::Button,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SpriteKey::Ball => "ball",
            SpriteKey::Paddle => "paddle",
            SpriteKey::Brick => "brick",
            SpriteKey::Button => "button",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            SpriteKey::Ball => "assets/wobble.png",
            SpriteKey::Paddle => "assets/paddle.png",
            SpriteKey::Brick => "assets/brick.png",
            SpriteKey::Button => "assets/button.png",
        }
    }

    /// Frame size for spritesheets, `None` for single images
    pub fn frame_size(&self) -> Option<(u32, u32)> {
        match self {
            SpriteKey::Ball => Some((20, 20)),
            SpriteKey::Button => Some((120, 40)),
            SpriteKey::Paddle | SpriteKey::Brick => None,
        }
    }
}

/// Frame-based animations played on sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Animation {
    /// Ball squash after a paddle hit
    Wobble,
}

impl Animation {
    pub fn key(&self) -> &'static str {
        match self {
            Animation::Wobble => "wobble",
        }
    }

    pub const ALL: [Animation; 1] = [Animation::Wobble];

    /// Spritesheet the frames index into
    pub fn sprite(&self) -> SpriteKey {
        match self {
            Animation::Wobble => SpriteKey::Ball,
        }
    }

    pub fn frames(&self) -> &'static [u32] {
        match self {
            Animation::Wobble => &[0, 1, 0, 2, 0, 1, 0, 2, 0],
        }
    }

    pub fn frame_rate(&self) -> u32 {
        match self {
            Animation::Wobble => 24,
        }
    }

    /// Playback length in milliseconds
    pub fn duration_ms(&self) -> f32 {
        self.frames().len() as f32 * 1000.0 / self.frame_rate() as f32
    }
}

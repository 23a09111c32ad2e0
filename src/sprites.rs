/// Sprite table.
///
/// Art is stored as rows of characters; spaces are transparent.  Each sprite
/// carries collider templates expressed as offsets from its top-left corner,
/// so the collider geometry always matches what is drawn.

use serde::{Deserialize, Serialize};

use crate::entities::ColliderBox;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    DinoStand,
    DinoRun1,
    DinoRun2,
    DinoJump,
    DinoDuck1,
    DinoDuck2,
    DinoAttack,
    DinoCrash,
    CactusSmall,
    CactusLarge,
    CactusGroup,
    BirdUp,
    BirdDown,
    Cloud,
    StarBright,
    StarDim,
    Land,
    MoonCrescent,
    MoonFull,
}

#[derive(Debug)]
pub struct Sprite {
    pub rows: &'static [&'static str],
    pub colliders: &'static [ColliderBox],
}

impl Sprite {
    /// Width in cells of the widest row.
    pub fn width(&self) -> f64 {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as f64
    }

    pub fn height(&self) -> f64 {
        self.rows.len() as f64
    }
}

const DINO_BODY: ColliderBox = ColliderBox::new(0.0, 1.0, 3.0, 2.0);
const DINO_HEAD: ColliderBox = ColliderBox::new(1.0, 0.0, 3.0, 1.0);

static DINO_STAND: Sprite = Sprite {
    rows: &[" ▄█▀", "▀██ ", " ▌▐ "],
    colliders: &[DINO_HEAD, DINO_BODY],
};
static DINO_RUN1: Sprite = Sprite {
    rows: &[" ▄█▀", "▀██ ", " ▌  "],
    colliders: &[DINO_HEAD, DINO_BODY],
};
static DINO_RUN2: Sprite = Sprite {
    rows: &[" ▄█▀", "▀██ ", "  ▐ "],
    colliders: &[DINO_HEAD, DINO_BODY],
};
static DINO_JUMP: Sprite = Sprite {
    rows: &[" ▄█▀", "▀██ ", " ▀▀ "],
    colliders: &[DINO_HEAD, DINO_BODY],
};
static DINO_DUCK1: Sprite = Sprite {
    rows: &["", "▀▄▄██▀", " ▌  ▐ "],
    colliders: &[ColliderBox::new(0.0, 1.0, 6.0, 2.0)],
};
static DINO_DUCK2: Sprite = Sprite {
    rows: &["", "▀▄▄██▀", "  ▐ ▌ "],
    colliders: &[ColliderBox::new(0.0, 1.0, 6.0, 2.0)],
};
static DINO_ATTACK: Sprite = Sprite {
    rows: &[" ▄█▀>", "▀██═ ", " ▌▐  "],
    colliders: &[DINO_HEAD, DINO_BODY],
};
static DINO_CRASH: Sprite = Sprite {
    rows: &[" ▄█x", "▀██ ", " ▌▐ "],
    colliders: &[DINO_HEAD, DINO_BODY],
};

static CACTUS_SMALL: Sprite = Sprite {
    rows: &["", " █▖", "▝█▘", " █ "],
    colliders: &[ColliderBox::new(0.5, 1.0, 2.0, 3.0)],
};
static CACTUS_LARGE: Sprite = Sprite {
    rows: &[" █ ", "▌█▐", "▀█▀", " █ "],
    colliders: &[ColliderBox::new(0.5, 0.0, 2.0, 4.0)],
};
static CACTUS_GROUP: Sprite = Sprite {
    rows: &["   █ ", "█ ▐█▌", "█▄▐█▌", " █ █ "],
    colliders: &[
        ColliderBox::new(0.0, 1.0, 2.0, 3.0),
        ColliderBox::new(2.5, 0.0, 2.0, 4.0),
    ],
};

static BIRD_UP: Sprite = Sprite {
    rows: &["  ╲ ", "<▄▄="],
    colliders: &[ColliderBox::new(0.0, 1.0, 4.0, 1.0)],
};
static BIRD_DOWN: Sprite = Sprite {
    rows: &["", "<▀▀="],
    colliders: &[ColliderBox::new(0.0, 1.0, 4.0, 1.0)],
};

static CLOUD: Sprite = Sprite {
    rows: &[" .--. ", "(____)"],
    colliders: &[],
};
static STAR_BRIGHT: Sprite = Sprite { rows: &["*"], colliders: &[] };
static STAR_DIM: Sprite = Sprite { rows: &["·"], colliders: &[] };

static LAND: Sprite = Sprite {
    rows: &["▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔", " .   ,    .  '   .  "],
    colliders: &[],
};

static MOON_CRESCENT: Sprite = Sprite {
    rows: &[" ▄▀", " ▀▄"],
    colliders: &[],
};
static MOON_FULL: Sprite = Sprite {
    rows: &["▟█▙", "▜█▛"],
    colliders: &[],
};

impl SpriteId {
    pub fn sprite(self) -> &'static Sprite {
        match self {
            SpriteId::DinoStand => &DINO_STAND,
            SpriteId::DinoRun1 => &DINO_RUN1,
            SpriteId::DinoRun2 => &DINO_RUN2,
            SpriteId::DinoJump => &DINO_JUMP,
            SpriteId::DinoDuck1 => &DINO_DUCK1,
            SpriteId::DinoDuck2 => &DINO_DUCK2,
            SpriteId::DinoAttack => &DINO_ATTACK,
            SpriteId::DinoCrash => &DINO_CRASH,
            SpriteId::CactusSmall => &CACTUS_SMALL,
            SpriteId::CactusLarge => &CACTUS_LARGE,
            SpriteId::CactusGroup => &CACTUS_GROUP,
            SpriteId::BirdUp => &BIRD_UP,
            SpriteId::BirdDown => &BIRD_DOWN,
            SpriteId::Cloud => &CLOUD,
            SpriteId::StarBright => &STAR_BRIGHT,
            SpriteId::StarDim => &STAR_DIM,
            SpriteId::Land => &LAND,
            SpriteId::MoonCrescent => &MOON_CRESCENT,
            SpriteId::MoonFull => &MOON_FULL,
        }
    }

    pub fn width(self) -> f64 {
        self.sprite().width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SpriteId; 19] = [
        SpriteId::DinoStand,
        SpriteId::DinoRun1,
        SpriteId::DinoRun2,
        SpriteId::DinoJump,
        SpriteId::DinoDuck1,
        SpriteId::DinoDuck2,
        SpriteId::DinoAttack,
        SpriteId::DinoCrash,
        SpriteId::CactusSmall,
        SpriteId::CactusLarge,
        SpriteId::CactusGroup,
        SpriteId::BirdUp,
        SpriteId::BirdDown,
        SpriteId::Cloud,
        SpriteId::StarBright,
        SpriteId::StarDim,
        SpriteId::Land,
        SpriteId::MoonCrescent,
        SpriteId::MoonFull,
    ];

    #[test]
    fn colliders_stay_inside_the_art() {
        for id in ALL {
            let s = id.sprite();
            for b in s.colliders {
                assert!(b.left >= 0.0 && b.top >= 0.0, "{:?}", id);
                assert!(b.right() <= s.width(), "{:?} collider wider than art", id);
                assert!(b.bottom() <= s.height(), "{:?} collider taller than art", id);
            }
        }
    }

    #[test]
    fn ducking_lowers_the_head() {
        let stand_top = DINO_STAND.colliders.iter().map(|b| b.top).fold(f64::MAX, f64::min);
        let duck_top = DINO_DUCK1.colliders.iter().map(|b| b.top).fold(f64::MAX, f64::min);
        assert!(duck_top > stand_top);
    }

    #[test]
    fn land_segment_is_twenty_cells() {
        assert_eq!(SpriteId::Land.width(), 20.0);
    }
}

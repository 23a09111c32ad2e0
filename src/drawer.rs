/// Rendering collaborator.
///
/// The engine only ever says "draw this sprite / box / text at this screen
/// position".  `Canvas` implements that as a clipped character grid; the
/// terminal front end flushes it with crossterm.

use crate::entities::{ColliderBox, GameSize, Vec2};
use crate::sprites::SpriteId;

pub trait Drawer {
    fn clear(&mut self);
    /// Switch palette.  `density` is 0..=1 across the night.
    fn set_night(&mut self, is_night: bool, density: f64);
    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2);
    fn draw_boxes(&mut self, boxes: &[ColliderBox]);
    fn draw_text(&mut self, text: &str, pos: Vec2);
}

const BLANK: char = ' ';
const BOX_EDGE: char = '·';

#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    night: bool,
    density: f64,
}

impl Canvas {
    pub fn new(size: GameSize) -> Self {
        let width = size.width.max(0.0) as usize;
        let height = size.height.max(0.0) as usize;
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
            night: false,
            density: 0.0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_night(&self) -> bool {
        self.night
    }

    pub fn night_density(&self) -> f64 {
        self.density
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    pub fn row(&self, y: usize) -> String {
        if y >= self.height {
            return String::new();
        }
        self.cells[y * self.width..(y + 1) * self.width].iter().collect()
    }

    pub fn rows(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row(y)).collect()
    }

    fn put(&mut self, x: i64, y: i64, ch: char) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = ch;
    }
}

impl Drawer for Canvas {
    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn set_night(&mut self, is_night: bool, density: f64) {
        self.night = is_night;
        self.density = density.clamp(0.0, 1.0);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, pos: Vec2) {
        let x0 = pos.x.round() as i64;
        let y0 = pos.y.round() as i64;
        for (dy, row) in sprite.sprite().rows.iter().enumerate() {
            for (dx, ch) in row.chars().enumerate() {
                if ch != BLANK {
                    self.put(x0 + dx as i64, y0 + dy as i64, ch);
                }
            }
        }
    }

    fn draw_boxes(&mut self, boxes: &[ColliderBox]) {
        for b in boxes {
            let left = b.left.floor() as i64;
            let top = b.top.floor() as i64;
            let right = (b.right().ceil() as i64 - 1).max(left);
            let bottom = (b.bottom().ceil() as i64 - 1).max(top);
            for x in left..=right {
                self.put(x, top, BOX_EDGE);
                self.put(x, bottom, BOX_EDGE);
            }
            for y in top..=bottom {
                self.put(left, y, BOX_EDGE);
                self.put(right, y, BOX_EDGE);
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2) {
        let x0 = pos.x.round() as i64;
        let y0 = pos.y.round() as i64;
        for (dx, ch) in text.chars().enumerate() {
            self.put(x0 + dx as i64, y0, ch);
        }
    }
}

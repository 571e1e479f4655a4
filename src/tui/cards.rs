use ratatui::layout::Rect;

use crate::numeric::{AngleUnit, ComplexNumber};
use crate::scene::Rgb;

/// Card width in terminal cells, including the border.
pub const CARD_WIDTH: u16 = 20;
/// Gap between neighboring cards.
pub const CARD_GAP: u16 = 1;
/// Rows the card strip occupies: three content lines plus the border.
pub const CARD_ROWS: u16 = 5;

/// One rendered card: the display strings for a plotted number.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub cartesian: String,
    pub modulus: String,
    pub angle: String,
    pub color: Rgb,
}

impl Card {
    pub fn new(z: &ComplexNumber, color: Rgb, unit: AngleUnit) -> Self {
        Self {
            cartesian: z.to_string(),
            modulus: z.modulus_description(),
            angle: z.angle_description(unit),
            color,
        }
    }
}

/// The card strip backing the list display.
///
/// Cards are cached snapshots: a dragged point moves many times between
/// refreshes, and only `rebuild`/`refresh_card` bring a card back in sync
/// with the plane.
pub struct CardStrip {
    pub cards: Vec<Card>,
    pub selected: usize,
}

impl CardStrip {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            selected: 0,
        }
    }

    /// Rebuild every card, clamping the selection into range.
    pub fn rebuild(&mut self, entries: &[(ComplexNumber, Rgb)], unit: AngleUnit) {
        self.cards = entries
            .iter()
            .map(|(z, color)| Card::new(z, *color, unit))
            .collect();
        if !self.cards.is_empty() {
            self.selected = self.selected.min(self.cards.len() - 1);
        } else {
            self.selected = 0;
        }
    }

    /// Refresh a single card in place (the throttled drag path).
    pub fn refresh_card(&mut self, index: usize, z: &ComplexNumber, color: Rgb, unit: AngleUnit) {
        if let Some(card) = self.cards.get_mut(index) {
            *card = Card::new(z, color, unit);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.cards.len() {
            self.selected += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for CardStrip {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen rectangle of the card at `index` within the strip area, if it
/// fits on screen.
pub fn card_rect(area: Rect, index: usize) -> Option<Rect> {
    let offset = index as u16 * (CARD_WIDTH + CARD_GAP);
    if offset + CARD_WIDTH > area.width {
        return None;
    }
    Some(Rect {
        x: area.x + offset,
        y: area.y,
        width: CARD_WIDTH,
        height: area.height.min(CARD_ROWS),
    })
}

/// Which card slot a terminal cell falls into. The slot one past the last
/// card is the add card.
pub fn card_hit(area: Rect, column: u16, row: u16) -> Option<usize> {
    if row < area.y
        || row >= area.y + area.height.min(CARD_ROWS)
        || column < area.x
        || column >= area.x + area.width
    {
        return None;
    }
    let offset = column - area.x;
    let slot = offset / (CARD_WIDTH + CARD_GAP);
    // Clicks in the gap between cards belong to no slot.
    if offset % (CARD_WIDTH + CARD_GAP) >= CARD_WIDTH {
        return None;
    }
    Some(slot as usize)
}

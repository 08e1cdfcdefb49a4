//! Rectangle selection state for a page of word boxes

use log::{debug, trace};

use crate::geometry::{PixelRect, Point, SelectionRect, Word};
use crate::word_layer::{self, WordRegion};

/// Pointer input, already translated into image pixel space
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release,
}

/// Drag gesture state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        /// Where the press happened
        anchor: Point,
        /// Live selection rectangle
        rect: SelectionRect,
    },
}

/// True if the word's center lies in `rect`, edges included.
///
/// A word whose box overlaps the rectangle but whose center lies outside it
/// is not inside.
pub fn inside_area(rect: &SelectionRect, word: &Word) -> bool {
    rect.contains_point(word.center())
}

/// Owns the page's words, their regions and the drag gesture.
#[derive(Clone, Debug, Default)]
pub struct Selector {
    words: Vec<Word>,
    regions: Vec<WordRegion>,
    gesture: Gesture,
    last_completed: Option<SelectionRect>,
}

impl Selector {
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let regions = word_layer::build(&words);
        debug!("Built {} word regions", regions.len());
        Self {
            words,
            regions,
            gesture: Gesture::Idle,
            last_completed: None,
        }
    }

    /// Single entry point for pointer input. Returns the finished rectangle
    /// when the event completes a gesture.
    pub fn handle_event(&mut self, event: PointerEvent) -> Option<SelectionRect> {
        match event {
            PointerEvent::Press(p) => {
                self.on_press(p);
                None
            }
            PointerEvent::Move(p) => {
                self.on_move(p);
                None
            }
            PointerEvent::Release => self.on_release(),
        }
    }

    /// Start a new gesture anchored at `p`. A press while already dragging
    /// restarts the gesture.
    pub fn on_press(&mut self, p: Point) {
        if matches!(self.gesture, Gesture::Dragging { .. }) {
            debug!("Press while dragging, restarting gesture at {p:?}");
        }
        let rect = PixelRect::at(p);
        self.gesture = Gesture::Dragging { anchor: p, rect };
        self.refresh_selection(&rect);
    }

    pub fn on_move(&mut self, p: Point) {
        let Gesture::Dragging { anchor, .. } = self.gesture else {
            return;
        };
        let rect = PixelRect::spanning(anchor, p);
        self.gesture = Gesture::Dragging { anchor, rect };
        self.refresh_selection(&rect);
    }

    /// End the gesture. Selection flags stay as last computed.
    pub fn on_release(&mut self) -> Option<SelectionRect> {
        let Gesture::Dragging { rect, .. } = self.gesture else {
            return None;
        };
        self.gesture = Gesture::Idle;
        self.last_completed = Some(rect);
        debug!(
            "Selection finished at {rect:?}, {} words selected",
            self.selected_count()
        );
        Some(rect)
    }

    /// Overwrite every region's flag from `rect`. Not cumulative.
    fn refresh_selection(&mut self, rect: &SelectionRect) {
        for region in &mut self.regions {
            region.selected = inside_area(rect, &self.words[region.word_index]);
        }
        trace!("{rect:?} selects {} words", self.selected_count());
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    /// The in-progress rectangle, if a drag is active
    pub fn live_rect(&self) -> Option<SelectionRect> {
        match self.gesture {
            Gesture::Dragging { rect, .. } => Some(rect),
            Gesture::Idle => None,
        }
    }

    /// The rectangle of the most recently finished gesture
    pub fn last_completed(&self) -> Option<SelectionRect> {
        self.last_completed
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn regions(&self) -> &[WordRegion] {
        &self.regions
    }

    pub fn selected_words(&self) -> impl Iterator<Item = &Word> {
        self.regions
            .iter()
            .filter(|r| r.selected)
            .map(|r| &self.words[r.word_index])
    }

    pub fn selected_count(&self) -> usize {
        self.regions.iter().filter(|r| r.selected).count()
    }
}

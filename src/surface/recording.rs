//! In-memory surface that remembers everything it was told

use std::collections::BTreeMap;

use super::{Color, DisplaySurface, ElementId, Font, SurfaceCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Rectangle,
}

/// Last known state of one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementState {
    pub kind: ElementKind,
    pub font: Option<Font>,
    pub text: Option<String>,
    pub color: Option<Color>,
    pub size: Option<(u32, u32)>,
    pub position: Option<(i32, i32)>,
    /// Target and duration of the most recent tween
    pub animation: Option<(i32, i32, u32)>,
}

impl ElementState {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            font: None,
            text: None,
            color: None,
            size: None,
            position: None,
            animation: None,
        }
    }
}

/// Surface that records the command stream and folds it into element state
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_id: u32,
    log: Vec<SurfaceCommand>,
    elements: BTreeMap<ElementId, ElementState>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far, in order
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.log
    }

    /// Take the command log, leaving element state intact
    pub fn drain(&mut self) -> Vec<SurfaceCommand> {
        std::mem::take(&mut self.log)
    }

    pub fn element(&self, id: ElementId) -> Option<&ElementState> {
        self.elements.get(&id)
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Commands in the log that target `id`
    pub fn commands_for(&self, id: ElementId) -> impl Iterator<Item = &SurfaceCommand> {
        self.log.iter().filter(move |cmd| cmd.id() == id)
    }

    fn apply(&mut self, command: &SurfaceCommand) {
        match command {
            SurfaceCommand::CreateText { id } => {
                self.elements.insert(*id, ElementState::new(ElementKind::Text));
            }
            SurfaceCommand::CreateRectangle { id } => {
                self.elements.insert(*id, ElementState::new(ElementKind::Rectangle));
            }
            SurfaceCommand::SetFont { id, font } => {
                if let Some(el) = self.elements.get_mut(id) {
                    el.font = Some(*font);
                }
            }
            SurfaceCommand::SetText { id, text } => {
                if let Some(el) = self.elements.get_mut(id) {
                    el.text = Some(text.clone());
                }
            }
            SurfaceCommand::SetColor { id, color } => {
                if let Some(el) = self.elements.get_mut(id) {
                    el.color = Some(*color);
                }
            }
            SurfaceCommand::SetSize { id, width, height } => {
                if let Some(el) = self.elements.get_mut(id) {
                    el.size = Some((*width, *height));
                }
            }
            SurfaceCommand::MoveTo { id, x, y } => {
                if let Some(el) = self.elements.get_mut(id) {
                    el.position = Some((*x, *y));
                    el.animation = None;
                }
            }
            SurfaceCommand::AnimateTo { id, x, y, duration_ms } => {
                if let Some(el) = self.elements.get_mut(id) {
                    el.animation = Some((*x, *y, *duration_ms));
                }
            }
        }
    }
}

impl DisplaySurface for RecordingSurface {
    fn allocate(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    fn submit(&mut self, command: SurfaceCommand) {
        self.apply(&command);
        self.log.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_commands_into_element_state() {
        let mut surface = RecordingSurface::new();
        let text = surface.create_text();
        let rect = surface.create_rectangle();
        assert_ne!(text, rect);

        surface.set_font(text, Font::Small);
        surface.set_text(text, "WORK");
        surface.set_size(rect, 56, 6);
        surface.move_to(rect, 4, 55);
        surface.animate_to(rect, 8, 55, 980);

        let t = surface.element(text).unwrap();
        assert_eq!(t.kind, ElementKind::Text);
        assert_eq!(t.text.as_deref(), Some("WORK"));
        assert_eq!(t.font, Some(Font::Small));

        let r = surface.element(rect).unwrap();
        assert_eq!(r.size, Some((56, 6)));
        assert_eq!(r.position, Some((4, 55)));
        assert_eq!(r.animation, Some((8, 55, 980)));
        assert_eq!(surface.commands_for(rect).count(), 4);
    }

    #[test]
    fn commands_for_unknown_elements_are_ignored() {
        let mut surface = RecordingSurface::new();
        surface.set_color(ElementId(42), Color::rgb(1, 2, 3));
        assert_eq!(surface.element_count(), 0);
        assert_eq!(surface.commands().len(), 1);
    }

    #[test]
    fn drain_keeps_state() {
        let mut surface = RecordingSurface::new();
        let id = surface.create_rectangle();
        surface.set_color(id, Color::rgb(9, 9, 9));
        assert_eq!(surface.drain().len(), 2);
        assert!(surface.commands().is_empty());
        assert_eq!(surface.element(id).unwrap().color, Some(Color::rgb(9, 9, 9)));
    }
}

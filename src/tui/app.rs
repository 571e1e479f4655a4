use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::numeric::{AngleUnit, ComplexNumber};
use crate::persistence::board::{self, SavedBoard, SavedPoint};
use crate::persistence::config::Config;
use crate::scene::{NodeId, PlanePoint, PlaneTransform, PointRegistry, Rgb, SumState};
use crate::snapshot::{export_snapshot, SnapshotScene};
use crate::speech::Narrator;
use crate::tui::canvas::{self, PlaneView, PLANE_SIZE};
use crate::tui::cards::{self, CardStrip, CARD_ROWS};
use crate::tui::glossary::{GlossaryPanel, GLOSSARY};
use crate::tui::status::render_status_bar;
use crate::tui::sumbar;
use crate::tui::theme::Theme;

/// How far a grab may land from a marker, in canvas units.
const GRAB_RADIUS: f64 = 10.0;
/// Keyboard nudge step, in complex units.
const NUDGE_STEP: f64 = 0.25;
/// Drag-move events per card refresh.
const REFRESH_EVERY: u32 = 8;

pub struct App {
    pub registry: PointRegistry,
    /// Marker positions, parallel to the registry's presentation order.
    pub positions: Vec<PlanePoint>,
    pub sum: SumState,
    pub transform: PlaneTransform,
    pub angle_unit: AngleUnit,
    pub show_details: bool,
    pub cards: CardStrip,
    pub glossary: GlossaryPanel,
    pub narrator: Narrator,
    pub board_name: Option<String>,
    pub notice: Option<String>,
    pub should_quit: bool,
    /// Marker node bound to the current interaction. Survives drag release;
    /// only removal clears it.
    active_point: Option<NodeId>,
    drag_in_progress: bool,
    throttle: u32,
    plane_area: Rect,
    cards_area: Rect,
}

impl App {
    pub fn new(config: Config) -> Self {
        let origin = PlanePoint::new(PLANE_SIZE / 2.0, PLANE_SIZE / 2.0);
        let mut app = Self {
            registry: PointRegistry::new(),
            positions: Vec::new(),
            sum: SumState::new(),
            transform: PlaneTransform::new(config.scale, origin),
            angle_unit: AngleUnit::Degrees,
            show_details: config.show_details,
            cards: CardStrip::new(),
            glossary: GlossaryPanel::new(),
            narrator: Narrator::new(&config.speech_command),
            board_name: None,
            notice: None,
            should_quit: false,
            active_point: None,
            drag_in_progress: false,
            throttle: 0,
            plane_area: Rect::default(),
            cards_area: Rect::default(),
        };

        for seed in &config.seed {
            app.plot(Some(ComplexNumber::new(seed.re, seed.im)));
        }
        app
    }

    /// Timer tick: reap a finished utterance.
    pub fn tick(&mut self) {
        self.narrator.poll();
    }

    // --- Point lifecycle ---

    /// Plot a new point, at the given number's position or at a random
    /// spot. Yields false when the palette is exhausted.
    pub fn plot(&mut self, number: Option<ComplexNumber>) -> bool {
        let attributed = match self.registry.add() {
            Some(point) => point,
            None => return false,
        };

        let position = match number {
            Some(z) => self.transform.to_position(&z),
            None => random_spawn_position(),
        };
        self.positions.push(position);
        self.active_point = Some(attributed.point_node);

        self.recompute_sum();
        self.rebuild_cards();
        self.cards.selected = self.cards.len().saturating_sub(1);
        true
    }

    /// Remove the point at a presentation index. Out-of-range is a no-op.
    pub fn remove_at(&mut self, index: usize) {
        let Some((point_node, _vector_node)) = self.registry.remove(index) else {
            return;
        };
        if index < self.positions.len() {
            self.positions.remove(index);
        }
        if self.active_point == Some(point_node) {
            self.active_point = None;
            self.drag_in_progress = false;
        }

        self.recompute_sum();
        self.rebuild_cards();
    }

    /// Move the active point. The plane and sum state update on every
    /// call; the card strip refreshes on every 8th move, or when forced
    /// (drag release, keyboard nudge).
    pub fn update_active_position(&mut self, position: PlanePoint, force_refresh: bool) {
        let Some(active) = self.active_point else {
            return;
        };
        let Some(index) = self.registry.index_of(active) else {
            return;
        };

        let clamped = PlanePoint::new(
            position.x.clamp(0.0, PLANE_SIZE),
            position.y.clamp(0.0, PLANE_SIZE),
        );
        self.positions[index] = clamped;

        self.throttle += 1;
        if self.throttle % REFRESH_EVERY == 0 || force_refresh {
            let z = self.transform.to_complex(clamped);
            if let Some(point) = self.registry.get(index) {
                let color = point.color;
                self.cards.refresh_card(index, &z, color, self.angle_unit);
            }
        }

        self.recompute_sum();
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_point.and_then(|node| self.registry.index_of(node))
    }

    fn recompute_sum(&mut self) {
        self.sum.recompute(&self.positions, &self.transform);
    }

    fn rebuild_cards(&mut self) {
        let entries = self.entries();
        self.cards.rebuild(&entries, self.angle_unit);
    }

    /// Live (number, color) tuples in presentation order.
    pub fn entries(&self) -> Vec<(ComplexNumber, Rgb)> {
        self.registry
            .points()
            .iter()
            .zip(&self.positions)
            .map(|(point, position)| (self.transform.to_complex(*position), point.color))
            .collect()
    }

    // --- Key handling ---

    /// Handle a key event. Returns true if the screen should be redrawn.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.glossary.visible {
            return self.handle_key_glossary(key);
        }
        self.handle_key_normal(key)
    }

    fn handle_key_glossary(&mut self, key: KeyEvent) -> bool {
        match key {
            KeyEvent { code: KeyCode::Esc, .. }
            | KeyEvent { code: KeyCode::Char('g'), .. }
            | KeyEvent { code: KeyCode::F(1), .. } => {
                self.glossary.toggle();
                true
            }
            KeyEvent { code: KeyCode::Up, .. } | KeyEvent { code: KeyCode::Char('k'), .. } => {
                self.glossary.select_prev();
                true
            }
            KeyEvent { code: KeyCode::Down, .. } | KeyEvent { code: KeyCode::Char('j'), .. } => {
                self.glossary.select_next();
                true
            }
            KeyEvent { code: KeyCode::Enter, .. } => {
                let (_, definition) = self.glossary.selected_entry();
                self.narrator.speak(definition);
                true
            }
            // Any other key closes the overlay.
            _ => {
                self.glossary.visible = false;
                false
            }
        }
    }

    fn handle_key_normal(&mut self, key: KeyEvent) -> bool {
        match key {
            // Quit
            KeyEvent {
                code: KeyCode::Char('d'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
            | KeyEvent { code: KeyCode::Char('q'), .. } => {
                self.should_quit = true;
                true
            }

            // Add a point at a random spot
            KeyEvent { code: KeyCode::Char('a'), .. } => {
                if !self.plot(None) {
                    self.notice = Some("palette exhausted, remove a point first".to_string());
                }
                true
            }

            // Remove the selected point
            KeyEvent { code: KeyCode::Char('x'), .. }
            | KeyEvent { code: KeyCode::Delete, .. } => {
                self.remove_at(self.cards.selected);
                true
            }

            // Nudge the selected point
            KeyEvent {
                code: KeyCode::Left,
                modifiers: KeyModifiers::SHIFT,
                ..
            } => {
                self.nudge(-NUDGE_STEP, 0.0);
                true
            }
            KeyEvent {
                code: KeyCode::Right,
                modifiers: KeyModifiers::SHIFT,
                ..
            } => {
                self.nudge(NUDGE_STEP, 0.0);
                true
            }
            KeyEvent {
                code: KeyCode::Up,
                modifiers: KeyModifiers::SHIFT,
                ..
            } => {
                self.nudge(0.0, NUDGE_STEP);
                true
            }
            KeyEvent {
                code: KeyCode::Down,
                modifiers: KeyModifiers::SHIFT,
                ..
            } => {
                self.nudge(0.0, -NUDGE_STEP);
                true
            }

            // Card selection
            KeyEvent { code: KeyCode::Left, .. } => {
                self.cards.select_prev();
                true
            }
            KeyEvent { code: KeyCode::Right, .. } => {
                self.cards.select_next();
                true
            }

            // Narration
            KeyEvent { code: KeyCode::Enter, .. } => {
                self.speak_selected();
                true
            }
            KeyEvent { code: KeyCode::Char('s'), .. } => {
                self.speak_sum();
                true
            }

            // Angle unit and details
            KeyEvent { code: KeyCode::Char('u'), .. } => {
                self.angle_unit = self.angle_unit.next();
                self.rebuild_cards();
                true
            }
            KeyEvent { code: KeyCode::Char('t'), .. } => {
                self.show_details = !self.show_details;
                true
            }

            // Glossary overlay
            KeyEvent { code: KeyCode::Char('g'), .. }
            | KeyEvent { code: KeyCode::F(1), .. } => {
                self.glossary.toggle();
                true
            }

            // Snapshot and boards
            KeyEvent { code: KeyCode::Char('e'), .. } => {
                self.export_snapshot();
                true
            }
            KeyEvent { code: KeyCode::Char('w'), .. } => {
                self.save_board();
                true
            }
            KeyEvent { code: KeyCode::Char('o'), .. } => {
                self.load_latest_board();
                true
            }

            _ => false,
        }
    }

    fn nudge(&mut self, d_re: f64, d_im: f64) {
        let index = self.cards.selected;
        let Some(point) = self.registry.get(index) else {
            return;
        };
        self.active_point = Some(point.point_node);

        let current = self.positions[index];
        let target = PlanePoint::new(
            current.x + d_re * self.transform.scale,
            current.y + d_im * self.transform.scale,
        );
        self.update_active_position(target, true);
    }

    fn speak_selected(&mut self) {
        let entries = self.entries();
        if let Some((z, _)) = entries.get(self.cards.selected) {
            self.narrator
                .speak(&z.spoken_description(self.angle_unit, false));
        }
    }

    fn speak_sum(&mut self) {
        if self.registry.len() < 2 {
            return;
        }
        let sum = self.sum.sum();
        self.narrator
            .speak(&sum.spoken_description(self.angle_unit, true));
    }

    // --- Mouse handling ---

    /// Handle a mouse event. Returns true if the screen should be redrawn.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if self.glossary.visible {
            return false;
        }
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.mouse_down(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => self.mouse_drag(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => self.mouse_up(),
            _ => false,
        }
    }

    fn mouse_down(&mut self, column: u16, row: u16) -> bool {
        if let Some(position) = canvas::cell_to_plane(self.plane_area, column, row) {
            if let Some(index) = self.point_at(position) {
                if let Some(point) = self.registry.get(index) {
                    self.active_point = Some(point.point_node);
                    self.drag_in_progress = true;
                    self.cards.selected = index;
                    return true;
                }
            }
            return false;
        }

        if let Some(slot) = cards::card_hit(self.cards_area, column, row) {
            if slot < self.cards.len() {
                self.cards.selected = slot;
                self.speak_selected();
                return true;
            }
            if slot == self.cards.len() && !self.registry.is_full() {
                self.plot(None);
                return true;
            }
        }
        false
    }

    fn mouse_drag(&mut self, column: u16, row: u16) -> bool {
        if !self.drag_in_progress {
            return false;
        }
        let Some(position) = canvas::cell_to_plane(self.plane_area, column, row) else {
            return false;
        };
        self.update_active_position(position, false);
        true
    }

    fn mouse_up(&mut self) -> bool {
        if !self.drag_in_progress {
            return false;
        }
        self.drag_in_progress = false;

        // Final position is already live; force the card refresh.
        if let Some(index) = self.active_index() {
            let position = self.positions[index];
            self.update_active_position(position, true);
        }
        true
    }

    /// Presentation index of the marker within grab range, nearest first.
    fn point_at(&self, position: PlanePoint) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, marker) in self.positions.iter().enumerate() {
            let dx = marker.x - position.x;
            let dy = marker.y - position.y;
            let distance = (dx * dx + dy * dy).sqrt();
            if distance <= GRAB_RADIUS && best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    // --- Boards and snapshots ---

    fn save_board(&mut self) {
        let name = self
            .board_name
            .clone()
            .unwrap_or_else(board::timestamp_name);
        let points = self
            .entries()
            .iter()
            .map(|(z, _)| SavedPoint { re: z.re(), im: z.im() })
            .collect();
        let saved = SavedBoard {
            name: name.clone(),
            timestamp: board::timestamp_iso(),
            points,
        };

        match board::save_board(&saved) {
            Ok(()) => {
                self.board_name = Some(name.clone());
                self.notice = Some(format!("Board saved: {}", name));
            }
            Err(e) => self.notice = Some(format!("Save failed: {}", e)),
        }
    }

    fn load_latest_board(&mut self) {
        let boards = board::list_boards();
        let Some((name, _)) = boards.first() else {
            self.notice = Some("No saved boards.".to_string());
            return;
        };

        match board::load_board(name) {
            Ok(saved) => {
                self.registry = PointRegistry::new();
                self.positions.clear();
                self.sum = SumState::new();
                self.active_point = None;
                self.drag_in_progress = false;
                self.cards = CardStrip::new();

                for point in &saved.points {
                    self.plot(Some(ComplexNumber::new(point.re, point.im)));
                }
                self.board_name = Some(saved.name.clone());
                self.notice = Some(format!(
                    "Board loaded: {} ({} points)",
                    saved.name,
                    saved.points.len()
                ));
            }
            Err(e) => self.notice = Some(format!("Load failed: {}", e)),
        }
    }

    fn export_snapshot(&mut self) {
        let scene = SnapshotScene {
            points: self.entries(),
            sum: (self.registry.len() >= 2).then(|| self.sum.sum()),
            range: PLANE_SIZE / (2.0 * self.transform.scale),
        };
        match export_snapshot(&scene) {
            Ok(path) => self.notice = Some(format!("Snapshot written: {}", path.display())),
            Err(e) => self.notice = Some(format!("Export failed: {}", e)),
        }
    }

    // --- Rendering ---

    /// Render the full UI.
    pub fn render(&mut self, frame: &mut Frame) {
        let outer = Layout::vertical([
            Constraint::Length(1),         // Status bar
            Constraint::Length(CARD_ROWS), // Card strip
            Constraint::Min(10),           // Plane
            Constraint::Length(1),         // Sum bar
            Constraint::Length(1),         // Hint / notice
        ])
        .split(frame.area());

        render_status_bar(
            frame,
            outer[0],
            self.board_name.as_deref(),
            self.angle_unit,
            self.registry.len(),
            PointRegistry::palette_size(),
        );

        self.cards_area = outer[1];
        self.render_cards(frame, outer[1]);

        self.plane_area = outer[2];
        let entries: Vec<(PlanePoint, Rgb)> = self
            .registry
            .points()
            .iter()
            .zip(&self.positions)
            .map(|(point, position)| (*position, point.color))
            .collect();
        let view = PlaneView {
            entries: &entries,
            sum: &self.sum,
            transform: &self.transform,
            active: self.active_index(),
            show_details: self.show_details,
            angle_unit: self.angle_unit,
        };
        canvas::render_plane(frame, outer[2], &view);

        let sum_entries = self.entries();
        frame.render_widget(
            sumbar::sum_line(&sum_entries, &self.sum.sum(), self.angle_unit),
            outer[3],
        );

        self.render_hint(frame, outer[4]);

        if self.glossary.visible {
            self.render_glossary(frame, frame.area());
        }
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        for (index, card) in self.cards.cards.iter().enumerate() {
            let Some(rect) = cards::card_rect(area, index) else {
                break;
            };

            let selected = index == self.cards.selected;
            let border = if selected {
                Theme::node(card.color).add_modifier(ratatui::style::Modifier::BOLD)
            } else {
                Theme::node(card.color)
            };
            let title = if selected { " \u{25b8} z " } else { " z " };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(title, Theme::node(card.color)));
            let inner = block.inner(rect);
            frame.render_widget(block, rect);

            let lines = vec![
                Line::from(Span::styled(card.cartesian.clone(), Theme::node(card.color))),
                Line::from(Span::styled(card.modulus.clone(), Theme::text())),
                Line::from(Span::styled(card.angle.clone(), Theme::text())),
            ];
            frame.render_widget(Paragraph::new(lines), inner);
        }

        if !self.registry.is_full() {
            if let Some(rect) = cards::card_rect(area, self.cards.len()) {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border());
                let inner = block.inner(rect);
                frame.render_widget(block, rect);
                frame.render_widget(
                    Paragraph::new(vec![
                        Line::from(Span::styled("  +", Theme::label())),
                        Line::from(Span::styled(" add point", Theme::hint())),
                    ]),
                    inner,
                );
            }
        }
    }

    fn render_hint(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.notice {
            Some(notice) => Line::from(Span::styled(format!(" {}", notice), Theme::notice())),
            None => Line::from(Span::styled(
                " a add | x remove | drag or shift+arrows move | u angle | t details | \
                 enter speak | s sum | g glossary | e export | w/o board | q quit",
                Theme::hint(),
            )),
        };
        frame.render_widget(line, area);
    }

    fn render_glossary(&self, frame: &mut Frame, area: Rect) {
        // 80% of the screen, centered
        let w = (area.width * 4 / 5).max(40);
        let h = (area.height * 4 / 5).max(10);
        let x = area.x + (area.width.saturating_sub(w)) / 2;
        let y = area.y + (area.height.saturating_sub(h)) / 2;
        let popup_area = Rect { x, y, width: w, height: h };

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border_focused())
            .title(Span::styled(
                " Glossary \u{2014} Esc to close, Enter to hear ",
                Theme::title(),
            ));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let columns = Layout::horizontal([
            Constraint::Percentage(35),
            Constraint::Percentage(65),
        ])
        .split(inner);

        let items: Vec<ListItem> = GLOSSARY
            .iter()
            .enumerate()
            .map(|(index, (term, _))| {
                let style = if index == self.glossary.selected {
                    Theme::selected()
                } else {
                    Theme::text()
                };
                ListItem::new(Span::styled(format!(" {} ", term), style))
            })
            .collect();
        frame.render_widget(List::new(items), columns[0]);

        let (term, definition) = self.glossary.selected_entry();
        let text = vec![
            Line::from(Span::styled(term, Theme::label())),
            Line::from(""),
            Line::from(Span::styled(definition, Theme::text())),
        ];
        frame.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: true }),
            columns[1],
        );
    }
}

/// A spawn position in the central region of the plane.
fn random_spawn_position() -> PlanePoint {
    let mut rng = rand::thread_rng();
    PlanePoint::new(
        rng.gen_range(PLANE_SIZE * 0.2..PLANE_SIZE * 0.8),
        rng.gen_range(PLANE_SIZE * 0.2..PLANE_SIZE * 0.8),
    )
}

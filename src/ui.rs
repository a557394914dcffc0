use crate::{Controller, EditorConfig, Flow, Graph, InputEvent, KeyCode, Mode, MouseButton, Point};
use egui::{pos2, Align2, Color32, Event, FontId, Pos2, Rect, Sense, Stroke};

/// Mutation log entries kept across frames; the status bar only reads the newest
pub const EVENT_LOG_LIMIT: usize = 256;

const LEGEND: [&str; 4] = [
    "Left click: add vertex, or pick two vertices to connect them",
    "Right drag: move vertex",
    "Del/Space: delete selected vertex",
    "R: rename vertex (positive integer)",
];

/// Main application state
pub struct GraphSketchApp {
    graph: Graph,

    /// Interaction state machine
    controller: Controller,

    config: EditorConfig,
}

impl GraphSketchApp {
    pub fn new(config: EditorConfig) -> Self {
        let (x, y) = config.center();
        Self {
            graph: Graph::with_initial_vertex(Point::new(x, y)),
            controller: Controller::new(config.hit_radius()),
            config,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Run one frame's input through the controller. Stops at the first event
    /// that asks to quit; the mutation log is trimmed either way.
    pub fn apply_input(&mut self, events: impl IntoIterator<Item = InputEvent>) -> Flow {
        let mut flow = Flow::Continue;
        for event in events {
            if self.controller.handle(&mut self.graph, event) == Flow::Quit {
                log::info!(
                    "closing with {} vertices and {} edges",
                    self.graph.vertex_count(),
                    self.graph.edge_count()
                );
                flow = Flow::Quit;
                break;
            }
        }
        self.graph.trim_events(EVENT_LOG_LIMIT);
        flow
    }

    /// Feed input through the controller, then paint the result
    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click_and_drag());
        let canvas_rect = response.rect;

        let (events, close_requested) =
            ui.input(|i| (i.events.clone(), i.viewport().close_requested()));
        let mut input = translate_events(&events, canvas_rect);
        if close_requested {
            input.push(InputEvent::Quit);
        }
        if self.apply_input(input) == Flow::Quit {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }

        painter.rect_filled(canvas_rect, 0.0, rgb(self.config.background_color));

        let to_screen = |p: Point| pos2(canvas_rect.min.x + p.x, canvas_rect.min.y + p.y);

        // Edges first so vertices sit on top
        let edge_stroke = Stroke::new(self.config.edge_width, rgb(self.config.edge_color));
        for edge in self.graph.edges() {
            let (u, v) = edge.endpoints();
            if let (Some(a), Some(b)) = (self.graph.position(u), self.graph.position(v)) {
                painter.line_segment([to_screen(a), to_screen(b)], edge_stroke);
            }
        }

        let hovered = response.hover_pos().and_then(|pos| {
            let local = Point::new(pos.x - canvas_rect.min.x, pos.y - canvas_rect.min.y);
            self.graph.vertex_at(local, self.controller.hit_radius())
        });

        let label_font = FontId::proportional(self.config.label_font_size);
        let text_color = rgb(self.config.text_color);
        for vertex in self.graph.vertices() {
            let center = to_screen(vertex.position);
            let fill = if self.controller.is_highlighted(vertex.id) {
                rgb(self.config.selected_node_color)
            } else {
                rgb(self.config.node_color)
            };
            painter.circle_filled(center, self.config.node_radius, fill);
            if hovered == Some(vertex.id) {
                painter.circle_stroke(center, self.config.node_radius, Stroke::new(1.5, text_color));
            }
            painter.text(
                center,
                Align2::CENTER_CENTER,
                vertex.id.to_string(),
                label_font.clone(),
                text_color,
            );
        }

        self.draw_legend(&painter, canvas_rect);
    }

    /// Instructions in the top-left corner, plus the rename prompt when active
    fn draw_legend(&self, painter: &egui::Painter, canvas_rect: Rect) {
        let text_color = rgb(self.config.text_color);
        let legend_font = FontId::proportional(self.config.legend_font_size);
        let mut y = canvas_rect.min.y + 20.0;

        for line in LEGEND {
            painter.text(
                pos2(canvas_rect.min.x + 10.0, y),
                Align2::LEFT_TOP,
                line,
                legend_font.clone(),
                text_color,
            );
            y += 30.0;
        }

        if let Some(buffer) = self.controller.rename_buffer() {
            painter.text(
                pos2(canvas_rect.min.x + 10.0, y),
                Align2::LEFT_TOP,
                format!("New ID: {}", buffer),
                FontId::proportional(self.config.prompt_font_size),
                text_color,
            );
        }
    }

    fn status_message(&self) -> String {
        let last = self
            .graph
            .events()
            .last()
            .map(|e| e.event.describe())
            .unwrap_or_else(|| "Ready".to_string());

        let mode = match self.controller.mode() {
            Mode::Idle => String::new(),
            Mode::Dragging(id) => format!(" | Moving {}", id),
            Mode::Renaming(_) => match self.controller.last_selected() {
                Some(id) => format!(" | Renaming {}", id),
                None => " | Renaming (no vertex selected)".to_string(),
            },
        };

        format!("{}{}", last, mode)
    }
}

impl eframe::App for GraphSketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status_message());
                ui.separator();
                ui.label(format!("Vertices: {}", self.graph.vertex_count()));
                ui.label(format!("Edges: {}", self.graph.edge_count()));
            });
        });

        // Central panel (canvas)
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.render_canvas(ui);
            });

        if cfg!(debug_assertions) {
            let result = self.graph.validate();
            for issue in &result.issues {
                log::warn!("graph invariant broken: {}", issue.message);
            }
        }
    }
}

/// Convert one frame's egui events into controller input.
///
/// Positions become canvas-local. Presses outside the canvas are dropped;
/// releases and moves are kept so a drag can end anywhere. A `Text` event that
/// directly follows a key press is folded into that press.
pub fn translate_events(events: &[Event], canvas_rect: Rect) -> Vec<InputEvent> {
    let to_point = |pos: Pos2| Point::new(pos.x - canvas_rect.min.x, pos.y - canvas_rect.min.y);

    let mut translated = Vec::new();
    let mut iter = events.iter().peekable();

    while let Some(event) = iter.next() {
        match event {
            Event::PointerButton {
                pos,
                button,
                pressed,
                ..
            } => {
                let Some(button) = mouse_button(*button) else {
                    continue;
                };
                if !*pressed {
                    translated.push(InputEvent::MouseUp {
                        button,
                        pos: to_point(*pos),
                    });
                } else if canvas_rect.contains(*pos) {
                    translated.push(InputEvent::MouseDown {
                        button,
                        pos: to_point(*pos),
                    });
                }
            }
            Event::PointerMoved(pos) => translated.push(InputEvent::MouseMove {
                pos: to_point(*pos),
            }),
            Event::Key {
                key, pressed: true, ..
            } => {
                let key = key_code(*key);
                match iter.next_if(|next| matches!(next, Event::Text(_))) {
                    Some(Event::Text(typed)) => {
                        let mut chars = typed.chars();
                        translated.push(InputEvent::KeyDown {
                            key,
                            text: chars.next(),
                        });
                        translated.extend(chars.map(InputEvent::char));
                    }
                    _ => translated.push(InputEvent::key(key)),
                }
            }
            Event::Text(typed) => translated.extend(typed.chars().map(InputEvent::char)),
            _ => {}
        }
    }

    translated
}

fn mouse_button(button: egui::PointerButton) -> Option<MouseButton> {
    match button {
        egui::PointerButton::Primary => Some(MouseButton::Left),
        egui::PointerButton::Secondary => Some(MouseButton::Right),
        egui::PointerButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

fn key_code(key: egui::Key) -> KeyCode {
    match key {
        egui::Key::Space => KeyCode::Space,
        egui::Key::Delete => KeyCode::Delete,
        egui::Key::Backspace => KeyCode::Backspace,
        egui::Key::Enter => KeyCode::Enter,
        egui::Key::Escape => KeyCode::Escape,
        egui::Key::R => KeyCode::R,
        _ => KeyCode::Other,
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{vec2, Modifiers};
    use pretty_assertions::assert_eq;

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(10.0, 20.0), vec2(800.0, 600.0))
    }

    fn key(key: egui::Key, pressed: bool) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    fn button(pos: Pos2, button: egui::PointerButton, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn test_pointer_positions_are_canvas_local() {
        let events = vec![
            button(pos2(110.0, 120.0), egui::PointerButton::Primary, true),
            Event::PointerMoved(pos2(15.0, 25.0)),
        ];

        assert_eq!(
            translate_events(&events, canvas()),
            vec![
                InputEvent::left_click(Point::new(100.0, 100.0)),
                InputEvent::MouseMove {
                    pos: Point::new(5.0, 5.0)
                },
            ]
        );
    }

    #[test]
    fn test_presses_outside_canvas_are_dropped() {
        let events = vec![
            button(pos2(0.0, 0.0), egui::PointerButton::Secondary, true),
            button(pos2(0.0, 0.0), egui::PointerButton::Secondary, false),
        ];

        assert_eq!(
            translate_events(&events, canvas()),
            vec![InputEvent::MouseUp {
                button: MouseButton::Right,
                pos: Point::new(-10.0, -20.0)
            }]
        );
    }

    #[test]
    fn test_key_and_text_are_folded() {
        let events = vec![
            key(egui::Key::R, true),
            Event::Text("r".to_string()),
            key(egui::Key::R, false),
            key(egui::Key::Num5, true),
            Event::Text("5".to_string()),
            key(egui::Key::Enter, true),
        ];

        assert_eq!(
            translate_events(&events, canvas()),
            vec![
                InputEvent::KeyDown {
                    key: KeyCode::R,
                    text: Some('r')
                },
                InputEvent::KeyDown {
                    key: KeyCode::Other,
                    text: Some('5')
                },
                InputEvent::key(KeyCode::Enter),
            ]
        );
    }

    #[test]
    fn test_bare_text_becomes_key_presses() {
        let events = vec![Event::Text("ab".to_string())];
        assert_eq!(
            translate_events(&events, canvas()),
            vec![InputEvent::char('a'), InputEvent::char('b')]
        );
    }

    #[test]
    fn test_app_starts_with_centered_vertex() {
        let app = GraphSketchApp::new(EditorConfig::default());
        assert_eq!(app.graph().vertex_count(), 1);
        assert_eq!(
            app.graph().vertices()[0].position,
            Point::new(400.0, 300.0)
        );
        assert_eq!(app.status_message(), "Added vertex 1 at (400, 300)");
    }

    #[test]
    fn test_quit_stops_input_processing() {
        let mut app = GraphSketchApp::new(EditorConfig::default());
        let flow = app.apply_input(vec![
            InputEvent::left_click(Point::new(100.0, 100.0)),
            InputEvent::Quit,
            InputEvent::left_click(Point::new(200.0, 100.0)),
        ]);

        assert_eq!(flow, Flow::Quit);
        assert_eq!(app.graph().vertex_count(), 2);
        assert_eq!(
            app.apply_input(vec![InputEvent::MouseMove {
                pos: Point::default()
            }]),
            Flow::Continue
        );
    }

    #[test]
    fn test_event_log_stays_bounded() {
        let mut app = GraphSketchApp::new(EditorConfig::default());
        // Grid points 50 apart, offset so none lands on the starting vertex
        let clicks = (0..EVENT_LOG_LIMIT + 50).map(|i| {
            let x = 25.0 + (i % 40) as f32 * 50.0;
            let y = (i / 40) as f32 * 50.0;
            InputEvent::left_click(Point::new(x, y))
        });
        assert_eq!(app.apply_input(clicks), Flow::Continue);

        assert_eq!(app.graph().vertex_count(), EVENT_LOG_LIMIT + 51);
        assert_eq!(app.graph().events().len(), EVENT_LOG_LIMIT);
        assert_eq!(
            app.status_message(),
            format!("Added vertex {} at (1275, 350)", EVENT_LOG_LIMIT + 51)
        );
    }
}

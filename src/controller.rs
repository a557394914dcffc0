use crate::{Graph, InputEvent, KeyCode, MouseButton, Point, VertexId};
use std::collections::BTreeSet;

/// What the controller is currently doing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    /// Right button held on a vertex
    Dragging(VertexId),
    /// Collecting a new id for the last selected vertex
    Renaming(String),
}

/// Whether the event loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Transient interaction state, fed one input event at a time
#[derive(Debug, Clone)]
pub struct Controller {
    mode: Mode,

    /// Vertices waiting to be connected (at most two)
    selection: Vec<VertexId>,

    /// Vertices drawn in the selected color
    highlighted: BTreeSet<VertexId>,

    /// Most recently clicked vertex; survives edge completion so it can be renamed
    last_selected: Option<VertexId>,

    hit_radius: f32,
}

impl Controller {
    pub fn new(hit_radius: f32) -> Self {
        Self {
            mode: Mode::Idle,
            selection: Vec::new(),
            highlighted: BTreeSet::new(),
            last_selected: None,
            hit_radius,
        }
    }

    /// Process one input event against `graph`
    pub fn handle(&mut self, graph: &mut Graph, event: InputEvent) -> Flow {
        if event == InputEvent::Quit {
            return Flow::Quit;
        }

        match self.mode {
            Mode::Idle => self.handle_idle(graph, event),
            Mode::Dragging(id) => self.handle_dragging(graph, id, event),
            Mode::Renaming(_) => self.handle_renaming(graph, event),
        }

        Flow::Continue
    }

    fn handle_idle(&mut self, graph: &mut Graph, event: InputEvent) {
        match event {
            InputEvent::MouseDown {
                button: MouseButton::Left,
                pos,
            } => match graph.vertex_at(pos, self.hit_radius) {
                Some(id) => self.select(graph, id),
                None => self.add_vertex(graph, pos),
            },
            InputEvent::MouseDown {
                button: MouseButton::Right,
                pos,
            } => {
                if let Some(id) = graph.vertex_at(pos, self.hit_radius) {
                    log::debug!("dragging vertex {}", id);
                    self.mode = Mode::Dragging(id);
                }
            }
            InputEvent::KeyDown {
                key: KeyCode::Space | KeyCode::Delete,
                ..
            } => self.delete_selected(graph),
            InputEvent::KeyDown { key: KeyCode::R, .. } => {
                self.mode = Mode::Renaming(String::new());
            }
            _ => {}
        }
    }

    fn handle_dragging(&mut self, graph: &mut Graph, id: VertexId, event: InputEvent) {
        match event {
            InputEvent::MouseMove { pos } => {
                if !graph.move_vertex(id, pos) {
                    self.mode = Mode::Idle;
                }
            }
            InputEvent::MouseUp {
                button: MouseButton::Right,
                ..
            } => {
                log::debug!("dropped vertex {}", id);
                self.mode = Mode::Idle;
            }
            _ => {}
        }
    }

    fn handle_renaming(&mut self, graph: &mut Graph, event: InputEvent) {
        let InputEvent::KeyDown { key, text } = event else {
            return;
        };

        match key {
            KeyCode::Enter => self.commit_rename(graph),
            KeyCode::Escape => {
                log::debug!("rename cancelled");
                self.mode = Mode::Idle;
            }
            _ => {
                if let Mode::Renaming(buffer) = &mut self.mode {
                    match (key, text) {
                        (KeyCode::Backspace, _) => {
                            buffer.pop();
                        }
                        (_, Some(c)) if !c.is_control() => buffer.push(c),
                        _ => {}
                    }
                }
            }
        }
    }

    fn add_vertex(&mut self, graph: &mut Graph, pos: Point) {
        if let Err(e) = graph.add_vertex(pos) {
            log::warn!("could not add vertex: {}", e);
        }
    }

    fn select(&mut self, graph: &mut Graph, id: VertexId) {
        self.selection.push(id);
        self.highlighted.insert(id);
        self.last_selected = Some(id);

        if let [u, v] = self.selection[..] {
            graph.add_edge(u, v);
            self.clear_selection();
        }
    }

    fn delete_selected(&mut self, graph: &mut Graph) {
        let Some(&id) = self.selection.last() else {
            return;
        };

        graph.remove_vertex(id);
        self.clear_selection();
        if self.last_selected == Some(id) {
            self.last_selected = None;
        }
    }

    fn commit_rename(&mut self, graph: &mut Graph) {
        let Mode::Renaming(buffer) = std::mem::take(&mut self.mode) else {
            return;
        };

        let new_id = match VertexId::parse(&buffer) {
            Ok(new_id) => new_id,
            Err(e) => {
                log::debug!("rename aborted: {}", e);
                return;
            }
        };
        let Some(old_id) = self.last_selected else {
            log::debug!("rename aborted: no vertex selected");
            return;
        };

        match graph.rename_vertex(old_id, new_id.get()) {
            Ok(new_id) => self.remap(old_id, new_id),
            Err(e) => log::debug!("rename rejected: {}", e),
        }
    }

    /// Point every pending reference to `old_id` at `new_id`
    fn remap(&mut self, old_id: VertexId, new_id: VertexId) {
        for selected in self.selection.iter_mut().filter(|s| **s == old_id) {
            *selected = new_id;
        }
        if self.highlighted.remove(&old_id) {
            self.highlighted.insert(new_id);
        }
        if self.last_selected == Some(old_id) {
            self.last_selected = Some(new_id);
        }
    }

    fn clear_selection(&mut self) {
        self.selection.clear();
        self.highlighted.clear();
    }

    // ========== Queries ==========

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_idle(&self) -> bool {
        self.mode == Mode::Idle
    }

    /// Text typed so far while renaming
    pub fn rename_buffer(&self) -> Option<&str> {
        match &self.mode {
            Mode::Renaming(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// Pending selection, oldest first
    pub fn selection(&self) -> &[VertexId] {
        &self.selection
    }

    pub fn highlighted(&self) -> &BTreeSet<VertexId> {
        &self.highlighted
    }

    pub fn is_highlighted(&self, id: VertexId) -> bool {
        self.highlighted.contains(&id)
    }

    pub fn last_selected(&self) -> Option<VertexId> {
        self.last_selected
    }

    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }
}

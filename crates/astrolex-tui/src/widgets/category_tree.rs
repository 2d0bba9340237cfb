//! Category tree widget — "All entries" root with one node per category.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor up and down the visible list.
//! - `→`/`l` expands the focused node; `←`/`h` collapses it.
//! - `Enter` makes the focused node the active filter for the entry list.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use astrolex_core::Glossary;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Id of the root node; activating it lists every entry.
pub const ALL: &str = "__all__";

// ---------------------------------------------------------------------------
// Tree node
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Category id, or [`ALL`] for the root.
    pub id: String,
    pub label: String,
    /// Number of entries under this node.
    pub count: usize,
    /// Category colour token; empty for the root.
    pub color: String,
    pub expanded: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>, count: usize) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            count,
            color: String::new(),
            expanded: true,
            children: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }
}

// ---------------------------------------------------------------------------
// Tree state
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct CategoryTreeState {
    pub nodes: Vec<TreeNode>,
    /// Index into the currently-visible (flattened) list.
    pub cursor: usize,
    /// Id of the node whose entries are listed.
    pub active: String,
}

impl CategoryTreeState {
    /// Build the tree for a glossary: the root counts every entry, each child
    /// counts the entries that reference its category.
    pub fn from_glossary(glossary: &Glossary<'_>) -> Self {
        let children = glossary
            .category_counts()
            .into_iter()
            .map(|(category, count)| {
                TreeNode::new(category.id, category.name, count).with_color(category.color)
            })
            .collect();
        let root =
            TreeNode::new(ALL, "All entries", glossary.entries().len()).with_children(children);
        Self {
            nodes: vec![root],
            cursor: 0,
            active: ALL.to_string(),
        }
    }

    /// Return the id of the node at the cursor, if any.
    fn cursor_id(&self) -> Option<String> {
        self.visible()
            .into_iter()
            .nth(self.cursor)
            .map(|(_, n)| n.id.clone())
    }

    /// Flatten the tree into `(depth, &node)` pairs, respecting expanded state.
    pub fn visible(&self) -> Vec<(usize, &TreeNode)> {
        flatten(&self.nodes, 0)
    }

    /// Move the cursor onto the node with `id` and make it active. Returns
    /// `false` when no visible node has that id.
    pub fn activate(&mut self, id: &str) -> bool {
        let Some(pos) = self.visible().iter().position(|(_, n)| n.id == id) else {
            return false;
        };
        self.cursor = pos;
        self.active = id.to_string();
        true
    }

    /// Handle an [`AppEvent`]. Returns the id of the node that became active,
    /// if the event activated one.
    pub fn handle(&mut self, event: &AppEvent) -> Option<String> {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "tree: cursor up");
            }
            AppEvent::Nav(Direction::Down) => {
                let max = self.visible().len().saturating_sub(1);
                if self.cursor < max {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "tree: cursor down");
            }
            AppEvent::Nav(Direction::Right) => {
                if let Some(id) = self.cursor_id() {
                    tracing::debug!(node = %id, "tree: expand");
                    set_expanded(&mut self.nodes, &id, true);
                }
            }
            AppEvent::Nav(Direction::Left) => {
                if let Some(id) = self.cursor_id() {
                    tracing::debug!(node = %id, "tree: collapse");
                    set_expanded(&mut self.nodes, &id, false);
                    self.clamp_cursor();
                }
            }
            AppEvent::Enter => {
                if let Some(id) = self.cursor_id() {
                    tracing::debug!(node = %id, "tree: activate");
                    self.active = id.clone();
                    return Some(id);
                }
            }
            _ => {}
        }
        None
    }

    fn clamp_cursor(&mut self) {
        let max = self.visible().len().saturating_sub(1);
        if self.cursor > max {
            self.cursor = max;
        }
    }
}

// ---------------------------------------------------------------------------
// Recursive tree helpers
// ---------------------------------------------------------------------------

fn flatten(nodes: &[TreeNode], depth: usize) -> Vec<(usize, &TreeNode)> {
    let mut out = Vec::new();
    for node in nodes {
        out.push((depth, node));
        if node.expanded {
            out.extend(flatten(&node.children, depth + 1));
        }
    }
    out
}

/// Set the `expanded` flag on the node with `id`. Returns `true` if found.
/// Leaves have nothing to expand and are left untouched.
fn set_expanded(nodes: &mut [TreeNode], id: &str, expanded: bool) -> bool {
    for node in nodes.iter_mut() {
        if node.id == id {
            if !node.children.is_empty() {
                node.expanded = expanded;
            }
            return true;
        }
        if set_expanded(&mut node.children, id, expanded) {
            return true;
        }
    }
    false
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct CategoryTree<'a> {
    state: &'a CategoryTreeState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CategoryTree<'a> {
    pub fn new(state: &'a CategoryTreeState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for CategoryTree<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Categories").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .state
            .visible()
            .iter()
            .map(|(depth, node)| {
                let indent = "  ".repeat(*depth);
                let expand = if node.children.is_empty() {
                    "  "
                } else if node.expanded {
                    "▼ "
                } else {
                    "▶ "
                };
                let marker = if node.id == self.state.active { "● " } else { "  " };
                let label_style = if node.color.is_empty() {
                    Style::default()
                } else {
                    self.theme.category_style(&node.color)
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{indent}{expand}")),
                    Span::styled(marker, label_style),
                    Span::styled(node.label.clone(), label_style),
                    Span::styled(format!(" ({})", node.count), self.theme.muted),
                ]))
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items).highlight_style(highlight);

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

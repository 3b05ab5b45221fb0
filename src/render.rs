//! Rendering options and shared formatting helpers.
//!
//! Every component renders itself twice: as an indented text dump and as a
//! fragment of a dot-language graph. Both forms honour the same depth cut-off.

/// Horizontal rule framing group names in text dumps.
pub const RULE: &str = "----------";

/// Marker repeated once per nesting level in text dumps.
pub const INDENT_MARKER: char = '|';

/// Options consumed by the render calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Depth at which rendering stops (`None` = unlimited)
    pub max_depth: Option<usize>,
    /// Render each pass as a dot graph instead of text
    pub draw_graph: bool,
    /// Render a single sampled pass as a dot graph
    pub draw_single_graph: bool,
    /// Emit wire nodes for combiners
    pub draw_nodes: bool,
    /// Draw wire nodes as points
    pub draw_shape_point: bool,
    /// Emit colored combiner edges
    pub draw_edges: bool,
    /// Render each pass as a compact `inputs=>outputs` line
    pub unit_test: bool,
}

impl RenderOptions {
    /// Create options with every toggle off and unlimited depth.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for compact truth-table lines.
    pub fn truth_table() -> Self {
        Self::new().with_unit_test(true)
    }

    /// Set the maximum depth.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum depth from a signed value, negative meaning unlimited.
    pub fn with_signed_max_depth(self, max_depth: i64) -> Self {
        self.with_max_depth(usize::try_from(max_depth).ok())
    }

    pub fn with_graph(mut self, draw_graph: bool) -> Self {
        self.draw_graph = draw_graph;
        self
    }

    pub fn with_single_graph(mut self, draw_single_graph: bool) -> Self {
        self.draw_single_graph = draw_single_graph;
        self
    }

    pub fn with_nodes(mut self, draw_nodes: bool) -> Self {
        self.draw_nodes = draw_nodes;
        self
    }

    pub fn with_shape_point(mut self, draw_shape_point: bool) -> Self {
        self.draw_shape_point = draw_shape_point;
        self
    }

    pub fn with_edges(mut self, draw_edges: bool) -> Self {
        self.draw_edges = draw_edges;
        self
    }

    pub fn with_unit_test(mut self, unit_test: bool) -> Self {
        self.unit_test = unit_test;
        self
    }

    /// Check if passes render as dot graphs.
    pub fn is_graph(&self) -> bool {
        self.draw_graph || self.draw_single_graph
    }

    /// Check if rendering must stop at `depth`.
    pub fn depth_exhausted(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

/// Text indentation for `depth`.
pub fn indent(depth: usize) -> String {
    std::iter::repeat(INDENT_MARKER).take(depth).collect()
}

/// Dot indentation for `depth` (one level deeper than the graph body).
pub fn dot_indent(depth: usize) -> String {
    "  ".repeat(depth + 1)
}

/// Quote a name as a dot identifier.
pub fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Frame already-rendered child blocks with a header and footer line.
///
/// Empty child renderings are dropped.
pub fn frame(name: &str, depth: usize, children: impl IntoIterator<Item = String>) -> String {
    let indent = indent(depth);
    let header = format!("{indent}{RULE} {name} {RULE}");
    let width = header.chars().count() - depth;

    let mut lines = vec![header];
    lines.extend(children.into_iter().filter(|child| !child.is_empty()));
    lines.push(format!("{indent}{}", "-".repeat(width)));
    lines.join("\n")
}

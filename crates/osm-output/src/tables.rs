//! One value per output stream.

use osm_model::RecordKind;

/// A value for each of the five streams, addressable by [`RecordKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tables<T> {
    pub nodes: T,
    pub node_tags: T,
    pub ways: T,
    pub way_nodes: T,
    pub way_tags: T,
}

impl<T> Tables<T> {
    /// Build each entry from its stream.
    pub fn from_fn(mut f: impl FnMut(RecordKind) -> T) -> Self {
        Self {
            nodes: f(RecordKind::Node),
            node_tags: f(RecordKind::NodeTags),
            ways: f(RecordKind::Way),
            way_nodes: f(RecordKind::WayNodes),
            way_tags: f(RecordKind::WayTags),
        }
    }

    pub fn get(&self, kind: RecordKind) -> &T {
        match kind {
            RecordKind::Node => &self.nodes,
            RecordKind::NodeTags => &self.node_tags,
            RecordKind::Way => &self.ways,
            RecordKind::WayNodes => &self.way_nodes,
            RecordKind::WayTags => &self.way_tags,
        }
    }

    pub fn get_mut(&mut self, kind: RecordKind) -> &mut T {
        match kind {
            RecordKind::Node => &mut self.nodes,
            RecordKind::NodeTags => &mut self.node_tags,
            RecordKind::Way => &mut self.ways,
            RecordKind::WayNodes => &mut self.way_nodes,
            RecordKind::WayTags => &mut self.way_tags,
        }
    }

    /// Fallible conversion of every entry, in stream order.
    pub fn try_map<U, E>(
        self,
        mut f: impl FnMut(RecordKind, T) -> Result<U, E>,
    ) -> Result<Tables<U>, E> {
        Ok(Tables {
            nodes: f(RecordKind::Node, self.nodes)?,
            node_tags: f(RecordKind::NodeTags, self.node_tags)?,
            ways: f(RecordKind::Way, self.ways)?,
            way_nodes: f(RecordKind::WayNodes, self.way_nodes)?,
            way_tags: f(RecordKind::WayTags, self.way_tags)?,
        })
    }
}

/// File name a stream is written to.
pub fn file_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Node => "nodes.csv",
        RecordKind::NodeTags => "nodes_tags.csv",
        RecordKind::Way => "ways.csv",
        RecordKind::WayNodes => "ways_nodes.csv",
        RecordKind::WayTags => "ways_tags.csv",
    }
}

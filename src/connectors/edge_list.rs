use crate::error::{GraphError, Result};
use crate::graph::{Edge, VertexId};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Edges parsed from a plain-text edge list, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    pub edges: Vec<Edge>,
    /// Lines dropped because they did not name two integer vertex ids
    pub malformed: usize,
    pub self_loops: usize,
}

impl EdgeList {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges.iter().map(Edge::endpoints)
    }
}

/// Parse one record of the form `u v [ignored...]`, separated by whitespace
/// or commas. Blank lines and `#` / `%` comments yield `Ok(None)`.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<(VertexId, VertexId)>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
        return Ok(None);
    }

    let mut fields = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|f| !f.is_empty());

    let (Some(a), Some(b)) = (fields.next(), fields.next()) else {
        return Err(GraphError::parse(line_no, "expected two vertex ids"));
    };

    let u = a
        .parse::<VertexId>()
        .map_err(|e| GraphError::parse(line_no, format!("bad vertex id '{}': {}", a, e)))?;
    let v = b
        .parse::<VertexId>()
        .map_err(|e| GraphError::parse(line_no, format!("bad vertex id '{}': {}", b, e)))?;

    Ok(Some((u, v)))
}

/// Read an edge list. Malformed lines and self-loops are counted and
/// dropped; only I/O failures abort the read.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<EdgeList> {
    let mut list = EdgeList::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        match parse_line(&line, line_no) {
            Ok(Some((u, v))) => match Edge::new(u, v) {
                Ok(edge) => list.edges.push(edge),
                Err(_) => list.self_loops += 1,
            },
            Ok(None) => {}
            Err(err) => {
                log::warn!("Dropping record: {}", err);
                list.malformed += 1;
            }
        }
    }

    log::debug!(
        "Read {} edges ({} malformed, {} self-loops dropped)",
        list.edges.len(),
        list.malformed,
        list.self_loops
    );
    Ok(list)
}

pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<EdgeList> {
    let file = File::open(path.as_ref())?;
    log::debug!("Loading edge list from {}", path.as_ref().display());
    read_edge_list(BufReader::new(file))
}

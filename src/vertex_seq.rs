use crate::{END_OF_SEQUENCE, Vertex};

/// An owned sequence of vertices returned by neighbor queries such as
/// [`Graph::successors`](crate::Graph::successors).
///
/// The sequence belongs to the caller; it holds no reference to the graph
/// that produced it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VertexSeq(Vec<Vertex>);

impl VertexSeq {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.0.iter()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.0.contains(&vertex)
    }

    pub fn into_vec(self) -> Vec<Vertex> {
        self.0
    }

    /// Returns the vertices followed by [`END_OF_SEQUENCE`].
    pub fn to_terminated(&self) -> Vec<Vertex> {
        let mut terminated = Vec::with_capacity(self.0.len() + 1);
        terminated.extend_from_slice(&self.0);
        terminated.push(END_OF_SEQUENCE);
        terminated
    }
}

impl AsRef<[Vertex]> for VertexSeq {
    fn as_ref(&self) -> &[Vertex] {
        &self.0
    }
}

impl FromIterator<Vertex> for VertexSeq {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        VertexSeq(iter.into_iter().collect())
    }
}

impl IntoIterator for VertexSeq {
    type Item = Vertex;
    type IntoIter = std::vec::IntoIter<Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VertexSeq {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminated() {
        let seq: VertexSeq = [3, 1].into_iter().collect();
        assert_eq!(seq.to_terminated(), vec![3, 1, END_OF_SEQUENCE]);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_empty_terminated() {
        let seq = VertexSeq::default();
        assert!(seq.is_empty());
        assert_eq!(seq.to_terminated(), vec![END_OF_SEQUENCE]);
    }
}

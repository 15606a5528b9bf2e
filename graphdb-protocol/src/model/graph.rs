use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::{Serialize, Serializer};

use crate::encoding::{pairs, Pair, Tagged};
use crate::value::{hash_unordered, Value};

/// Physical address of a node or relationship: table plus row offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct InternalId {
    pub table_id: u64,
    pub offset: u64,
}

impl InternalId {
    pub fn new(table_id: u64, offset: u64) -> InternalId {
        InternalId { table_id, offset }
    }
}

impl fmt::Display for InternalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.table_id, self.offset)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: InternalId,
    pub label: String,
    pub properties: HashMap<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rel {
    pub src_node: InternalId,
    pub dst_node: InternalId,
    pub label: String,
    pub properties: HashMap<String, Value>,
}

/// A path: the nodes and relationships it visits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RecursiveRel {
    pub nodes: Vec<Node>,
    pub rels: Vec<Rel>,
}

impl Node {
    pub fn new(id: InternalId, label: impl Into<String>) -> Node {
        Node {
            id,
            label: label.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Node {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl Rel {
    pub fn new(src_node: InternalId, dst_node: InternalId, label: impl Into<String>) -> Rel {
        Rel {
            src_node,
            dst_node,
            label: label.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Rel {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl RecursiveRel {
    pub fn new(nodes: Vec<Node>, rels: Vec<Rel>) -> RecursiveRel {
        RecursiveRel { nodes, rels }
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.label.hash(state);
        hash_unordered(&self.properties, state);
    }
}

impl Hash for Rel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.src_node.hash(state);
        self.dst_node.hash(state);
        self.label.hash(state);
        hash_unordered(&self.properties, state);
    }
}

#[derive(serde::Serialize)]
struct NodePayload<'a> {
    id: &'a InternalId,
    label: &'a str,
    properties: Vec<Pair<&'a String, &'a Value>>,
}

#[derive(serde::Serialize)]
struct RelPayload<'a> {
    src_node: &'a InternalId,
    dst_node: &'a InternalId,
    label: &'a str,
    properties: Vec<Pair<&'a String, &'a Value>>,
}

#[derive(serde::Serialize)]
struct RecursiveRelPayload<'a> {
    nodes: &'a [Node],
    rels: &'a [Rel],
}

// Graph elements are always written in tagged form, also when nested
// inside a path.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = NodePayload {
            id: &self.id,
            label: &self.label,
            properties: pairs(&self.properties),
        };
        Tagged::new("Node", &payload).serialize(serializer)
    }
}

impl Serialize for Rel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = RelPayload {
            src_node: &self.src_node,
            dst_node: &self.dst_node,
            label: &self.label,
            properties: pairs(&self.properties),
        };
        Tagged::new("Rel", &payload).serialize(serializer)
    }
}

impl Serialize for RecursiveRel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let payload = RecursiveRelPayload {
            nodes: &self.nodes,
            rels: &self.rels,
        };
        Tagged::new("RecursiveRel", &payload).serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_id_display() {
        assert_eq!(InternalId::new(3, 17).to_string(), "3:17");
    }

    #[test]
    fn internal_id_order() {
        assert!(InternalId::new(1, 9) < InternalId::new(2, 0));
        assert!(InternalId::new(1, 1) < InternalId::new(1, 2));
    }

    #[test]
    fn builder_sets_properties() {
        let node = Node::new(InternalId::new(0, 1), "Person")
            .with_property("name", "Ada")
            .with_property("age", 36i64);
        assert_eq!(node.properties.len(), 2);
        assert_eq!(node.properties["age"], Value::Int64(36));
    }
}

//! JSON decoding into [`Node`] trees.
//!
//! Objects keep their field order (serde_json is built with
//! `preserve_order`). Numbers that fit an integer become `Integer`, all
//! others become `Float`, so `1` and `1.0` decode to different kinds.

use std::path::Path as FsPath;

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::error::{TypeError, TypeResult};
use crate::node::{Mapping, Node, Scalar};

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::null(),
            Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Node::Scalar(number_to_scalar(&n)),
            Value::String(s) => Node::Scalar(Scalar::String(s)),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                let mut mapping = Mapping::with_capacity(map.len());
                for (k, v) in map {
                    mapping.insert(k, Node::from(v));
                }
                Node::Mapping(mapping)
            }
        }
    }
}

fn number_to_scalar(n: &Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Integer(i128::from(i))
    } else if let Some(u) = n.as_u64() {
        Scalar::Integer(i128::from(u))
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

impl Node {
    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> TypeResult<Self> {
        let value: Value = serde_json::from_str(s)?;
        Ok(Node::from(value))
    }

    /// Convert back to a JSON value.
    ///
    /// Binary blobs become hex strings, non-finite floats become strings
    /// (`"NaN"`, `"inf"`), and integers outside the 64-bit range become
    /// their decimal string.
    pub fn to_json(&self) -> Value {
        match self {
            Node::Mapping(m) => {
                let mut map = Map::with_capacity(m.len());
                for (k, v) in m.iter() {
                    map.insert(k.to_string(), v.to_json());
                }
                Value::Object(map)
            }
            Node::Sequence(items) => Value::Array(items.iter().map(Node::to_json).collect()),
            Node::Scalar(s) => scalar_to_json(s),
        }
    }
}

fn scalar_to_json(s: &Scalar) -> Value {
    match s {
        Scalar::Null => Value::Null,
        Scalar::Bool(b) => Value::Bool(*b),
        Scalar::Integer(i) => {
            if let Ok(v) = i64::try_from(*i) {
                Value::from(v)
            } else if let Ok(v) = u64::try_from(*i) {
                Value::from(v)
            } else {
                Value::String(i.to_string())
            }
        }
        Scalar::Float(x) => match Number::from_f64(*x) {
            Some(n) => Value::Number(n),
            None => Value::String(x.to_string()),
        },
        Scalar::String(s) => Value::String(s.clone()),
        Scalar::Binary(bytes) => Value::String(hex::encode(bytes)),
    }
}

/// Read and decode a JSON file.
pub fn read_json_file(path: impl AsRef<FsPath>) -> TypeResult<Node> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| TypeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let node = Node::from_json_str(&text)?;
    debug!(path = %path.display(), kind = %node.kind(), "decoded JSON file");
    Ok(node)
}

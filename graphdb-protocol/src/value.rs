use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use serde::ser::{Error as _, Serialize, Serializer};

use crate::encoding::{pairs, Pair, Tagged};
use crate::logical_type::LogicalType;
use crate::model::time::{format_date, format_timestamp, interval_parts};
use crate::model::{BigDecimal, Bytes, DateTime, FixedOffset, NaiveDate, TimeDelta, Utc, Uuid};
use crate::model::{InternalId, Node, RecursiveRel, Rel};

/// A typed datum exchanged with the server.
///
/// Values are built by the caller to be sent as query parameters. Results
/// are never decoded back into this type.
///
/// Containers carry the [`LogicalType`] of their contents. It's up to the
/// caller to keep contents consistent with the declared type, the encoder
/// doesn't check it.
#[derive(Clone, Debug)]
pub enum Value {
    Null(LogicalType),
    Bool(bool),
    Int64(i64),
    Int32(i32),
    Int16(i16),
    Int8(i8),
    UInt64(u64),
    UInt32(u32),
    UInt16(u16),
    UInt8(u8),
    Int128(i128),
    Double(f64),
    Float(f32),
    Date(NaiveDate),
    Interval(TimeDelta),
    Timestamp(DateTime<FixedOffset>),
    TimestampTz(DateTime<FixedOffset>),
    TimestampNs(DateTime<FixedOffset>),
    TimestampMs(DateTime<FixedOffset>),
    TimestampSec(DateTime<FixedOffset>),
    InternalId(InternalId),
    String(String),
    Blob(Bytes),
    List {
        element_type: LogicalType,
        elements: Vec<Value>,
    },
    Array {
        element_type: LogicalType,
        elements: Vec<Value>,
    },
    Struct(HashMap<String, Value>),
    Node(Node),
    Rel(Rel),
    RecursiveRel(RecursiveRel),
    Map {
        key_type: LogicalType,
        value_type: LogicalType,
        pairs: HashMap<Value, Value>,
    },
    Union {
        types: HashMap<String, LogicalType>,
        value: Box<Value>,
    },
    Uuid(Uuid),
    Decimal(BigDecimal),
}

impl Value {
    /// Name of the variant as written on the wire.
    pub fn kind(&self) -> &'static str {
        use Value::*;
        match self {
            Null(..) => "Null",
            Bool(..) => "Bool",
            Int64(..) => "Int64",
            Int32(..) => "Int32",
            Int16(..) => "Int16",
            Int8(..) => "Int8",
            UInt64(..) => "UInt64",
            UInt32(..) => "UInt32",
            UInt16(..) => "UInt16",
            UInt8(..) => "UInt8",
            Int128(..) => "Int128",
            Double(..) => "Double",
            Float(..) => "Float",
            Date(..) => "Date",
            Interval(..) => "Interval",
            Timestamp(..) => "Timestamp",
            TimestampTz(..) => "TimestampTz",
            TimestampNs(..) => "TimestampNs",
            TimestampMs(..) => "TimestampMs",
            TimestampSec(..) => "TimestampSec",
            InternalId(..) => "InternalID",
            String(..) => "String",
            Blob(..) => "Blob",
            List { .. } => "List",
            Array { .. } => "Array",
            Struct(..) => "Struct",
            Node(..) => "Node",
            Rel(..) => "Rel",
            RecursiveRel(..) => "RecursiveRel",
            Map { .. } => "Map",
            Union { .. } => "Union",
            Uuid(..) => "UUID",
            Decimal(..) => "Decimal",
        }
    }

    pub fn null(declared_type: LogicalType) -> Value {
        Value::Null(declared_type)
    }

    pub fn list(element_type: LogicalType, elements: impl IntoIterator<Item = Value>) -> Value {
        Value::List {
            element_type,
            elements: elements.into_iter().collect(),
        }
    }

    pub fn array(element_type: LogicalType, elements: impl IntoIterator<Item = Value>) -> Value {
        Value::Array {
            element_type,
            elements: elements.into_iter().collect(),
        }
    }

    pub fn struct_from<N: Into<String>>(fields: impl IntoIterator<Item = (N, Value)>) -> Value {
        Value::Struct(fields.into_iter().map(|(n, v)| (n.into(), v)).collect())
    }

    pub fn map(
        key_type: LogicalType,
        value_type: LogicalType,
        pairs: impl IntoIterator<Item = (Value, Value)>,
    ) -> Value {
        Value::Map {
            key_type,
            value_type,
            pairs: pairs.into_iter().collect(),
        }
    }

    /// A union holding `value`, with `types` listing every alternative.
    pub fn union<N: Into<String>>(
        types: impl IntoIterator<Item = (N, LogicalType)>,
        value: Value,
    ) -> Value {
        Value::Union {
            types: types.into_iter().map(|(n, t)| (n.into(), t)).collect(),
            value: Box::new(value),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null(..))
    }
}

/// Hash a map so that equal maps hash equally regardless of iteration order.
pub(crate) fn hash_unordered<K: Hash, V: Hash, H: Hasher>(map: &HashMap<K, V>, state: &mut H) {
    let combined = map.iter().fold(0u64, |acc, entry| {
        let mut hasher = DefaultHasher::new();
        entry.hash(&mut hasher);
        acc.wrapping_add(hasher.finish())
    });
    state.write_usize(map.len());
    state.write_u64(combined);
}

// Floats are compared by bit pattern so that `Value` can be a map key.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Null(a), Null(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Int64(a), Int64(b)) => a == b,
            (Int32(a), Int32(b)) => a == b,
            (Int16(a), Int16(b)) => a == b,
            (Int8(a), Int8(b)) => a == b,
            (UInt64(a), UInt64(b)) => a == b,
            (UInt32(a), UInt32(b)) => a == b,
            (UInt16(a), UInt16(b)) => a == b,
            (UInt8(a), UInt8(b)) => a == b,
            (Int128(a), Int128(b)) => a == b,
            (Double(a), Double(b)) => a.to_bits() == b.to_bits(),
            (Float(a), Float(b)) => a.to_bits() == b.to_bits(),
            (Date(a), Date(b)) => a == b,
            (Interval(a), Interval(b)) => a == b,
            (Timestamp(a), Timestamp(b))
            | (TimestampTz(a), TimestampTz(b))
            | (TimestampNs(a), TimestampNs(b))
            | (TimestampMs(a), TimestampMs(b))
            | (TimestampSec(a), TimestampSec(b)) => a == b,
            (InternalId(a), InternalId(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Blob(a), Blob(b)) => a == b,
            (
                List {
                    element_type: ta,
                    elements: a,
                },
                List {
                    element_type: tb,
                    elements: b,
                },
            )
            | (
                Array {
                    element_type: ta,
                    elements: a,
                },
                Array {
                    element_type: tb,
                    elements: b,
                },
            ) => ta == tb && a == b,
            (Struct(a), Struct(b)) => a == b,
            (Node(a), Node(b)) => a == b,
            (Rel(a), Rel(b)) => a == b,
            (RecursiveRel(a), RecursiveRel(b)) => a == b,
            (
                Map {
                    key_type: ka,
                    value_type: va,
                    pairs: a,
                },
                Map {
                    key_type: kb,
                    value_type: vb,
                    pairs: b,
                },
            ) => ka == kb && va == vb && a == b,
            (
                Union {
                    types: ta,
                    value: a,
                },
                Union {
                    types: tb,
                    value: b,
                },
            ) => ta == tb && a == b,
            (Uuid(a), Uuid(b)) => a == b,
            (Decimal(a), Decimal(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use Value::*;
        std::mem::discriminant(self).hash(state);
        match self {
            Null(t) => t.hash(state),
            Bool(v) => v.hash(state),
            Int64(v) => v.hash(state),
            Int32(v) => v.hash(state),
            Int16(v) => v.hash(state),
            Int8(v) => v.hash(state),
            UInt64(v) => v.hash(state),
            UInt32(v) => v.hash(state),
            UInt16(v) => v.hash(state),
            UInt8(v) => v.hash(state),
            Int128(v) => v.hash(state),
            Double(v) => v.to_bits().hash(state),
            Float(v) => v.to_bits().hash(state),
            Date(v) => v.hash(state),
            Interval(v) => v.hash(state),
            Timestamp(v) | TimestampTz(v) | TimestampNs(v) | TimestampMs(v)
            | TimestampSec(v) => v.hash(state),
            InternalId(v) => v.hash(state),
            String(v) => v.hash(state),
            Blob(v) => v.hash(state),
            List {
                element_type,
                elements,
            }
            | Array {
                element_type,
                elements,
            } => {
                element_type.hash(state);
                elements.hash(state);
            }
            Struct(fields) => hash_unordered(fields, state),
            Node(v) => v.hash(state),
            Rel(v) => v.hash(state),
            RecursiveRel(v) => v.hash(state),
            Map {
                key_type,
                value_type,
                pairs,
            } => {
                key_type.hash(state);
                value_type.hash(state);
                hash_unordered(pairs, state);
            }
            Union { types, value } => {
                hash_unordered(types, state);
                value.hash(state);
            }
            Uuid(v) => v.hash(state),
            Decimal(v) => v.hash(state),
        }
    }
}

struct BlobPayload<'a>(&'a [u8]);

impl Serialize for BlobPayload<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // one JSON number per byte, never base64
        serializer.collect_seq(self.0.iter().map(|b| u16::from(*b)))
    }
}

#[derive(serde::Serialize)]
struct UnionPayload<'a> {
    types: Vec<Pair<&'a std::string::String, &'a LogicalType>>,
    value: &'a Value,
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use Value::*;
        let tag = self.kind();
        match self {
            Null(declared) => Tagged::new(tag, declared).serialize(serializer),
            Bool(v) => Tagged::new(tag, v).serialize(serializer),
            Int64(v) => Tagged::new(tag, v).serialize(serializer),
            Int32(v) => Tagged::new(tag, v).serialize(serializer),
            Int16(v) => Tagged::new(tag, v).serialize(serializer),
            Int8(v) => Tagged::new(tag, v).serialize(serializer),
            UInt64(v) => Tagged::new(tag, v).serialize(serializer),
            UInt32(v) => Tagged::new(tag, v).serialize(serializer),
            UInt16(v) => Tagged::new(tag, v).serialize(serializer),
            UInt8(v) => Tagged::new(tag, v).serialize(serializer),
            Int128(v) => Tagged::new(tag, v).serialize(serializer),
            // JSON has no NaN or infinity
            Double(v) if !v.is_finite() => Err(S::Error::custom(format!(
                "{} value {} cannot be represented in JSON",
                tag, v
            ))),
            Float(v) if !v.is_finite() => Err(S::Error::custom(format!(
                "{} value {} cannot be represented in JSON",
                tag, v
            ))),
            Double(v) => Tagged::new(tag, v).serialize(serializer),
            Float(v) => Tagged::new(tag, v).serialize(serializer),
            Date(v) => Tagged::new(tag, &format_date(*v)).serialize(serializer),
            Interval(v) => {
                let (secs, nanos) = interval_parts(*v);
                Tagged::new(tag, &Pair(secs, nanos)).serialize(serializer)
            }
            Timestamp(v) | TimestampTz(v) | TimestampNs(v) | TimestampMs(v)
            | TimestampSec(v) => Tagged::new(tag, &format_timestamp(v)).serialize(serializer),
            InternalId(v) => Tagged::new(tag, v).serialize(serializer),
            String(v) => Tagged::new(tag, v).serialize(serializer),
            Blob(v) => Tagged::new(tag, &BlobPayload(v)).serialize(serializer),
            List {
                element_type,
                elements,
            }
            | Array {
                element_type,
                elements,
            } => Tagged::new(tag, &Pair(element_type, elements)).serialize(serializer),
            Struct(fields) => Tagged::new(tag, &pairs(fields)).serialize(serializer),
            Node(v) => v.serialize(serializer),
            Rel(v) => v.serialize(serializer),
            RecursiveRel(v) => v.serialize(serializer),
            Map {
                key_type,
                value_type,
                pairs: entries,
            } => Tagged::new(tag, &Pair(Pair(key_type, value_type), pairs(entries)))
                .serialize(serializer),
            Union { types, value } => Tagged::new(
                tag,
                &UnionPayload {
                    types: pairs(types),
                    value,
                },
            )
            .serialize(serializer),
            Uuid(v) => Tagged::new(tag, &v.hyphenated().to_string()).serialize(serializer),
            Decimal(v) => Tagged::new(tag, &v.to_plain_string()).serialize(serializer),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident,)*) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Value {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i64 => Int64,
    i32 => Int32,
    i16 => Int16,
    i8 => Int8,
    u64 => UInt64,
    u32 => UInt32,
    u16 => UInt16,
    u8 => UInt8,
    i128 => Int128,
    f64 => Double,
    f32 => Float,
    NaiveDate => Date,
    TimeDelta => Interval,
    DateTime<FixedOffset> => Timestamp,
    InternalId => InternalId,
    String => String,
    Bytes => Blob,
    Node => Node,
    Rel => Rel,
    RecursiveRel => RecursiveRel,
    Uuid => Uuid,
    BigDecimal => Decimal,
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Value {
        Value::Blob(Bytes::from(v))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Value {
        Value::Timestamp(v.fixed_offset())
    }
}

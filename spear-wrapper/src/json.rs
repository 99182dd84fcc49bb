use serde::{Deserialize, Serialize};

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

// No key-sorting canonicalization here: parameter order is significant, so
// objects serialize in insertion order.
pub fn jsonify<T>(obj: &T) -> String
where
    T: Serialize,
{
    serde_json::to_string(obj).expect("to_string failed on serializable object")
}

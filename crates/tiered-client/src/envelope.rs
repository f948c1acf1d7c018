//! # Result Envelope

use serde::{Deserialize, Serialize};

/// Which tier answered a call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Source {
    Remote,
    #[default]
    Local,
}

/// Uniform `{ "data": ... }` wrapper returned by every resolver operation.
///
/// `source` is never serialized; it exists so callers and tests can tell the
/// tiers apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(skip)]
    pub source: Source,
}

impl<T> Envelope<T> {
    pub fn remote(data: T) -> Self {
        Self {
            data,
            source: Source::Remote,
        }
    }

    pub fn local(data: T) -> Self {
        Self {
            data,
            source: Source::Local,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.source == Source::Remote
    }

    pub fn into_inner(self) -> T {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            data: f(self.data),
            source: self.source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_data_only() {
        let env = Envelope::remote(vec![1, 2]);
        assert_eq!(serde_json::to_string(&env).unwrap(), r#"{"data":[1,2]}"#);
    }
}

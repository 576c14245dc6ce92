use std::fmt::Display;

use crate::pdf::Object;

/// A numbered top level object.
#[derive(Debug, Clone, PartialEq)]
pub struct IndirectObject {
    pub(crate) index: usize,
    pub(crate) generation: u32,
    pub(crate) object: Object,
}

impl IndirectObject {
    /// New object with generation 0.
    pub fn new(index: usize, object: impl Into<Object>) -> Self {
        Self {
            index,
            generation: 0,
            object: object.into(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn object(&self) -> &Object {
        &self.object
    }

    pub fn reference(&self) -> Reference {
        Reference {
            index: self.index,
            generation: self.generation,
        }
    }
}

impl Display for IndirectObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} obj {}", self.index, self.generation, self.object)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl Reference {
    /// Reference to generation 0 of object `index`.
    pub fn new(index: usize) -> Self {
        Self { index, generation: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} R", self.index, self.generation)
    }
}

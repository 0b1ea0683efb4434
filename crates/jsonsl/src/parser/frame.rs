use crate::{
    key::Key,
    value::{Array, Map, Value},
};

/// Stack entry, one per open container.
#[derive(Debug)]
pub(crate) enum Frame {
    Array(Array),
    Object {
        map: Map,
        pending_key: Option<Key>, // key waiting for its value
    },
}

impl Frame {
    pub fn new_array_frame() -> Self {
        Frame::Array(Array::new())
    }

    pub fn new_object_frame() -> Self {
        Frame::Object {
            map: Map::new(),
            pending_key: None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Frame::Array(items) => Value::Array(items),
            Frame::Object { map, .. } => Value::Object(map),
        }
    }
}

/// Where a completed value went.
#[derive(Debug, PartialEq)]
pub(crate) enum Attached {
    /// No container is open: the value is the document root.
    Root(Value),
    InArray,
    InObject,
}

/// Open containers, innermost last. Its length is the current nesting depth.
#[derive(Debug, Default)]
pub(crate) struct FrameStack {
    stack: Vec<Frame>,
}

impl FrameStack {
    pub fn new() -> Self {
        Self {
            stack: Vec::with_capacity(16),
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, frame: Frame) {
        self.stack.push(frame);
    }

    pub fn pop(&mut self) -> Option<Frame> {
        self.stack.pop()
    }

    /// Records the key of the member whose value comes next.
    pub fn set_pending_key(&mut self, key: Key) {
        if let Some(Frame::Object { pending_key, .. }) = self.stack.last_mut() {
            *pending_key = Some(key);
        }
    }

    /// Stores a completed value in the innermost container.
    ///
    /// A duplicate object key overwrites the earlier value but keeps its
    /// position. Returns `None` if the innermost object has no pending key.
    pub fn attach(&mut self, value: Value) -> Option<Attached> {
        match self.stack.last_mut() {
            None => Some(Attached::Root(value)),
            Some(Frame::Array(items)) => {
                items.push(value);
                Some(Attached::InArray)
            }
            Some(Frame::Object { map, pending_key }) => {
                let key = pending_key.take()?;
                map.insert(key, value);
                Some(Attached::InObject)
            }
        }
    }
}

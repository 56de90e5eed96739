//! Parse events and node markers.
//!
//! The parser does not build the tree directly. It records a flat list of
//! events (start a node, consume a token, finish a node) which the
//! [`sink`](crate::sink) later replays into a `rowan` green tree. This makes
//! speculation cheap: restoring a snapshot truncates the event list.
//!
//! Left-recursive shapes (`a.b`, `a + b`, `Ann % (p)`) are built with
//! [`CompletedMarker::precede`], which records a forward-parent link instead
//! of moving events around.

use pyret_ir::NodeKind;

use crate::Parser;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    /// Open a node. `forward_parent` is the distance to a later `Start`
    /// that must be opened before this one.
    Start {
        kind: NodeKind,
        forward_parent: Option<u32>,
    },
    /// Consume the next significant token, with the trivia before it.
    Token,
    Finish,
    /// A start that was abandoned or already emitted through a forward
    /// parent link.
    Tombstone,
}

/// An open node whose kind is decided when it is completed.
#[derive(Debug)]
pub(crate) struct Marker {
    pos: u32,
}

impl Marker {
    pub(crate) fn new(pos: u32) -> Self {
        Marker { pos }
    }

    /// Close the node as `kind`.
    pub(crate) fn complete(self, p: &mut Parser<'_>, kind: NodeKind) -> CompletedMarker {
        if let Some(event) = p.events.get_mut(self.pos as usize) {
            *event = Event::Start {
                kind,
                forward_parent: None,
            };
        }
        p.events.push(Event::Finish);
        CompletedMarker {
            pos: self.pos,
            kind,
        }
    }

    /// Drop the node, keeping whatever was parsed inside it in the parent.
    pub(crate) fn abandon(self, p: &mut Parser<'_>) {
        let idx = self.pos as usize;
        if idx + 1 == p.events.len() && p.events[idx] == Event::Tombstone {
            p.events.pop();
        }
    }
}

/// A finished node that can still be wrapped by a new parent.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CompletedMarker {
    pos: u32,
    kind: NodeKind,
}

impl CompletedMarker {
    /// Start a new node that will enclose this one.
    pub(crate) fn precede(self, p: &mut Parser<'_>) -> Marker {
        let parent = p.start();
        if let Some(Event::Start { forward_parent, .. }) = p.events.get_mut(self.pos as usize) {
            *forward_parent = Some(parent.pos - self.pos);
        }
        parent
    }

    pub(crate) fn kind(self) -> NodeKind {
        self.kind
    }
}

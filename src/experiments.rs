//! A branded doubly-linked sequence built without raw pointers.
//!
//! `GhostSequence` explores how far the borrow checker can be pushed:
//! `ghost-cell` brands every node with the token's lifetime, and
//! `static-rc` splits each node's ownership into two halves, one held by
//! each neighbor (or by the sequence's ends). The result is a linked
//! structure with no `unsafe` at all, at the price of threading a
//! `GhostToken` through every operation.
//!
//! This module is not part of the public API.

use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

pub struct GhostSequence<'id, T> {
    ends: [Option<NodePtr<'id, T>>; 2],
    len: usize,
}

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    element: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

const FRONT: usize = 0;
const BACK: usize = 1;

impl<'id, T> Node<'id, T> {
    fn new(element: T) -> Self {
        let links = [None, None];
        Self { links, element }
    }
}

impl<'id, T> Default for GhostSequence<'id, T> {
    fn default() -> Self {
        let ends = [None, None];
        Self { ends, len: 0 }
    }
}

impl<'id, T> GhostSequence<'id, T> {
    // `node.links[side]` points toward the `side` end, so `links[BACK]` is
    // the successor and `links[FRONT]` the predecessor.
    fn push_at(&mut self, side: usize, element: T, token: &mut GhostToken<'id>) {
        let oppo = 1 - side;
        let (inward, outward) = Full::split(Full::new(GhostCell::new(Node::new(element))));
        match self.ends[side].take() {
            Some(outermost) => {
                outermost.deref().borrow_mut(token).links[side] = Some(inward);
                outward.deref().borrow_mut(token).links[oppo] = Some(outermost);
            }
            None => self.ends[oppo] = Some(inward),
        }
        self.ends[side] = Some(outward);
        self.len += 1;
    }

    fn pop_at(&mut self, side: usize, token: &mut GhostToken<'id>) -> Option<T> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let outermost = self.ends[side].take()?;
        let other_half = match outermost.deref().borrow_mut(token).links[oppo].take() {
            Some(neighbor) => {
                let half = neighbor.deref().borrow_mut(token).links[side]
                    .take()
                    .unwrap();
                self.ends[side] = Some(neighbor);
                half
            }
            None => self.ends[oppo].take().unwrap(),
        };
        self.len -= 1;
        Some(
            Full::into_box(Full::join(other_half, outermost))
                .into_inner()
                .element,
        )
    }

    fn peek_at<'a>(&'a self, side: usize, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.ends[side]
            .as_ref()
            .map(|node| &node.deref().borrow(token).element)
    }
}

impl<'id, T> GhostSequence<'id, T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push_front(&mut self, element: T, token: &mut GhostToken<'id>) {
        self.push_at(FRONT, element, token);
    }

    pub fn push_back(&mut self, element: T, token: &mut GhostToken<'id>) {
        self.push_at(BACK, element, token);
    }

    pub fn pop_front(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(FRONT, token)
    }

    pub fn pop_back(&mut self, token: &mut GhostToken<'id>) -> Option<T> {
        self.pop_at(BACK, token)
    }

    pub fn front<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.peek_at(FRONT, token)
    }

    pub fn back<'a>(&'a self, token: &'a GhostToken<'id>) -> Option<&'a T> {
        self.peek_at(BACK, token)
    }

    // Nodes can only be reclaimed with the token in hand, so teardown is an
    // explicit operation rather than a `Drop` impl.
    pub fn clear(&mut self, token: &mut GhostToken<'id>) {
        while self.pop_front(token).is_some() {}
    }
}

//! Forward references for recursive rules.
//!
//! A [`Forward`] is declared before the rule it names exists; [`Ref`]s
//! taken from it can be embedded in other rules (including the rule
//! itself) and resolve the definition on first use. A `Ref` holds only a
//! weak link, so a rule that refers to itself does not keep itself alive:
//! the owner of the `Forward` does.

use std::cell::OnceCell;
use std::rc::{Rc, Weak};

use dcl_stack::ensure_sufficient_stack;
use tracing::warn;

use super::{Production, Rule};
use crate::Cursor;

type Slot<T> = OnceCell<Rule<T>>;

pub struct Forward<T> {
    slot: Rc<Slot<T>>,
}

impl<T> Forward<T> {
    pub fn new() -> Self {
        Forward {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// A reference to the eventual definition.
    pub fn handle(&self) -> Ref<T> {
        Ref {
            slot: Rc::downgrade(&self.slot),
        }
    }

    /// Supply the definition. Only the first call has any effect.
    pub fn define(&self, rule: Rule<T>) {
        if self.slot.set(rule).is_err() {
            warn!("forward rule defined twice; keeping the first definition");
        }
    }

    pub fn is_defined(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T> Default for Forward<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Production for Forward<T> {
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<T> {
        let rule = self.slot.get()?;
        ensure_sufficient_stack(|| rule.parse(cursor))
    }
}

pub struct Ref<T> {
    slot: Weak<Slot<T>>,
}

impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Ref {
            slot: Weak::clone(&self.slot),
        }
    }
}

impl<T> Production for Ref<T> {
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<T> {
        let Some(slot) = self.slot.upgrade() else {
            warn!("forward rule dropped before use");
            return None;
        };
        let Some(rule) = slot.get() else {
            warn!("forward rule used before definition");
            return None;
        };
        ensure_sufficient_stack(|| rule.parse(cursor))
    }
}

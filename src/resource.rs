//! Capability-gated items.
//!
//! Anything the resolver filters implements [`Resource`]: it names the
//! capability needed to see it and, optionally, the one needed to change it.
//! Display fields carried alongside are irrelevant to authorization.

use crate::types::Capability;

/// An item whose visibility and editability are gated by capabilities.
pub trait Resource {
    /// Capability a role must hold to see this item.
    fn view_capability(&self) -> &str;

    /// Capability a role must hold to modify this item, if it is editable at all.
    fn edit_capability(&self) -> Option<&str> {
        None
    }
}

impl<R: Resource + ?Sized> Resource for &R {
    fn view_capability(&self) -> &str {
        (**self).view_capability()
    }

    fn edit_capability(&self) -> Option<&str> {
        (**self).edit_capability()
    }
}

impl<R: Resource + ?Sized> Resource for Box<R> {
    fn view_capability(&self) -> &str {
        (**self).view_capability()
    }

    fn edit_capability(&self) -> Option<&str> {
        (**self).edit_capability()
    }
}

/// Attaches capability requirements to an arbitrary payload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Gated<T> {
    pub view: Capability,
    pub edit: Option<Capability>,
    pub item: T,
}

impl<T> Gated<T> {
    /// A read-only item visible with `view`.
    pub fn new(view: Capability, item: T) -> Self {
        Gated { view, edit: None, item }
    }

    /// Sets the capability required to edit the item.
    pub fn editable_with(mut self, edit: Capability) -> Self {
        self.edit = Some(edit);
        self
    }

    pub fn into_inner(self) -> T {
        self.item
    }
}

impl<T> Resource for Gated<T> {
    fn view_capability(&self) -> &str {
        self.view.as_str()
    }

    fn edit_capability(&self) -> Option<&str> {
        self.edit.as_ref().map(Capability::as_str)
    }
}

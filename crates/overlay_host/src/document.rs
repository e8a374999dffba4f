//! Document-root class-list contract and in-memory adapters.

use std::{cell::RefCell, rc::Rc};

/// Host service owning the global presentation class list (`document.body` in browsers).
///
/// Implementations mutate the list unconditionally; reference counting across overlays happens
/// one layer up, in the runtime's presentation-flag registry.
pub trait DocumentRoot {
    /// Adds `token` to the root class list. Adding a present token is a no-op.
    fn add_class(&self, token: &str) -> Result<(), String>;

    /// Removes `token` from the root class list. Removing an absent token is a no-op.
    fn remove_class(&self, token: &str) -> Result<(), String>;

    /// Reports whether `token` is currently present.
    fn has_class(&self, token: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op document root for targets without a document.
pub struct NoopDocumentRoot;

impl DocumentRoot for NoopDocumentRoot {
    fn add_class(&self, _token: &str) -> Result<(), String> {
        Ok(())
    }

    fn remove_class(&self, _token: &str) -> Result<(), String> {
        Ok(())
    }

    fn has_class(&self, _token: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory ordered class list mirroring `DOMTokenList` semantics.
pub struct MemoryDocumentRoot {
    classes: Rc<RefCell<Vec<String>>>,
}

impl MemoryDocumentRoot {
    /// Returns the class tokens in insertion order.
    pub fn class_list(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }

    /// Returns the class list joined the way `className` reads.
    pub fn class_name(&self) -> String {
        self.classes.borrow().join(" ")
    }
}

impl DocumentRoot for MemoryDocumentRoot {
    fn add_class(&self, token: &str) -> Result<(), String> {
        validate_token(token)?;
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|existing| existing == token) {
            classes.push(token.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, token: &str) -> Result<(), String> {
        validate_token(token)?;
        self.classes.borrow_mut().retain(|existing| existing != token);
        Ok(())
    }

    fn has_class(&self, token: &str) -> bool {
        self.classes.borrow().iter().any(|existing| existing == token)
    }
}

fn validate_token(token: &str) -> Result<(), String> {
    if token.is_empty() {
        return Err("class token must not be empty".to_string());
    }
    if token.chars().any(char::is_whitespace) {
        return Err(format!("class token `{token}` contains whitespace"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_root_keeps_tokens_unique_and_ordered() {
        let root = MemoryDocumentRoot::default();
        root.add_class("dimmable").expect("add dimmable");
        root.add_class("dimmed").expect("add dimmed");
        root.add_class("dimmable").expect("re-add dimmable");

        assert_eq!(root.class_name(), "dimmable dimmed");

        root.remove_class("dimmable").expect("remove dimmable");
        root.remove_class("blurring").expect("remove absent token");
        assert_eq!(root.class_list(), vec!["dimmed".to_string()]);
        assert!(!root.has_class("dimmable"));
    }

    #[test]
    fn memory_root_rejects_malformed_tokens() {
        let root = MemoryDocumentRoot::default();
        assert!(root.add_class("").is_err());
        assert!(root.add_class("dimmed blurring").is_err());
        assert!(root.class_list().is_empty());
    }

    #[test]
    fn clones_share_the_same_class_list() {
        let root = MemoryDocumentRoot::default();
        let view = root.clone();
        root.add_class("dimmed").expect("add dimmed");
        assert!(view.has_class("dimmed"));
    }
}

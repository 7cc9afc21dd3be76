//! Recursive key finder and alias resolver
//!
//! Providers bury the same field at arbitrary depth under arbitrary parents,
//! so lookups walk the whole document for the first occurrence of a key.
//!
//! # Guarantees
//!
//! - **Deterministic**: pre-order, depth-first, insertion-order traversal;
//!   the first match in that order wins. There is no notion of a "closest"
//!   or "shallowest" match; a deeply nested match occurring earlier in
//!   sibling order shadows a shallower one occurring later.
//! - **Bounded**: traversal runs on an explicit work-stack, so document
//!   depth never translates into native stack depth.
//! - **Read-only**: the input tree is never mutated; results borrow from it.
//!
//! A key hit whose value is null makes the whole enclosing map yield absent:
//! its remaining entries are not descended into, and the search resumes at
//! the map's later siblings.

use crate::value::Value;

/// Find the first occurrence of `key` in pre-order depth-first traversal.
///
/// A map containing `key` directly decides its subtree on the spot: the
/// matched value is returned as-is (not searched further) and the map's
/// other entries are skipped. Absent when no map in the tree carries `key`
/// with a non-null value.
pub fn find<'a>(tree: &'a Value, key: &str) -> Option<&'a Value> {
    let mut stack = vec![tree];

    while let Some(node) = stack.pop() {
        match node {
            Value::Map(entries) => {
                if let Some(hit) = node.get(key) {
                    if !hit.is_null() {
                        return Some(hit);
                    }
                    // Null hit: this subtree yields nothing
                    continue;
                }
                // Reverse push so insertion order pops first
                for (_, child) in entries.iter().rev() {
                    stack.push(child);
                }
            }
            Value::List(items) => {
                for item in items.iter().rev() {
                    stack.push(item);
                }
            }
            Value::Str(_) | Value::Null => {}
        }
    }

    None
}

/// Resolve one canonical field through its ordered alias list.
///
/// Aliases are tried in the given order; the order encodes provider
/// preference and must not be rearranged. The first alias that `find`s a
/// value anywhere in the tree wins, even if a later alias would have matched
/// at a shallower depth.
pub fn resolve<'a>(tree: &'a Value, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| find(tree, key))
}

//! In-place reversal of caller-owned chains.
//!
//! These functions never allocate or free a node. They only rewrite the
//! `next` relation of nodes the caller already owns.

use core::fmt;
use core::ptr::NonNull;

use log::debug;

use super::traits::Link;

/// Returned by [`try_reverse`] when the chain loops back on itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleError;

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("chain contains a cycle")
    }
}

impl core::error::Error for CycleError {}

/// Reverses the chain starting at `head` and returns the new head.
///
/// Every node's `next` ends up pointing at its former predecessor, the
/// former head's `next` becomes `None` and the former tail is returned.
/// An empty chain stays empty. Runs in one pass with O(1) extra space.
///
/// # Safety
///
/// Every node reachable from `head` must be live and not borrowed elsewhere
/// for the duration of the call. The chain must be acyclic: a cyclic chain
/// makes this loop forever. Use [`try_reverse`] when that cannot be proven.
pub unsafe fn reverse<N>(head: Option<NonNull<N>>) -> Option<NonNull<N>>
where
    N: Link<Target = N>,
{
    let mut previous = None;
    let mut current = head;

    while let Some(mut node) = current {
        let node_ref = unsafe { node.as_mut() };
        current = node_ref.next();
        node_ref.set_next(previous);
        previous = Some(node);
    }

    previous
}

/// Returns a node on the cycle reachable from `head`, if there is one.
///
/// Floyd's tortoise and hare, O(1) extra space.
///
/// # Safety
///
/// Every node reachable from `head` must be live.
pub unsafe fn find_cycle<N>(head: Option<NonNull<N>>) -> Option<NonNull<N>>
where
    N: Link<Target = N>,
{
    let step = |node: NonNull<N>| unsafe { node.as_ref().next() };

    let mut slow = head?;
    let mut fast = head?;
    loop {
        fast = step(fast).and_then(step)?;
        slow = step(slow)?;
        if slow == fast {
            return Some(slow);
        }
    }
}

/// Like [`reverse`], but checks for a cycle first.
///
/// A cyclic chain is left untouched and reported as [`CycleError`].
///
/// # Safety
///
/// Every node reachable from `head` must be live and not borrowed elsewhere
/// for the duration of the call.
pub unsafe fn try_reverse<N>(head: Option<NonNull<N>>) -> Result<Option<NonNull<N>>, CycleError>
where
    N: Link<Target = N>,
{
    if unsafe { find_cycle(head) }.is_some() {
        debug!("refusing to reverse a cyclic chain");
        return Err(CycleError);
    }
    Ok(unsafe { reverse(head) })
}

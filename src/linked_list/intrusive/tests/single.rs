extern crate std;

use std::vec;

use core::ptr::NonNull;

use crate::linked_list::intrusive::{
    list::LinkedList,
    single::SingleNode,
    traits::{Link, List, NodeWithValue},
};

#[test]
fn test_single_list_push_pop() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    assert!(list.is_empty());

    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));

    assert_eq!(list.count(), 2);
    assert!(!list.is_empty());

    let popped = list.pop().unwrap();
    assert_eq!(unsafe { *popped.as_ref().value() }, 2);
    assert!(unsafe { popped.as_ref().next() }.is_none());
    assert_eq!(list.count(), 1);

    let popped = list.pop().unwrap();
    assert_eq!(unsafe { *popped.as_ref().value() }, 1);
    assert_eq!(list.count(), 0);

    assert!(list.is_empty());
    assert!(list.pop().is_none());
}

#[test]
fn test_single_list_iter() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);
    let mut node3 = SingleNode::new(3);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));
    list.push(NonNull::from(&mut node3));

    let mut values = vec![];
    unsafe {
        for node in list.iter() {
            values.push(*node.as_ref().value());
        }
    }
    assert_eq!(values, vec![3, 2, 1]);
}

#[test]
fn test_single_list_remove() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);
    let mut node3 = SingleNode::new(3);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));
    list.push(NonNull::from(&mut node3));

    // Remove middle
    let removed = list.remove(NonNull::from(&mut node2));
    assert!(removed.is_some());
    assert_eq!(unsafe { *removed.unwrap().as_ref().value() }, 2);
    assert_eq!(list.count(), 2);

    let mut values = vec![];
    unsafe {
        for node in list.iter() {
            values.push(*node.as_ref().value());
        }
    }
    assert_eq!(values, vec![3, 1]);

    // Remove head
    let removed = list.remove(NonNull::from(&mut node3));
    assert!(removed.is_some());
    assert_eq!(list.count(), 1);
    assert_eq!(unsafe { *list.head().unwrap().as_ref().value() }, 1);

    // Not in the list
    assert!(list.remove(NonNull::from(&mut node2)).is_none());

    // Remove tail
    let removed = list.remove(NonNull::from(&mut node1));
    assert!(removed.is_some());
    assert!(list.is_empty());
}

#[test]
fn test_single_list_quick_remove() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);
    let mut node3 = SingleNode::new(3);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));
    list.push(NonNull::from(&mut node3));

    unsafe {
        list.quick_remove(NonNull::from(&mut node2), Some(NonNull::from(&mut node3)));
        list.quick_remove(NonNull::from(&mut node3), None);
    }
    assert_eq!(list.count(), 1);
    assert_eq!(list.head(), Some(NonNull::from(&mut node1)));
}

#[test]
fn test_single_node_value_mut() {
    let mut node = SingleNode::<i32>::default();
    assert_eq!(*node.value(), 0);
    *node.value_mut() = 7;
    assert_eq!(node.into_value(), 7);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "Node without a parent must be the head")]
fn test_single_list_quick_remove_non_head_without_parent() {
    let mut list = LinkedList::<SingleNode<i32>>::new();
    let mut node1 = SingleNode::new(1);
    let mut node2 = SingleNode::new(2);

    list.push(NonNull::from(&mut node1));
    list.push(NonNull::from(&mut node2));

    unsafe {
        list.quick_remove(NonNull::from(&mut node1), None);
    }
}

use sentinel_queue::{Order, Queue, QueueError, QueueGroup};
use std::iter::FromIterator;

fn contents(queue: &Queue) -> Vec<&str> {
    queue.iter().collect()
}

#[test]
fn sort_reverse_then_dedup_distinct() {
    let mut queue = Queue::new();
    queue.insert_tail("b").unwrap();
    queue.insert_tail("a").unwrap();
    queue.insert_tail("c").unwrap();

    queue.sort(Order::Ascending);
    assert_eq!(contents(&queue), ["a", "b", "c"]);
    queue.reverse();
    assert_eq!(contents(&queue), ["c", "b", "a"]);
    assert_eq!(queue.delete_dup(), 0);
    assert_eq!(contents(&queue), ["c", "b", "a"]);
}

#[test]
fn merge_two_sorted_queues() {
    let mut q1 = Queue::from_iter(["1", "3", "5"]);
    let mut q2 = Queue::from_iter(["2", "4"]);

    let mut group = QueueGroup::new();
    group.push(&mut q1);
    group.push(&mut q2);
    assert_eq!(group.merge(Order::Ascending), 5);
    drop(group);

    assert_eq!(contents(&q1), ["1", "2", "3", "4", "5"]);
    assert_eq!(q1.size(), 5);
    assert_eq!(q2.size(), 0);
}

#[test]
fn empty_queue_edges() {
    let mut queue = Queue::new();
    assert!(queue.remove_head(None).is_none());
    assert!(queue.remove_tail(None).is_none());
    assert_eq!(queue.delete_mid(), Err(QueueError::Empty));
    assert_eq!(queue.delete_dup(), 0);
    assert_eq!(queue.ascend(), 0);
    assert_eq!(queue.descend(), 0);
    queue.swap();
    queue.reverse();
    queue.reverse_k(3);
    queue.sort(Order::Descending);
    assert_eq!(queue.size(), 0);
    queue.free();
}

#[test]
fn singleton_survives_every_transform() {
    let mut queue = Queue::from_iter(["x"]);
    queue.swap();
    queue.reverse();
    queue.reverse_k(4);
    queue.sort(Order::Ascending);
    assert_eq!(queue.delete_dup(), 0);
    assert_eq!(queue.ascend(), 1);
    assert_eq!(queue.descend(), 1);
    assert_eq!(contents(&queue), ["x"]);
    assert!(queue.delete_mid().is_ok());
    assert!(queue.is_empty());
}

#[test]
fn removal_copies_into_buffer() {
    let mut queue = Queue::from_iter(["hello", "world"]);

    let mut buf = [0xff_u8; 4];
    let head = queue.remove_head(Some(&mut buf)).unwrap();
    assert_eq!(head.value(), "hello");
    assert_eq!(&buf, b"hel\0");

    let mut buf = [0xff_u8; 16];
    let tail = queue.remove_tail(Some(&mut buf)).unwrap();
    assert_eq!(tail.into_value(), "world");
    assert_eq!(&buf[..6], b"world\0");
    assert!(buf[6..].iter().all(|&b| b == 0xff));
}

#[test]
fn transforms_compose() {
    let mut queue = Queue::from_iter(["e", "a", "d", "a", "c", "b", "b"]);
    queue.sort(Order::Ascending);
    assert_eq!(contents(&queue), ["a", "a", "b", "b", "c", "d", "e"]);
    assert_eq!(queue.delete_dup(), 4);
    assert_eq!(contents(&queue), ["c", "d", "e"]);
    queue.insert_head("f").unwrap();
    queue.insert_tail("a").unwrap();
    assert_eq!(queue.descend(), 3);
    assert_eq!(contents(&queue), ["f", "e", "a"]);
    queue.reverse_k(2);
    assert_eq!(contents(&queue), ["e", "f", "a"]);
    assert!(queue.delete_mid().is_ok());
    assert_eq!(contents(&queue), ["e", "a"]);
}

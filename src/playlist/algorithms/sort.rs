use crate::playlist::{connect, Link, Node};
use std::ptr::NonNull;

/// Sort the chain starting at `front` by title and return its new front.
///
/// A chain of zero or one node is returned unchanged. The returned front has
/// no `prev`.
///
/// It is unsafe because every node of the chain must be alive and not
/// reachable from anywhere but the chain itself.
pub(crate) unsafe fn merge_sort(front: Link) -> Link {
    let front = match front {
        Some(front) if front.as_ref().next.is_some() => front,
        short => return short,
    };
    let back = split(front);
    merge(merge_sort(Some(front)), merge_sort(back))
}

/// Find the middle node of the chain starting at `front`.
///
/// `slow` moves one node while `fast` moves two, as long as `fast` has two
/// successors, so the front half holds `ceil(n / 2)` nodes.
unsafe fn middle_of(front: NonNull<Node>) -> NonNull<Node> {
    let (mut slow, mut fast) = (front, front);
    loop {
        let leap = match fast.as_ref().next {
            Some(step) => step.as_ref().next,
            None => None,
        };
        match (leap, slow.as_ref().next) {
            (Some(leap), Some(next)) => {
                slow = next;
                fast = leap;
            }
            _ => return slow,
        }
    }
}

/// Cut the chain starting at `front` after its middle node and return the
/// front of the back half, with its `prev` cleared.
pub(crate) unsafe fn split(front: NonNull<Node>) -> Link {
    let mut middle = middle_of(front);
    let back = middle.as_mut().next.take();
    if let Some(mut back) = back {
        back.as_mut().prev = None;
    }
    back
}

#[inline]
unsafe fn title_lt(a: NonNull<Node>, b: NonNull<Node>) -> bool {
    a.as_ref().episode.title < b.as_ref().episode.title
}

/// Merge two sorted chains into one and return its front.
///
/// On equal titles the node of `left` comes first. If either chain is empty
/// the other one is returned as is.
pub(crate) unsafe fn merge(mut left: Link, mut right: Link) -> Link {
    let (mut front, mut back): (Link, Link) = (None, None);
    loop {
        let mut node = match (left, right) {
            (Some(l), Some(r)) => {
                if title_lt(r, l) {
                    right = r.as_ref().next;
                    r
                } else {
                    left = l.as_ref().next;
                    l
                }
            }
            (rest, None) | (None, rest) => {
                return match (back, rest) {
                    (Some(back), Some(rest)) => {
                        connect(back, rest);
                        front
                    }
                    (Some(_), None) => front,
                    (None, rest) => rest,
                };
            }
        };
        match back {
            Some(back) => connect(back, node),
            None => {
                node.as_mut().prev = None;
                front = Some(node);
            }
        }
        back = Some(node);
    }
}

#[cfg(test)]
mod tests {
    use super::{merge, split};
    use crate::playlist::tests::{assert_well_formed, playlist_of, titles};
    use crate::playlist::{connect, last_of, Link, Node, Playlist};
    use crate::Episode;
    use std::ptr::NonNull;

    unsafe fn chain_titles(mut node: Link) -> Vec<String> {
        let mut titles = Vec::new();
        while let Some(current) = node {
            titles.push(current.as_ref().episode.title.clone());
            node = current.as_ref().next;
        }
        titles
    }

    #[test]
    fn split_favours_the_front_half() {
        for (len, front_len) in [(2, 1), (3, 2), (4, 2), (5, 3), (6, 3), (7, 4)].iter() {
            let names: Vec<String> = (0..*len).map(|i| i.to_string()).collect();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            let playlist = playlist_of(&names);
            unsafe {
                let front = playlist.front_node().unwrap();
                let back = split(front);
                let front_titles = chain_titles(Some(front));
                let back_titles = chain_titles(back);
                assert_eq!(front_titles.len(), *front_len);
                assert_eq!(back_titles.len(), len - front_len);
                let back: NonNull<_> = back.unwrap();
                assert_eq!(back.as_ref().prev, None);
                // stitch the halves back so the playlist releases every node
                connect(last_of(front), back);
            }
            assert_eq!(titles(&playlist), names);
            assert_well_formed(&playlist);
        }
    }

    #[test]
    fn merge_short_circuits_on_empty_chain() {
        let playlist = playlist_of(&["A", "B"]);
        unsafe {
            let front = playlist.front_node();
            assert_eq!(merge(front, None), front);
            assert_eq!(merge(None, front), front);
            assert_eq!(merge(None, None), None);
        }
        assert_well_formed(&playlist);
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let left: Playlist = vec![Episode::new("A", 1.0), Episode::new("B", 1.0)]
            .into_iter()
            .collect();
        let right: Playlist = vec![Episode::new("A", 2.0), Episode::new("C", 2.0)]
            .into_iter()
            .collect();
        let merged = unsafe {
            let mut node = merge(left.front_node(), right.front_node());
            // the merged chain now holds the nodes of both playlists
            std::mem::forget(left);
            std::mem::forget(right);
            let mut episodes = Vec::new();
            while let Some(current) = node {
                node = current.as_ref().next;
                episodes.push(Node::into_episode(current).into_parts());
            }
            episodes
        };
        assert_eq!(
            merged,
            [
                ("A".to_string(), 1.0),
                ("A".to_string(), 2.0),
                ("B".to_string(), 1.0),
                ("C".to_string(), 2.0),
            ]
        );
    }
}

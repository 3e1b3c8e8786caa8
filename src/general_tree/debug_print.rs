use core::fmt::{self, Debug, Formatter};
use crate::storage::Storage;
use super::{GeneralTree, Node, DANGLING_LINK_MSG};

/// Prints a leaf as its value and a branch as a single-entry map from its value to the list of its children.
///
/// The rendering walks the links like the other whole-tree algorithms, so it does not recurse for deep trees. It is always printed on a single line; the alternate flag is only passed through to the values.
///
/// ```rust
/// # use lcrs::GeneralTree;
/// # fn main() -> Result<(), lcrs::Error> {
/// let mut tree = GeneralTree::<_>::with_root(1);
/// let root = tree.root().handle();
/// let two = tree.insert_left_child(root, 2)?;
/// tree.insert_right_sibling(two, 3)?;
/// tree.insert_left_child(two, 4)?;
/// assert_eq!(format!("{:?}", tree), "GeneralTree({1: [{2: [4]}, 3]})");
/// assert_eq!(format!("{:?}", GeneralTree::<u8>::new()), "GeneralTree");
/// # Ok(())
/// # }
/// ```
impl<T, K, S> Debug for GeneralTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("GeneralTree")?;
        let root = match &self.root {
            Some(root) => root.clone(),
            None => return Ok(()),
        };
        f.write_str("(")?;
        let mut cursor = root.clone();
        loop {
            let node = self.get(&cursor);
            if let Some(child) = &node.left_child {
                f.write_str("{")?;
                node.value.fmt(f)?;
                f.write_str(": [")?;
                cursor = child.clone();
                continue;
            }
            node.value.fmt(f)?;
            // Close every list which ends here
            loop {
                if cursor == root {
                    return f.write_str(")");
                }
                let node = self.get(&cursor);
                if let Some(sibling) = &node.right_sibling {
                    f.write_str(", ")?;
                    cursor = sibling.clone();
                    break;
                }
                f.write_str("]}")?;
                cursor = node.parent.clone().expect(DANGLING_LINK_MSG);
            }
        }
    }
}

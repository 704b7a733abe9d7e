//! Application state: loaded content, vibe selection, and the saved set

pub mod content;
pub mod favorites;
pub mod filter;
pub mod storage;

pub use content::*;
pub use favorites::*;
pub use filter::*;

/// Remove `value` if the list contains it, append it otherwise. Shared by the
/// vibe selection and the saved-trips set; both preserve append order.
pub(crate) fn toggle_membership<T: PartialEq>(list: &mut Vec<T>, value: T) {
    if let Some(pos) = list.iter().position(|v| *v == value) {
        list.remove(pos);
    } else {
        list.push(value);
    }
}

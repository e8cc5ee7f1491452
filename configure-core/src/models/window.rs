use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize + DeserializeOwned + Debug + Clone + Copy + PartialEq + Eq + Hash + Default + 'static
{
}

/// A backend-agnostic handle used to key a window's configuration queue.
///
/// # Serde
///
/// Generic serde derives need `#[serde(bound = "")]` on every use of the generic, see
/// <https://github.com/serde-rs/serde/issues/1296>.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

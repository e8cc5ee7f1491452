use bitflags::bitflags;
use serde::{de::Visitor, Deserialize, Serialize};

bitflags! {
    /// Why the compositor is moving or resizing a window.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MoveResizeFlags: u32 {
        /// The client asked for it with a configure request.
        const CONFIGURE_REQUEST = 1;
        /// Triggered by the user (grab, keybinding).
        const USER_ACTION = 1 << 1;
        /// A move was requested; the position is sent even if it did not change.
        const MOVE_ACTION = 1 << 2;
        const RESIZE_ACTION = 1 << 3;
        const STATE_CHANGED = 1 << 4;
        const FORCE_MOVE = 1 << 5;
        const PLACEMENT_CHANGED = 1 << 6;
    }
}

impl MoveResizeFlags {
    /// Whether the position has to be part of the configuration regardless of its value.
    #[must_use]
    pub const fn move_requested(self) -> bool {
        self.contains(Self::MOVE_ACTION)
    }
}

// serde impls (derive is not working with the bitflags macro)

impl Serialize for MoveResizeFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for MoveResizeFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FlagsVisitor;

        impl Visitor<'_> for FlagsVisitor {
            type Value = MoveResizeFlags;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a bitfield on 32 bits")
            }

            fn visit_u32<E>(self, v: u32) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(MoveResizeFlags::from_bits_retain(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(v)
                    .map(MoveResizeFlags::from_bits_retain)
                    .map_err(|_| E::custom("move/resize flags do not fit in 32 bits"))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(v)
                    .map(MoveResizeFlags::from_bits_retain)
                    .map_err(|_| E::custom("move/resize flags do not fit in 32 bits"))
            }
        }

        deserializer.deserialize_u32(FlagsVisitor)
    }
}

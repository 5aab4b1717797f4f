//! Directional input handed to the host once per tick.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Directional movement keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MoveFlags: u8 {
        const UP = 1 << 0;
        const RIGHT = 1 << 1;
        const DOWN = 1 << 2;
        const LEFT = 1 << 3;
    }
}

/// Snapshot of the simulated movement keys.
///
/// `pressed` and `released` are edges: keys that went down or up since the
/// host last polled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub held: MoveFlags,
    pub pressed: MoveFlags,
    pub released: MoveFlags,
}

impl InputState {
    /// Whether no key is held.
    pub fn is_idle(&self) -> bool {
        self.held.is_empty()
    }
}

/// Identifier handed out to each walker sharing an [`InputSimulator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WalkerId(u32);

impl fmt::Display for WalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "walker#{}", self.0)
    }
}

/// The session object driving the avatar's movement keys.
///
/// At most one walker owns the simulator at a time. A walker claims it when
/// a walk starts and releases it when the walk ends; a second walker trying
/// to start while the first is still walking is a programming error.
#[derive(Debug, Default)]
pub struct InputSimulator {
    state: InputState,
    owner: Option<WalkerId>,
    next_id: u32,
}

impl InputSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an id for a new walker.
    pub(crate) fn register(&mut self) -> WalkerId {
        let id = WalkerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// The walker currently driving input, if any.
    pub fn owner(&self) -> Option<WalkerId> {
        self.owner
    }

    /// Claim exclusive control for `id`.
    ///
    /// # Panics
    ///
    /// Panics if another walker holds the claim.
    pub(crate) fn claim(&mut self, id: WalkerId) {
        if let Some(owner) = self.owner.filter(|&o| o != id) {
            log::error!("{id} tried to start walking while {owner} is active");
            panic!("input simulator already driven by {owner}");
        }
        self.owner = Some(id);
    }

    /// Drop the claim of `id`. Releasing a claim held by someone else is a
    /// no-op.
    pub(crate) fn release(&mut self, id: WalkerId) {
        if self.owner == Some(id) {
            self.owner = None;
        }
    }

    /// Hold exactly `keys`, recording edges against the previous hold.
    pub(crate) fn hold(&mut self, keys: MoveFlags) {
        let prev = self.state.held;
        self.state.pressed |= keys - prev;
        self.state.released |= prev - keys;
        self.state.held = keys;
    }

    /// Release every key.
    pub(crate) fn clear(&mut self) {
        self.hold(MoveFlags::empty());
    }

    /// Current keys, edges included, without consuming the edges.
    pub fn state(&self) -> InputState {
        self.state
    }

    /// Current keys for this tick. Edges are reset after reading.
    pub fn poll(&mut self) -> InputState {
        let state = self.state;
        self.state.pressed = MoveFlags::empty();
        self.state.released = MoveFlags::empty();
        state
    }
}

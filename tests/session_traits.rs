//! Compile-time guards on the types shared with Bevy and the host.
use arena::{CollidableKind, CollidableRegistry, CollisionSession, CollisionWorld, EventLog, Vitals};
use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(CollisionWorld: Send, Sync, Clone);
assert_impl_all!(CollisionSession: Send, Sync);
assert_impl_all!(Vitals: Send, Sync);
assert_impl_all!(EventLog: Send, Sync, Default);
assert_impl_all!(CollidableKind: Copy);
assert_not_impl_any!(CollidableRegistry: Copy);

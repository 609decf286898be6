//! Shared headless app for collision plugin behaviour tests.

use arena::CollisionPlugin;
use bevy::prelude::{App, MinimalPlugins};
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Headless app running [`CollisionPlugin`], shareable between rspec
/// examples.
#[derive(Debug)]
pub struct ThreadSafeApp(pub App);

impl ThreadSafeApp {
    /// App with the minimal plugin set plus `plugin`. `configure` runs
    /// before the collision plugin is added, so observers and resources it
    /// installs see the first frame.
    pub fn with_collision(plugin: CollisionPlugin, configure: impl FnOnce(&mut App)) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        configure(&mut app);
        app.add_plugins(plugin);
        Self(app)
    }

    /// Wrap the app for sharing between examples.
    pub fn shared(self) -> SharedApp {
        Arc::new(Mutex::new(self))
    }
}

impl Deref for ThreadSafeApp {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ThreadSafeApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: rspec fixtures must be `Clone + Send + Sync` but the suite runs
// serially, and every access to the wrapped `App` goes through the mutex.
unsafe impl Send for ThreadSafeApp {}
unsafe impl Sync for ThreadSafeApp {}

/// Collision app shared between the clones of one fixture.
pub type SharedApp = Arc<Mutex<ThreadSafeApp>>;

/// Lock the shared app, recovering from a panic in an earlier example.
pub fn lock_app(app: &SharedApp) -> MutexGuard<'_, ThreadSafeApp> {
    app.lock().unwrap_or_else(PoisonError::into_inner)
}

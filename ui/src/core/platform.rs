//! Platform glue: task spawning on the Dioxus runtime.

use std::future::Future;

use dioxus::prelude::{spawn, Task};

/// Spawn a future owned by the current component scope.
///
/// The task is dropped with the scope, so nothing it does can outlive an
/// unmounted component.
pub fn spawn_future(fut: impl Future<Output = ()> + 'static) -> Task {
    spawn(fut)
}

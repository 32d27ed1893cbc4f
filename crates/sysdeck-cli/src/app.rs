use sysdeck_core::config::Config;
use sysdeck_core::dispatch::{Dispatcher, ShellSpawner, Spawner};
use sysdeck_core::registry::Registry;

/// Everything the front-end needs, built once at startup and passed down.
pub struct AppContext<S: Spawner = ShellSpawner> {
    pub title: String,
    pub registry: Registry,
    pub dispatcher: Dispatcher<S>,
}

impl AppContext<ShellSpawner> {
    pub fn from_config(config: &Config) -> Self {
        Self {
            title: config.title.clone(),
            registry: config.registry(),
            dispatcher: Dispatcher::new(config.dispatch.clone()),
        }
    }
}

#[cfg(test)]
impl<S: Spawner> AppContext<S> {
    pub fn with_spawner(config: &Config, spawner: S) -> Self {
        Self {
            title: config.title.clone(),
            registry: config.registry(),
            dispatcher: Dispatcher::with_spawner(config.dispatch.clone(), spawner),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;
    use sysdeck_core::dispatch::Spawner;

    /// Records command lines instead of spawning them.
    #[derive(Default)]
    pub struct RecordingSpawner {
        pub calls: Mutex<Vec<String>>,
    }

    impl RecordingSpawner {
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Spawner for RecordingSpawner {
        fn spawn(&self, _shell: &str, command_line: &str) -> std::io::Result<()> {
            self.calls.lock().unwrap().push(command_line.to_string());
            Ok(())
        }
    }
}

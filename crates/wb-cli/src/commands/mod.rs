pub mod listen;
pub mod notation;
pub mod roll;

use wb_engine::{DefaultSource, Dispatcher};

/// Build a dispatcher from an optional seed.
fn dispatcher(seed: Option<u64>) -> Dispatcher<DefaultSource> {
    let source = match seed {
        Some(seed) => DefaultSource::seeded(seed),
        None => DefaultSource::from_entropy(),
    };
    Dispatcher::new(source)
}

mod observers;

pub use observers::{ChartObserver, ObserverContext};

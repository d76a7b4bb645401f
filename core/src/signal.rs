use crate::Result;

/// The OS level `prefers-color-scheme: dark` signal, observed but never owned.
pub trait ColorSchemeSignal {
    /// Keeps a registered listener alive until it is handed back.
    type Listener;

    fn matches(&self) -> bool;

    fn subscribe(&self, callback: Box<dyn Fn(bool)>) -> Result<Self::Listener>;

    fn unsubscribe(&self, listener: Self::Listener);
}

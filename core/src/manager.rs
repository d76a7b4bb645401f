use crate::{ColorSchemeSignal, CookieStore, DarkMode, Dom, Preference};

impl<C, D> DarkMode<C, D>
where
    C: CookieStore + Clone + 'static,
    D: Dom + Clone + 'static,
{
    /// Mount-time reconciliation.
    ///
    /// Subscribes to `signal` and re-applies dark mode when the stored state no
    /// longer matches what the preference resolves to, or always when
    /// `always_update` is set (pages that don't render the class server side).
    /// The returned handle owns the subscription.
    pub fn start<S: ColorSchemeSignal>(&self, signal: S, always_update: bool) -> Mounted<S> {
        let preference = self.preference();

        let listener = {
            let dark_mode = self.clone();
            signal.subscribe(Box::new(move |matches| dark_mode.on_system_change(matches)))
        };
        let listener = listener
            .inspect_err(|err| log::warn!("{}", err))
            .ok();

        let target = preference.resolve(signal.matches());
        let current = self.dark_mode();
        if always_update || target != current {
            log::debug!(
                "dark-mode: reconcile {} -> {} (preference: {}, forced: {})",
                current,
                target,
                preference,
                always_update
            );
            self.apply(target);
        } else {
            log::debug!("dark-mode: already {}", current);
        }

        Mounted {
            signal,
            listener,
            always_update,
        }
    }

    fn on_system_change(&self, matches: bool) {
        // an explicit preference pins the mode
        if self.preference() != Preference::System {
            log::trace!("dark-mode: ignoring system change, preference is pinned");
            return;
        }
        self.apply(matches);
    }
}

/// A running reconciliation; the signal listener lives exactly as long as this.
#[must_use = "dropping the handle unsubscribes from color scheme changes"]
pub struct Mounted<S: ColorSchemeSignal> {
    signal: S,
    listener: Option<S::Listener>,
    always_update: bool,
}

impl<S: ColorSchemeSignal> Mounted<S> {
    pub fn always_update(&self) -> bool {
        self.always_update
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    pub fn stop(self) {}

    fn detach(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.signal.unsubscribe(listener);
        }
    }
}

impl<S: ColorSchemeSignal> Drop for Mounted<S> {
    fn drop(&mut self) {
        self.detach();
    }
}

//! Transport trait and registry entries

use super::{error::Result, log_entry::LogEntry};
use parking_lot::Mutex;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// A destination for log entries
///
/// Transports are registered on a [`Logger`](super::Logger) and receive every
/// entry that passes the logger's level threshold, in registration order.
pub trait Transport: Any + Send {
    fn write(&mut self, entry: &LogEntry) -> Result<()>;

    /// Side channel for entries at or above the notification threshold.
    /// Called right after [`write`](Transport::write).
    fn notify(&mut self, _entry: &LogEntry) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called when the transport is removed from its logger
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn name(&self) -> &str;
}

/// Handle to a registered transport, shared with the caller for identity
/// lookups
pub type SharedTransport = Arc<Mutex<dyn Transport>>;

/// One slot in a logger's transport list
#[derive(Clone)]
pub struct Registration {
    kind: TypeId,
    handle: SharedTransport,
}

impl Registration {
    pub fn new<T: Transport>(transport: T) -> Self {
        Self {
            kind: TypeId::of::<T>(),
            handle: Arc::new(Mutex::new(transport)),
        }
    }

    /// Whether this transport was constructed as a `T`
    pub fn is<T: Transport>(&self) -> bool {
        self.kind == TypeId::of::<T>()
    }

    pub fn kind(&self) -> TypeId {
        self.kind
    }

    pub fn handle(&self) -> &SharedTransport {
        &self.handle
    }

    pub fn name(&self) -> String {
        self.handle.lock().name().to_string()
    }

    pub(crate) fn matches(&self, selector: &Selector<'_>) -> bool {
        match selector {
            Selector::None => false,
            Selector::Kind(kind) => self.kind == *kind,
            Selector::Instance(handle) => Arc::ptr_eq(&self.handle, handle),
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("kind", &self.kind)
            .field("name", &self.name())
            .finish()
    }
}

/// How [`Logger::has`](super::Logger::has) and
/// [`Logger::remove`](super::Logger::remove) pick a transport
#[derive(Clone, Default)]
pub enum Selector<'a> {
    /// Matches nothing
    #[default]
    None,
    /// First transport constructed as the given type
    Kind(TypeId),
    /// The transport behind exactly this handle
    Instance(&'a SharedTransport),
}

impl Selector<'_> {
    pub fn kind<T: Transport>() -> Self {
        Selector::Kind(TypeId::of::<T>())
    }
}

impl<'a> From<&'a SharedTransport> for Selector<'a> {
    fn from(handle: &'a SharedTransport) -> Self {
        Selector::Instance(handle)
    }
}

impl<'a> From<&'a Registration> for Selector<'a> {
    fn from(registration: &'a Registration) -> Self {
        Selector::Instance(registration.handle())
    }
}

impl<'a> From<Option<&'a SharedTransport>> for Selector<'a> {
    fn from(handle: Option<&'a SharedTransport>) -> Self {
        handle.map_or(Selector::None, Selector::Instance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    struct Quiet;

    impl Transport for Quiet {
        fn write(&mut self, _entry: &LogEntry) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "quiet"
        }
    }

    struct Loud;

    impl Transport for Loud {
        fn write(&mut self, _entry: &LogEntry) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "loud"
        }
    }

    #[test]
    fn test_registration_kind() {
        let registration = Registration::new(Quiet);
        assert!(registration.is::<Quiet>());
        assert!(!registration.is::<Loud>());
        assert_eq!(registration.name(), "quiet");
    }

    #[test]
    fn test_selector_matching() {
        let a = Registration::new(Quiet);
        let b = Registration::new(Quiet);

        assert!(!a.matches(&Selector::None));
        assert!(a.matches(&Selector::kind::<Quiet>()));
        assert!(!a.matches(&Selector::kind::<Loud>()));
        assert!(a.matches(&Selector::from(a.handle())));
        assert!(!a.matches(&Selector::from(b.handle())));
        assert!(!a.matches(&Selector::from(None::<&SharedTransport>)));
    }

    #[test]
    fn test_default_close_flushes() {
        struct Counting(usize);

        impl Transport for Counting {
            fn write(&mut self, _entry: &LogEntry) -> Result<()> {
                Ok(())
            }

            fn flush(&mut self) -> Result<()> {
                self.0 += 1;
                Ok(())
            }

            fn name(&self) -> &str {
                "counting"
            }
        }

        let mut transport = Counting(0);
        transport
            .write(&LogEntry::new(LogLevel::Info, "x".into()))
            .unwrap();
        transport.close().unwrap();
        assert_eq!(transport.0, 1);
    }
}

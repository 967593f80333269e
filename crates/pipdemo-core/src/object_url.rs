//! Scoped ownership of revocable object URLs.

use std::rc::Rc;

use crate::error::PreviewError;

/// Host facility that turns bytes into a revocable URL (`blob:` in browsers).
pub trait UrlRegistry {
    fn register(&self, bytes: &[u8], mime: &str) -> Result<String, PreviewError>;
    fn revoke(&self, url: &str);
}

impl<T: UrlRegistry + ?Sized> UrlRegistry for Rc<T> {
    fn register(&self, bytes: &[u8], mime: &str) -> Result<String, PreviewError> {
        (**self).register(bytes, mime)
    }

    fn revoke(&self, url: &str) {
        (**self).revoke(url)
    }
}

/// One registered URL, revoked when the guard is dropped.
pub struct ScopedUrl<R: UrlRegistry> {
    registry: R,
    url: String,
}

impl<R: UrlRegistry> ScopedUrl<R> {
    pub fn acquire(registry: R, bytes: &[u8], mime: &str) -> Result<Self, PreviewError> {
        let url = registry.register(bytes, mime)?;
        Ok(Self { registry, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<R: UrlRegistry> Drop for ScopedUrl<R> {
    fn drop(&mut self) {
        self.registry.revoke(&self.url);
    }
}

impl<R: UrlRegistry> std::fmt::Debug for ScopedUrl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ScopedUrl").field(&self.url).finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Registry that hands out `mem:N` URLs and records revocations.
    #[derive(Default)]
    pub(crate) struct RecordingRegistry {
        pub(crate) registered: Cell<usize>,
        pub(crate) revoked: RefCell<Vec<String>>,
        pub(crate) fail: Cell<bool>,
    }

    impl UrlRegistry for RecordingRegistry {
        fn register(&self, _bytes: &[u8], _mime: &str) -> Result<String, PreviewError> {
            if self.fail.get() {
                return Err(PreviewError::ObjectUrl("quota exceeded".to_string()));
            }
            let n = self.registered.get() + 1;
            self.registered.set(n);
            Ok(format!("mem:{}", n))
        }

        fn revoke(&self, url: &str) {
            self.revoked.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_acquire_and_drop_revokes_once() {
        let registry = Rc::new(RecordingRegistry::default());
        let guard = ScopedUrl::acquire(registry.clone(), b"abc", "image/png").unwrap();
        assert_eq!(guard.url(), "mem:1");
        assert!(registry.revoked.borrow().is_empty());

        drop(guard);
        assert_eq!(*registry.revoked.borrow(), vec!["mem:1".to_string()]);
    }

    #[test]
    fn test_acquire_failure_revokes_nothing() {
        let registry = Rc::new(RecordingRegistry::default());
        registry.fail.set(true);

        let err = ScopedUrl::acquire(registry.clone(), b"abc", "image/png").unwrap_err();
        assert_eq!(err, PreviewError::ObjectUrl("quota exceeded".to_string()));
        assert!(registry.revoked.borrow().is_empty());
    }
}

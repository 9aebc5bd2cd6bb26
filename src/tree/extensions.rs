use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

/// Per-node widget data keyed by type. Each type can appear once per node,
/// which lets widgets attach their own state without the layout core
/// knowing about it.
#[derive(Default)]
pub struct Extensions {
    inner: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.inner.read().unwrap_or_else(PoisonError::into_inner).len();
        f.debug_struct("Extensions").field("count", &count).finish()
    }
}

impl Extensions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T>(&self, value: T) -> Result<Arc<T>, ExtensionError>
    where
        T: Send + Sync + 'static,
    {
        let value = Arc::new(value);
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let type_id = TypeId::of::<T>();
        if guard.contains_key(&type_id) {
            return Err(ExtensionError::AlreadyExists);
        }
        guard.insert(type_id, Box::new(Arc::clone(&value)));
        Ok(value)
    }

    pub fn get<T>(&self) -> Result<Arc<T>, ExtensionError>
    where
        T: Send + Sync + 'static,
    {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let boxed = guard
            .get(&TypeId::of::<T>())
            .ok_or(ExtensionError::Missing)?;
        boxed
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or(ExtensionError::TypeMismatch)
    }

    pub fn remove<T>(&self) -> Result<Arc<T>, ExtensionError>
    where
        T: Send + Sync + 'static,
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let boxed = guard
            .remove(&TypeId::of::<T>())
            .ok_or(ExtensionError::Missing)?;
        boxed
            .downcast::<Arc<T>>()
            .map(|arc| *arc)
            .map_err(|_| ExtensionError::TypeMismatch)
    }
}

#[derive(Debug, Error)]
pub enum ExtensionError {
    #[error("extension already exists")]
    AlreadyExists,
    #[error("extension missing")]
    Missing,
    #[error("extension type mismatch")]
    TypeMismatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct TabState(usize);

    #[test]
    fn insert_and_get() {
        let ext = Extensions::new();
        ext.insert(TabState(2)).unwrap();
        assert_eq!(ext.get::<TabState>().unwrap().0, 2);
    }

    #[test]
    fn duplicate_insert_fails() {
        let ext = Extensions::new();
        ext.insert(TabState(1)).unwrap();
        let err = ext.insert(TabState(2)).unwrap_err();
        assert!(matches!(err, ExtensionError::AlreadyExists));
    }

    #[test]
    fn poisoned_map_stays_usable() {
        let ext = Extensions::new();
        ext.insert(TabState(3)).unwrap();
        std::thread::scope(|scope| {
            let writer = scope.spawn(|| {
                let _guard = ext.inner.write().unwrap();
                panic!("writer died holding the map");
            });
            assert!(writer.join().is_err());
        });
        assert!(ext.inner.is_poisoned());

        assert_eq!(ext.get::<TabState>().unwrap().0, 3);
        ext.insert(7_u8).unwrap();
        assert_eq!(*ext.remove::<u8>().unwrap(), 7);
    }

    #[test]
    fn remove_then_missing() {
        let ext = Extensions::new();
        ext.insert(TabState(5)).unwrap();
        assert_eq!(*ext.remove::<TabState>().unwrap(), TabState(5));
        assert!(matches!(
            ext.get::<TabState>().unwrap_err(),
            ExtensionError::Missing
        ));
    }
}
